//! Tic-tac-toe rule engine and AI search.
//!
//! Everything here is a pure computation over a 3x3 grid: no I/O, no timing,
//! and no notion of whose turn it is.

mod board;
mod error;
mod search;

pub use board::{Cell, Outcome, Position, Side, TicTacToe, SIZE};
pub use error::EngineError;
pub use search::{SearchStrategy, WIN_SCORE};
