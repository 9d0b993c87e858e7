//! Minigame: a tic-tac-toe minigame core on a reusable state machine
//!
//! The crate is the logic half of a small game shell. Rendering, input
//! devices, audio and scene loading stay with the host, which plugs in
//! through a handful of collaborator traits and steps everything once per
//! frame.
//!
//! # Core Concepts
//!
//! - **State machine**: `FiniteStateMachine` owns a closed set of `State`s,
//!   keeps one current and forwards each frame step to it
//! - **Rule engine**: `TicTacToe` validates moves, detects wins and draws, and
//!   picks the AI's move with a minimax search
//! - **Orchestrators**: `BoardController` sequences the turns of a session and
//!   `SplashScreen` sequences the logo presentation
//! - **Application context**: `GameApp` holds the configuration and opens the
//!   first scene
//!
//! # Example
//!
//! ```rust
//! use minigame::engine::{Position, Side, TicTacToe};
//!
//! let mut game = TicTacToe::new();
//! game.set_move(0, 0, Side::Ai).unwrap();
//! game.set_move(0, 1, Side::Ai).unwrap();
//! game.set_move(1, 0, Side::Player).unwrap();
//! game.set_move(1, 1, Side::Player).unwrap();
//!
//! assert_eq!(game.find_next_move().unwrap(), Position::new(0, 2));
//! ```

pub mod app;
pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod game;
pub mod machine;
pub mod splash;

// Re-export commonly used types
pub use app::{GameApp, SceneLoader};
pub use config::GameConfig;
pub use crate::core::{State, StateId, Step, Timer};
pub use engine::{Cell, Outcome, Position, SearchStrategy, Side, TicTacToe};
pub use game::{BoardController, BoardPresenter, CellInput, TurnPhase};
pub use machine::{FiniteStateMachine, MachineError};
pub use splash::{SplashPhase, SplashPresenter, SplashScreen};
