//! Rule engine error types.

use super::board::Side;
use thiserror::Error;

/// Errors raised by the tic-tac-toe rule engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Row or column outside `0..3`
    #[error("Cell ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    /// The cell already holds a mark
    #[error("Cell ({row}, {col}) is already occupied by {occupant}")]
    CellOccupied {
        row: usize,
        col: usize,
        occupant: Side,
    },

    /// Search requested on a full board
    #[error("No empty cells remain on the board")]
    NoMovesLeft,

    /// Search requested after a side already completed a line
    #[error("The game is already decided")]
    GameAlreadyOver,
}
