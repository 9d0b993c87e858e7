//! The 3x3 grid and its rule checks.

use super::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Rows and columns on the board.
pub const SIZE: usize = 3;

pub(crate) const CELL_COUNT: usize = SIZE * SIZE;

/// Winning lines as cell indices: rows, columns, diagonals.
pub(crate) const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The two sides of a match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// Board glyph for this side.
    pub fn mark(self) -> char {
        match self {
            Side::Player => 'X',
            Side::Ai => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Ai => write!(f, "AI"),
        }
    }
}

/// Contents of one cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Side),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn occupant(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }
}

/// A (row, column) pair on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major cell index. Only meaningful when `is_on_board`.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self::new(index / SIZE, index % SIZE)
    }

    pub fn is_on_board(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// All nine positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// How a finished round ended.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWin,
    AiWin,
    Draw,
}

impl Outcome {
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::Player => Outcome::PlayerWin,
            Side::Ai => Outcome::AiWin,
        }
    }

    /// The winning side, `None` for a draw.
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::PlayerWin => Some(Side::Player),
            Outcome::AiWin => Some(Side::Ai),
            Outcome::Draw => None,
        }
    }
}

/// Side holding a complete line, if any.
pub(crate) fn line_winner(cells: &[Cell; CELL_COUNT]) -> Option<Side> {
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(side) if cells[a] == cells[b] && cells[b] == cells[c] => Some(side),
        _ => None,
    })
}

/// Tic-tac-toe rule engine.
///
/// Holds the grid only. Whose turn it is belongs to the caller.
///
/// # Example
///
/// ```rust
/// use minigame::engine::{Side, TicTacToe};
///
/// let mut game = TicTacToe::new();
/// game.set_move(0, 0, Side::Ai).unwrap();
/// game.set_move(0, 1, Side::Ai).unwrap();
/// game.set_move(0, 2, Side::Ai).unwrap();
///
/// assert!(game.is_game_over());
/// assert_eq!(game.winner(), Some(Side::Ai));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    cells: [Cell; CELL_COUNT],
}

impl TicTacToe {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
        debug!("Board reset");
    }

    /// Mark the cell at `row`, `col` for `side`.
    ///
    /// Fails on coordinates off the board and on occupied cells; the board is
    /// left unchanged in both cases.
    pub fn set_move(&mut self, row: usize, col: usize, side: Side) -> Result<(), EngineError> {
        let position = Position::new(row, col);
        if !position.is_on_board() {
            return Err(EngineError::OutOfBounds { row, col });
        }

        let cell = &mut self.cells[position.index()];
        if let Cell::Occupied(occupant) = *cell {
            return Err(EngineError::CellOccupied { row, col, occupant });
        }

        *cell = Cell::Occupied(side);
        debug!(%side, %position, "Move placed");
        Ok(())
    }

    /// Read a cell, `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        let position = Position::new(row, col);
        position
            .is_on_board()
            .then(|| self.cells[position.index()])
    }

    /// True when `position` is on the board and unoccupied.
    pub fn is_empty(&self, position: Position) -> bool {
        self.cell(position.row, position.col)
            .is_some_and(Cell::is_empty)
    }

    pub fn is_any_move_left(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }

    /// True when one side holds a complete row, column or diagonal.
    ///
    /// A full board without a line is a draw, not game over.
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&self) -> Option<Side> {
        line_winner(&self.cells)
    }

    /// The round's outcome once it is decided.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(side) => Some(Outcome::win_for(side)),
            None if !self.is_any_move_left() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|p| self.cells[p.index()].is_empty())
    }

    /// Number of occupied cells.
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(SIZE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let glyph = cell.occupant().map_or('.', Side::mark);
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}
