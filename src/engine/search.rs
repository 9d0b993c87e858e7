//! Minimax move selection for the AI side.
//!
//! Scores are from the AI's point of view: an AI line scores `WIN - depth`,
//! a Player line `depth - WIN`, a full board `0`. Depth 0 is the position
//! right after the candidate AI move.

use super::board::{line_winner, Cell, Position, Side, TicTacToe, CELL_COUNT};
use super::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Score of a won position before the depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// How the game tree is walked. Both strategies pick the same move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Visit every node.
    #[default]
    Minimax,
    /// Skip branches that cannot change the result.
    AlphaBeta,
}

type Grid = [Cell; CELL_COUNT];

struct Search {
    strategy: SearchStrategy,
    nodes: u64,
}

impl Search {
    fn score(
        &mut self,
        grid: &mut Grid,
        depth: i32,
        ai_to_move: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if let Some(side) = line_winner(grid) {
            return match side {
                Side::Ai => WIN_SCORE - depth,
                Side::Player => depth - WIN_SCORE,
            };
        }
        if grid.iter().all(|cell| !cell.is_empty()) {
            return 0;
        }

        let mover = if ai_to_move { Side::Ai } else { Side::Player };
        let mut best = if ai_to_move { i32::MIN } else { i32::MAX };

        for index in 0..CELL_COUNT {
            if !grid[index].is_empty() {
                continue;
            }

            grid[index] = Cell::Occupied(mover);
            let score = self.score(grid, depth + 1, !ai_to_move, alpha, beta);
            grid[index] = Cell::Empty;

            if ai_to_move {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.strategy == SearchStrategy::AlphaBeta && alpha >= beta {
                break;
            }
        }

        best
    }
}

impl TicTacToe {
    /// Best move for the AI using exhaustive minimax.
    ///
    /// Ties go to the first candidate in row-major order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use minigame::engine::{Position, Side, TicTacToe};
    ///
    /// let mut game = TicTacToe::new();
    /// game.set_move(0, 0, Side::Player).unwrap();
    /// game.set_move(0, 1, Side::Player).unwrap();
    ///
    /// assert_eq!(game.find_next_move().unwrap(), Position::new(0, 2));
    /// ```
    pub fn find_next_move(&self) -> Result<Position, EngineError> {
        self.find_next_move_with(SearchStrategy::Minimax)
    }

    /// Best move for the AI using the given strategy.
    ///
    /// Fails when the game is already decided or no cell is empty.
    pub fn find_next_move_with(&self, strategy: SearchStrategy) -> Result<Position, EngineError> {
        if self.is_game_over() {
            return Err(EngineError::GameAlreadyOver);
        }
        if !self.is_any_move_left() {
            return Err(EngineError::NoMovesLeft);
        }

        let mut grid = *self.cells();
        let mut search = Search { strategy, nodes: 0 };
        let mut best: Option<(Position, i32)> = None;

        for position in self.empty_positions() {
            let index = position.index();
            let alpha = best.map_or(i32::MIN, |(_, score)| score);

            grid[index] = Cell::Occupied(Side::Ai);
            let score = search.score(&mut grid, 0, false, alpha, i32::MAX);
            grid[index] = Cell::Empty;

            trace!(%position, score, "Scored candidate");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((position, score));
            }
        }

        let (position, score) = best.ok_or(EngineError::NoMovesLeft)?;
        debug!(%position, score, nodes = search.nodes, ?strategy, "AI move selected");
        Ok(position)
    }
}
