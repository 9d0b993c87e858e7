//! Board context shared by the turn states.

use crate::config::BoardConfig;
use crate::engine::{EngineError, Outcome, Position, SearchStrategy, Side, TicTacToe};
use crate::game::ports::{BoardPresenter, CellInput, Fade};
use crate::game::states::TurnPhase;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Running score for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    player: u32,
    ai: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    /// Add `points` to `side` and return its new total.
    pub fn add(&mut self, side: Side, points: u32) -> u32 {
        let score = match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        };
        *score = score.saturating_add(points);
        *score
    }
}

/// Everything the turn states read and drive.
pub struct BoardContext {
    pub(crate) engine: TicTacToe,
    pub(crate) scores: Scoreboard,
    pub(crate) presenter: Box<dyn BoardPresenter>,
    pub(crate) input: Box<dyn CellInput>,
    pub(crate) strategy: SearchStrategy,
    pub(crate) replay_offered: bool,
    win_points: u32,
    draw_points: u32,
    fade_speed: f32,
}

impl BoardContext {
    pub(crate) fn new(
        config: &BoardConfig,
        presenter: Box<dyn BoardPresenter>,
        input: Box<dyn CellInput>,
    ) -> Self {
        Self {
            engine: TicTacToe::new(),
            scores: Scoreboard::new(),
            presenter,
            input,
            strategy: config.search,
            replay_offered: false,
            win_points: config.win_points,
            draw_points: config.draw_points,
            fade_speed: config.result_fade_speed,
        }
    }

    /// Place a mark and show it.
    pub(crate) fn apply_move(&mut self, position: Position, side: Side) -> Result<(), EngineError> {
        self.engine.set_move(position.row, position.col, side)?;
        self.presenter.activate_cell(position, side);
        Ok(())
    }

    /// Where the round goes after `mover` placed a mark.
    pub(crate) fn phase_after_move(&self, mover: Side) -> TurnPhase {
        match self.engine.outcome() {
            Some(Outcome::PlayerWin) => TurnPhase::PlayerWin,
            Some(Outcome::AiWin) => TurnPhase::AiWin,
            Some(Outcome::Draw) => TurnPhase::Draw,
            None => match mover {
                Side::Player => TurnPhase::AiTurn,
                Side::Ai => TurnPhase::PlayerTurn,
            },
        }
    }

    /// Award points and present the result of a finished round.
    pub(crate) fn announce(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(side) => {
                let score = self.scores.add(side, self.win_points);
                self.presenter.update_score(side, score);
            }
            None => {
                for side in [Side::Ai, Side::Player] {
                    let score = self.scores.add(side, self.draw_points);
                    self.presenter.update_score(side, score);
                }
            }
        }

        info!(
            ?outcome,
            player = self.scores.score(Side::Player),
            ai = self.scores.score(Side::Ai),
            "Round finished"
        );

        self.presenter.show_outcome(outcome);
        self.presenter.set_play_button_visible(true);
        self.presenter.fade_result_text(Fade::In, self.fade_speed);
        self.replay_offered = true;
    }

    /// Hide the result and clear the board for the next round.
    pub(crate) fn clear_round(&mut self) {
        self.engine.reset();
        self.replay_offered = false;
        self.presenter.set_play_button_visible(false);
        self.presenter.fade_result_text(Fade::Out, self.fade_speed);
    }
}
