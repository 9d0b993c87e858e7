//! Tic-tac-toe board orchestration.
//!
//! `BoardController` owns the rule engine, the scoreboard and a
//! `FiniteStateMachine` running the turn phases:
//!
//! ```text
//! NewGame -> PlayerTurn <-> AiTurn -> PlayerWin | AiWin | Draw -> Reset -> NewGame
//! ```
//!
//! The host calls `update` once per frame with the frame delta and forwards
//! the play-again button to `play_again`.

mod context;
mod ports;
mod states;

pub use context::Scoreboard;
pub use ports::{BoardPresenter, CellInput, Fade};
pub use states::TurnPhase;

use crate::builder::MachineBuilder;
use crate::config::BoardConfig;
use crate::core::{StateHistory, Timer};
use crate::engine::{Outcome, TicTacToe};
use crate::machine::{FiniteStateMachine, MachineError};
use context::BoardContext;
use states::{AiTurn, NewGame, PlayerTurn, Reset, RoundOver};
use std::time::Duration;
use tracing::debug;

/// One-shot fade of the result text left over from the previous scene.
struct IntroFade {
    timer: Timer,
    delay: Duration,
    speed: f32,
}

/// Drives a tic-tac-toe session against the AI.
pub struct BoardController {
    machine: FiniteStateMachine<BoardContext>,
    context: BoardContext,
    intro_fade: Option<IntroFade>,
}

impl BoardController {
    /// Wire the turn phases and enter `NewGame`.
    pub fn new(
        config: &BoardConfig,
        presenter: Box<dyn BoardPresenter>,
        input: Box<dyn CellInput>,
    ) -> Result<Self, MachineError> {
        let mut context = BoardContext::new(config, presenter, input);

        let machine = MachineBuilder::new()
            .state(NewGame::new(config))
            .state(PlayerTurn)
            .state(AiTurn)
            .state(RoundOver::new(Outcome::Draw, config))
            .state(RoundOver::new(Outcome::PlayerWin, config))
            .state(RoundOver::new(Outcome::AiWin, config))
            .state(Reset::new(config))
            .initial(TurnPhase::NewGame)
            .history_limit(config.history_limit)
            .start(&mut context)?;

        Ok(Self {
            machine,
            context,
            intro_fade: Some(IntroFade {
                timer: Timer::new(),
                delay: config.intro_fade_delay(),
                speed: config.intro_fade_speed,
            }),
        })
    }

    /// Advance the session by one frame.
    pub fn update(&mut self, dt: Duration) -> Result<(), MachineError> {
        if let Some(fade) = self.intro_fade.as_mut() {
            fade.timer.tick(dt);
            if fade.timer.has_reached(fade.delay) {
                self.context
                    .presenter
                    .fade_result_text(Fade::Out, fade.speed);
                self.intro_fade = None;
            }
        }

        self.machine.update(&mut self.context, dt)
    }

    /// Start another round once the current one has been announced.
    ///
    /// Returns `false` and does nothing while a round is still in play.
    pub fn play_again(&mut self) -> Result<bool, MachineError> {
        if !self.context.replay_offered {
            if self.is_round_over() {
                debug!(phase = ?self.phase(), "Play again requested before the result was shown");
            } else {
                debug!(phase = ?self.phase(), "Play again requested before round end");
            }
            return Ok(false);
        }

        self.machine
            .set_current_state(TurnPhase::Reset, &mut self.context)?;
        Ok(true)
    }

    /// Current turn phase.
    pub fn phase(&self) -> Option<TurnPhase> {
        self.machine
            .current_id()
            .and_then(|id| TurnPhase::try_from(id).ok())
    }

    /// True while one of the result phases is current.
    pub fn is_round_over(&self) -> bool {
        self.phase().is_some_and(TurnPhase::is_round_over)
    }

    pub fn engine(&self) -> &TicTacToe {
        &self.context.engine
    }

    pub fn scores(&self) -> Scoreboard {
        self.context.scores
    }

    /// True once a round is announced and waiting for `play_again`.
    pub fn is_replay_offered(&self) -> bool {
        self.context.replay_offered
    }

    /// Phase transitions since the controller was created.
    pub fn history(&self) -> &StateHistory {
        self.machine.history()
    }
}
