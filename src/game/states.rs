//! Turn-sequencing states for one tic-tac-toe session.

use crate::config::BoardConfig;
use crate::core::{HookResult, State, StateId, Step, Timer};
use crate::engine::{Outcome, Position, Side, SIZE};
use crate::game::context::BoardContext;
use crate::state_ids;
use std::time::Duration;
use tracing::{debug, warn};

state_ids! {
    /// Phases of a round, one machine state each.
    pub enum TurnPhase {
        NewGame,
        PlayerTurn,
        AiTurn,
        Draw,
        PlayerWin,
        AiWin,
        Reset,
    }
}

impl TurnPhase {
    /// The result phase for a finished round.
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::PlayerWin => TurnPhase::PlayerWin,
            Outcome::AiWin => TurnPhase::AiWin,
            Outcome::Draw => TurnPhase::Draw,
        }
    }

    pub fn is_round_over(self) -> bool {
        matches!(self, TurnPhase::Draw | TurnPhase::PlayerWin | TurnPhase::AiWin)
    }
}

/// Waits briefly, then hands the first move to whichever side is due.
///
/// The starting side flips every time the state exits.
pub(crate) struct NewGame {
    player_starts: bool,
    delay: Duration,
    timer: Timer,
}

impl NewGame {
    pub(crate) fn new(config: &BoardConfig) -> Self {
        Self {
            player_starts: config.player_moves_first,
            delay: config.new_game_delay(),
            timer: Timer::new(),
        }
    }
}

impl State<BoardContext> for NewGame {
    fn id(&self) -> StateId {
        TurnPhase::NewGame.id()
    }

    fn name(&self) -> &str {
        "NewGame"
    }

    fn enter(&mut self, _ctx: &mut BoardContext) {
        self.timer.reset();
    }

    fn update(&mut self, _ctx: &mut BoardContext, dt: Duration) -> HookResult {
        self.timer.tick(dt);
        if !self.timer.has_reached(self.delay) {
            return Ok(Step::Stay);
        }

        let first = if self.player_starts {
            TurnPhase::PlayerTurn
        } else {
            TurnPhase::AiTurn
        };
        Ok(Step::goto(first))
    }

    fn exit(&mut self, _ctx: &mut BoardContext) {
        self.player_starts = !self.player_starts;
    }
}

/// Applies the player's selection once they pick an empty cell.
pub(crate) struct PlayerTurn;

impl State<BoardContext> for PlayerTurn {
    fn id(&self) -> StateId {
        TurnPhase::PlayerTurn.id()
    }

    fn name(&self) -> &str {
        "PlayerTurn"
    }

    fn update(&mut self, ctx: &mut BoardContext, _dt: Duration) -> HookResult {
        let Some(position) = ctx.input.selected_cell() else {
            return Ok(Step::Stay);
        };

        if !ctx.engine.is_empty(position) {
            warn!(%position, "Ignoring selection of an unavailable cell");
            return Ok(Step::Stay);
        }

        ctx.apply_move(position, Side::Player)?;
        Ok(Step::goto(ctx.phase_after_move(Side::Player)))
    }
}

/// Searches for and plays the AI's move in a single step.
pub(crate) struct AiTurn;

impl State<BoardContext> for AiTurn {
    fn id(&self) -> StateId {
        TurnPhase::AiTurn.id()
    }

    fn name(&self) -> &str {
        "AiTurn"
    }

    fn update(&mut self, ctx: &mut BoardContext, _dt: Duration) -> HookResult {
        let position = ctx.engine.find_next_move_with(ctx.strategy)?;
        ctx.apply_move(position, Side::Ai)?;
        Ok(Step::goto(ctx.phase_after_move(Side::Ai)))
    }
}

/// Announces a finished round after a short pause, then idles until the
/// player asks for another round.
pub(crate) struct RoundOver {
    outcome: Outcome,
    delay: Duration,
    timer: Timer,
    announced: bool,
}

impl RoundOver {
    pub(crate) fn new(outcome: Outcome, config: &BoardConfig) -> Self {
        Self {
            outcome,
            delay: config.result_delay(),
            timer: Timer::new(),
            announced: false,
        }
    }
}

impl State<BoardContext> for RoundOver {
    fn id(&self) -> StateId {
        TurnPhase::for_outcome(self.outcome).id()
    }

    fn name(&self) -> &str {
        TurnPhase::for_outcome(self.outcome).name()
    }

    fn enter(&mut self, _ctx: &mut BoardContext) {
        self.timer.reset();
        self.announced = false;
    }

    fn update(&mut self, ctx: &mut BoardContext, dt: Duration) -> HookResult {
        if self.announced {
            return Ok(Step::Stay);
        }

        self.timer.tick(dt);
        if self.timer.has_reached(self.delay) {
            ctx.announce(self.outcome);
            self.announced = true;
        }
        Ok(Step::Stay)
    }
}

const CELLS: usize = SIZE * SIZE;

/// Clears the cell visuals one by one, then the board, then starts a new
/// round.
pub(crate) struct Reset {
    interval: Duration,
    timer: Timer,
    cleared: usize,
}

impl Reset {
    pub(crate) fn new(config: &BoardConfig) -> Self {
        Self {
            interval: config.reset_cell_interval(),
            timer: Timer::new(),
            cleared: 0,
        }
    }

    fn due(&self, count: usize) -> bool {
        // count is at most CELLS, so the cast cannot truncate
        self.interval
            .checked_mul(count as u32)
            .is_some_and(|at| self.timer.has_reached(at))
    }
}

impl State<BoardContext> for Reset {
    fn id(&self) -> StateId {
        TurnPhase::Reset.id()
    }

    fn name(&self) -> &str {
        "Reset"
    }

    fn enter(&mut self, _ctx: &mut BoardContext) {
        self.timer.reset();
        self.cleared = 0;
    }

    fn update(&mut self, ctx: &mut BoardContext, dt: Duration) -> HookResult {
        self.timer.tick(dt);

        while self.cleared < CELLS && self.due(self.cleared) {
            let position = Position::new(self.cleared / SIZE, self.cleared % SIZE);
            ctx.presenter.deactivate_cell(position);
            self.cleared += 1;
        }

        if self.cleared == CELLS && self.due(CELLS) {
            debug!("Board cleared");
            ctx.clear_round();
            return Ok(Step::goto(TurnPhase::NewGame));
        }
        Ok(Step::Stay)
    }
}
