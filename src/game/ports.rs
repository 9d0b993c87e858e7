//! Collaborators the board talks to: input and presentation.

use crate::engine::{Outcome, Position, Side};

/// Supplies the cell the player picked this frame, if any.
///
/// Raw device input and hit-testing are resolved before this point.
pub trait CellInput {
    fn selected_cell(&mut self) -> Option<Position>;
}

impl<F> CellInput for F
where
    F: FnMut() -> Option<Position>,
{
    fn selected_cell(&mut self) -> Option<Position> {
        self()
    }
}

/// Direction of a text fade.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Fade {
    In,
    Out,
}

/// Receives fire-and-forget presentation notifications from the board.
pub trait BoardPresenter {
    /// Show the round result text.
    fn show_outcome(&mut self, outcome: Outcome);

    /// Set the displayed score for one side.
    fn update_score(&mut self, side: Side, score: u32);

    /// Show the mark of `side` on a cell.
    fn activate_cell(&mut self, position: Position, side: Side);

    /// Hide both marks on a cell.
    fn deactivate_cell(&mut self, position: Position);

    fn set_play_button_visible(&mut self, _visible: bool) {}

    /// Start fading the result text; `speed` is alpha per second.
    fn fade_result_text(&mut self, _fade: Fade, _speed: f32) {}
}
