//! Core state machine types.
//!
//! This module contains the building blocks every machine shares:
//! - The `State` trait with its four lifecycle hooks
//! - `StateId` and the `Step` transition request
//! - `Timer` for states that wait or fade over several frames
//! - Bounded transition history

mod history;
mod state;
mod timer;

pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use state::{HookError, HookResult, State, StateId, Step};
pub use timer::Timer;

pub(crate) use timer::secs;
