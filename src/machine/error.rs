//! Errors raised while wiring or stepping a state machine.

use crate::core::{HookError, StateId};
use thiserror::Error;

/// Errors that can occur when registering states or switching between them.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("State id {id} is already registered as '{existing}'")]
    DuplicateState { id: StateId, existing: String },

    #[error("No state registered under id {id}")]
    UnknownState { id: StateId },

    #[error("State '{state}' failed: {source}")]
    StateFailed {
        state: String,
        #[source]
        source: HookError,
    },
}
