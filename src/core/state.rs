//! Core State trait for frame-stepped state machines.
//!
//! A state is a unit of behavior with four lifecycle hooks. The machine that
//! owns it calls `enter` on activation, `update` (and `fixed_update`) once per
//! step while it is current, and `exit` on deactivation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Error type returned by fallible state hooks.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Result of a fallible state hook.
pub type HookResult = Result<Step, HookError>;

/// Identifier of a state, unique within one machine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub u32);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for StateId {
    fn from(value: u32) -> Self {
        StateId(value)
    }
}

/// What the active state wants the machine to do after a hook returns.
///
/// Transitions are applied by the machine as soon as the hook returns, so a
/// state never keeps running after asking to leave.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    /// Remain in the current state.
    Stay,

    /// Switch to the state registered under this id.
    Goto(StateId),
}

impl Step {
    /// Request a transition to `id`.
    pub fn goto(id: impl Into<StateId>) -> Self {
        Step::Goto(id.into())
    }
}

/// Trait for machine states.
///
/// `C` is the context the owning orchestrator passes on every call. All hooks
/// except the identity accessors have no-op defaults, so a concrete state only
/// overrides what it uses.
///
/// # Example
///
/// ```rust
/// use minigame::core::{HookResult, State, StateId, Step};
/// use std::time::Duration;
///
/// struct Blink {
///     frames: u32,
/// }
///
/// impl State<Vec<&'static str>> for Blink {
///     fn id(&self) -> StateId {
///         StateId(0)
///     }
///
///     fn name(&self) -> &str {
///         "Blink"
///     }
///
///     fn enter(&mut self, log: &mut Vec<&'static str>) {
///         self.frames = 0;
///         log.push("on");
///     }
///
///     fn update(&mut self, _log: &mut Vec<&'static str>, _dt: Duration) -> HookResult {
///         self.frames += 1;
///         Ok(Step::Stay)
///     }
/// }
/// ```
pub trait State<C> {
    /// Identifier the state is registered under.
    fn id(&self) -> StateId;

    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Called once when the state becomes current.
    fn enter(&mut self, _ctx: &mut C) {}

    /// Called once per variable-rate step while current.
    fn update(&mut self, _ctx: &mut C, _dt: Duration) -> HookResult {
        Ok(Step::Stay)
    }

    /// Called once per fixed-rate step while current.
    fn fixed_update(&mut self, _ctx: &mut C, _dt: Duration) -> HookResult {
        Ok(Step::Stay)
    }

    /// Called once when the state stops being current.
    fn exit(&mut self, _ctx: &mut C) {}
}
