//! Finite-state machine that owns its states and steps the current one.

use crate::core::{
    HookResult, State, StateHistory, StateId, StateTransition, Step, DEFAULT_HISTORY_LIMIT,
};
use crate::machine::error::MachineError;
use chrono::Utc;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info};

struct Slot<C> {
    state: Box<dyn State<C>>,
    entered: bool,
}

/// Registry of states plus one current pointer.
///
/// The machine is generic over the context `C` that the owning orchestrator
/// passes to every hook. Transitions requested by a hook (`Step::Goto`) are
/// applied before `update` returns.
pub struct FiniteStateMachine<C> {
    states: BTreeMap<StateId, Slot<C>>,
    current: Option<StateId>,
    history: StateHistory,
}

impl<C> FiniteStateMachine<C> {
    /// Create an empty machine with no current state.
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty machine that keeps at most `limit` transitions.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            states: BTreeMap::new(),
            current: None,
            history: StateHistory::with_limit(limit),
        }
    }

    /// Register a state under its own id.
    pub fn add<S>(&mut self, state: S) -> Result<(), MachineError>
    where
        S: State<C> + 'static,
    {
        self.add_boxed(Box::new(state))
    }

    /// Register an already boxed state.
    pub fn add_boxed(&mut self, state: Box<dyn State<C>>) -> Result<(), MachineError> {
        let id = state.id();
        if let Some(existing) = self.states.get(&id) {
            return Err(MachineError::DuplicateState {
                id,
                existing: existing.state.name().to_string(),
            });
        }

        debug!(state = state.name(), %id, "Registered state");
        self.states.insert(
            id,
            Slot {
                state,
                entered: false,
            },
        );
        Ok(())
    }

    /// Exit the current state (if any) and enter `id`.
    ///
    /// Fails without touching the current state when `id` is not registered.
    pub fn set_current_state(
        &mut self,
        id: impl Into<StateId>,
        ctx: &mut C,
    ) -> Result<(), MachineError> {
        let id = id.into();
        if !self.states.contains_key(&id) {
            return Err(MachineError::UnknownState { id });
        }

        info!(
            from = self.current.and_then(|from| self.state_name(from)).unwrap_or("none"),
            to = self.state_name(id).unwrap_or("none"),
            "State transition"
        );

        let from = self.current.take();
        if let Some(slot) = from.and_then(|from| self.states.get_mut(&from)) {
            slot.state.exit(ctx);
            slot.entered = false;
        }

        let slot = self
            .states
            .get_mut(&id)
            .ok_or(MachineError::UnknownState { id })?;
        slot.state.enter(ctx);
        slot.entered = true;
        self.current = Some(id);

        self.history.push(StateTransition {
            from,
            to: id,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Run one variable-rate step of the current state.
    ///
    /// No-op when no state is current.
    pub fn update(&mut self, ctx: &mut C, dt: Duration) -> Result<(), MachineError> {
        self.dispatch(ctx, |state, ctx| state.update(ctx, dt))
    }

    /// Run one fixed-rate step of the current state.
    pub fn fixed_update(&mut self, ctx: &mut C, dt: Duration) -> Result<(), MachineError> {
        self.dispatch(ctx, |state, ctx| state.fixed_update(ctx, dt))
    }

    fn dispatch<F>(&mut self, ctx: &mut C, hook: F) -> Result<(), MachineError>
    where
        F: FnOnce(&mut Box<dyn State<C>>, &mut C) -> HookResult,
    {
        let Some(id) = self.current else {
            return Ok(());
        };

        let slot = self
            .states
            .get_mut(&id)
            .ok_or(MachineError::UnknownState { id })?;
        debug_assert!(slot.entered, "current state was never entered");

        let step = hook(&mut slot.state, ctx).map_err(|source| MachineError::StateFailed {
            state: slot.state.name().to_string(),
            source,
        })?;

        match step {
            Step::Stay => Ok(()),
            Step::Goto(next) => self.set_current_state(next, ctx),
        }
    }

    /// Exit the current state and leave the machine without one.
    pub fn stop(&mut self, ctx: &mut C) {
        if let Some(id) = self.current.take() {
            if let Some(slot) = self.states.get_mut(&id) {
                info!(state = slot.state.name(), "Stopping state machine");
                slot.state.exit(ctx);
                slot.entered = false;
            }
        }
    }

    /// The active state, if any.
    pub fn current_state(&self) -> Option<&dyn State<C>> {
        self.current
            .and_then(|id| self.states.get(&id))
            .map(|slot| slot.state.as_ref())
    }

    /// Id of the active state, if any.
    pub fn current_id(&self) -> Option<StateId> {
        self.current
    }

    /// True when a state is registered under `id`.
    pub fn contains(&self, id: impl Into<StateId>) -> bool {
        self.states.contains_key(&id.into())
    }

    /// True when the state under `id` has been entered and not yet exited.
    pub fn is_entered(&self, id: impl Into<StateId>) -> bool {
        self.states
            .get(&id.into())
            .is_some_and(|slot| slot.entered)
    }

    /// Name of the state registered under `id`.
    pub fn state_name(&self, id: StateId) -> Option<&str> {
        self.states.get(&id).map(|slot| slot.state.name())
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Most recent transitions, oldest first.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }
}

impl<C> Default for FiniteStateMachine<C> {
    fn default() -> Self {
        Self::new()
    }
}
