//! Builder for constructing state machines.

use crate::core::{State, StateId, DEFAULT_HISTORY_LIMIT};
use crate::machine::{FiniteStateMachine, MachineError};

/// Builder for constructing state machines with a fluent API.
///
/// Registration errors surface from `build`, so a wiring mistake fails in one
/// place instead of at every `add` call site.
pub struct MachineBuilder<C> {
    states: Vec<Box<dyn State<C>>>,
    initial: Option<StateId>,
    history_limit: usize,
}

impl<C> MachineBuilder<C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Add a state.
    pub fn state<S>(mut self, state: S) -> Self
    where
        S: State<C> + 'static,
    {
        self.states.push(Box::new(state));
        self
    }

    /// Add multiple boxed states at once.
    pub fn states(mut self, states: Vec<Box<dyn State<C>>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Set the state to activate in `start`.
    pub fn initial(mut self, id: impl Into<StateId>) -> Self {
        self.initial = Some(id.into());
        self
    }

    /// Cap the number of transitions the machine remembers.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the machine without activating any state.
    ///
    /// Returns an error on the first duplicate id, or when the initial state
    /// was set but never added.
    pub fn build(self) -> Result<FiniteStateMachine<C>, MachineError> {
        let mut machine = FiniteStateMachine::with_history_limit(self.history_limit);
        for state in self.states {
            machine.add_boxed(state)?;
        }

        if let Some(id) = self.initial {
            if !machine.contains(id) {
                return Err(MachineError::UnknownState { id });
            }
        }

        Ok(machine)
    }

    /// Build the machine and enter the initial state.
    ///
    /// Without an initial state the machine is returned idle.
    pub fn start(self, ctx: &mut C) -> Result<FiniteStateMachine<C>, MachineError> {
        let initial = self.initial;
        let mut machine = self.build()?;
        if let Some(id) = initial {
            machine.set_current_state(id, ctx)?;
        }
        Ok(machine)
    }
}

impl<C> Default for MachineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
