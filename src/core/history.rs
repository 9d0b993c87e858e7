//! State transition history tracking.
//!
//! Keeps an ordered record of the transitions a machine performed. `record`
//! returns a new history and leaves the old one untouched; the owning machine
//! appends in place. A history holds at most `limit` entries and drops the
//! oldest first.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use minigame::core::{StateId, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: None,
///     to: StateId(0),
///     timestamp: Utc::now(),
/// };
/// assert!(transition.is_activation());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being left, `None` for the first activation
    pub from: Option<StateId>,
    /// The state being entered
    pub to: StateId,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    /// True when no state was active before this transition.
    pub fn is_activation(&self) -> bool {
        self.from.is_none()
    }
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use minigame::core::{StateHistory, StateId, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition { from: None, to: StateId(0), timestamp: Utc::now() })
///     .record(StateTransition { from: Some(StateId(0)), to: StateId(1), timestamp: Utc::now() });
///
/// assert_eq!(history.get_path(), vec![StateId(0), StateId(1)]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: VecDeque<StateTransition>,
    #[serde(default = "default_limit")]
    limit: usize,
}

/// Entries kept when no explicit limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHistory {
    /// Create a new empty history holding up to `DEFAULT_HISTORY_LIMIT` entries.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new empty history holding up to `limit` entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit,
        }
    }

    /// Maximum number of entries kept.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// ```rust
    /// use minigame::core::{StateHistory, StateId, StateTransition};
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let next = history.record(StateTransition {
    ///     from: None,
    ///     to: StateId(2),
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(next.transitions().len(), 1);
    /// assert_eq!(history.transitions().len(), 0);
    /// ```
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    /// Append a transition in place, dropping the oldest beyond the limit.
    pub(crate) fn push(&mut self, transition: StateTransition) {
        self.transitions.push_back(transition);
        while self.transitions.len() > self.limit {
            self.transitions.pop_front();
        }
    }

    /// Get the path of states traversed.
    ///
    /// Starts with the `from` state of the oldest kept transition when there
    /// was one, followed by the `to` state of every transition.
    pub fn get_path(&self) -> Vec<StateId> {
        let mut path = Vec::new();
        if let Some(from) = self.transitions.front().and_then(|t| t.from) {
            path.push(from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Number of times `id` was entered.
    pub fn visits(&self, id: StateId) -> usize {
        self.transitions.iter().filter(|t| t.to == id).count()
    }

    /// Wall-clock time between the first and last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all kept transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition> {
        &self.transitions
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }
}
