//! Transition history tracking.
//!
//! Every successful transition a machine performs is appended to its
//! history. Rejected operations leave no trace here.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum Doc {
///     Editing,
///     Saved,
/// }
///
/// impl State for Doc {
///     fn label(&self) -> &'static str {
///         match self {
///             Self::Editing => "Editing",
///             Self::Saved => "Saved",
///         }
///     }
///
///     fn all() -> &'static [Self] {
///         &[Self::Editing, Self::Saved]
///     }
/// }
///
/// let transition = StateTransition {
///     from: Doc::Editing,
///     to: Doc::Saved,
///     operation: "save_document".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, Doc::Saved);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the operation that caused the transition
    pub operation: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history with the transition added and leaves the
/// receiver untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Path of states traversed: the first source state, then the target of
    /// each transition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::core::{State, StateHistory, StateTransition};
    /// use serde::{Deserialize, Serialize};
    /// use chrono::Utc;
    ///
    /// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    /// enum Light { Red, Green, Yellow }
    ///
    /// impl State for Light {
    ///     fn label(&self) -> &'static str {
    ///         match self {
    ///             Self::Red => "Red",
    ///             Self::Green => "Green",
    ///             Self::Yellow => "Yellow",
    ///         }
    ///     }
    ///
    ///     fn all() -> &'static [Self] {
    ///         &[Self::Red, Self::Green, Self::Yellow]
    ///     }
    /// }
    ///
    /// let history = StateHistory::new()
    ///     .record(StateTransition {
    ///         from: Light::Red,
    ///         to: Light::Green,
    ///         operation: "change_state".to_string(),
    ///         timestamp: Utc::now(),
    ///     })
    ///     .record(StateTransition {
    ///         from: Light::Green,
    ///         to: Light::Yellow,
    ///         operation: "change_state".to_string(),
    ///         timestamp: Utc::now(),
    ///     });
    ///
    /// assert_eq!(history.path(), vec![&Light::Red, &Light::Green, &Light::Yellow]);
    /// ```
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
