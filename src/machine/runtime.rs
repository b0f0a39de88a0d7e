//! State machine that applies operations against a transition table.

use crate::core::{Operation, State, StateHistory, StateTransition};
use crate::machine::error::TransitionError;
use crate::machine::transition::Transition;
use chrono::Utc;
use tracing::debug;

/// Table-driven state machine.
///
/// Holds the current state tag, the transition table and the history of
/// successful transitions. Entries are searched in insertion order and the
/// first match wins.
pub struct StateMachine<S: State, O: Operation> {
    current: S,
    transitions: Vec<Transition<S, O>>,
    history: StateHistory<S>,
}

impl<S: State, O: Operation> StateMachine<S, O> {
    /// Create a new state machine in the initial state
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            transitions: Vec::new(),
            history: StateHistory::new(),
        }
    }

    /// Add a transition to the machine
    pub fn add_transition(&mut self, transition: Transition<S, O>) {
        self.transitions.push(transition);
    }

    /// Same table, placed in `state` with an empty history.
    pub fn with_current(mut self, state: S) -> Self {
        self.current = state;
        self.history = StateHistory::new();
        self
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn transitions(&self) -> &[Transition<S, O>] {
        &self.transitions
    }

    /// Look up the entry `operation` would fire from `state` (pure).
    pub fn next(&self, state: &S, operation: &O) -> Option<&Transition<S, O>> {
        self.transitions
            .iter()
            .find(|t| t.can_execute(state, operation))
    }

    /// Check whether `operation` is legal in the current state (pure)
    pub fn can_apply(&self, operation: &O) -> bool {
        self.next(&self.current, operation).is_some()
    }

    /// Operations legal in `state`, in table order without duplicates.
    pub fn operations_from(&self, state: &S) -> Vec<O> {
        let mut operations: Vec<O> = Vec::new();
        for transition in self.transitions.iter().filter(|t| {
            t.can_execute(state, &t.operation)
        }) {
            if !operations.contains(&transition.operation) {
                operations.push(transition.operation);
            }
        }
        operations
    }

    /// Apply `operation` to the machine.
    ///
    /// On success the state moves and the transition is recorded; the entry's
    /// message is returned. Otherwise the state is left untouched and
    /// `TransitionError::InvalidOperation` is returned.
    pub fn apply(&mut self, operation: O) -> Result<&'static str, TransitionError> {
        let from = self.current;

        let Some((to, message)) = self
            .next(&from, &operation)
            .map(|transition| (transition.to, transition.message))
        else {
            debug!(
                state = from.label(),
                operation = operation.name(),
                "operation rejected"
            );
            return Err(TransitionError::invalid(from.label(), operation.name()));
        };

        self.history = self.history.record(StateTransition {
            from,
            to,
            operation: operation.name().to_string(),
            timestamp: Utc::now(),
        });
        self.current = to;

        debug!(
            from = from.label(),
            to = to.label(),
            operation = operation.name(),
            "transition applied"
        );
        Ok(message)
    }
}

impl<S: State, O: Operation> Clone for StateMachine<S, O> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            transitions: self.transitions.clone(),
            history: self.history.clone(),
        }
    }
}

impl<S: State, O: Operation> std::fmt::Debug for StateMachine<S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("transitions", &self.transitions.len())
            .field("history", &self.history.len())
            .finish()
    }
}
