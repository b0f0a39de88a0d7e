//! Transition table entries.

use crate::core::{Guard, Operation, State};

/// One row of a transition table: `operation` fired from a matching source
/// state moves the machine to `to` and reports `message`.
///
/// The source is `from`, `guard`, or both. With both set the state must
/// equal `from` and pass the guard.
pub struct Transition<S: State, O: Operation> {
    pub operation: O,
    pub from: Option<S>,
    pub guard: Option<Guard<S>>,
    pub to: S,
    pub message: &'static str,
}

impl<S: State, O: Operation> Transition<S, O> {
    /// Check if this entry applies to `operation` in state `current` (pure)
    pub fn can_execute(&self, current: &S, operation: &O) -> bool {
        if *operation != self.operation {
            return false;
        }

        if self.from.as_ref().is_some_and(|from| from != current) {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(current))
    }

    /// Source states this entry accepts, over the full enumeration.
    pub fn sources(&self) -> Vec<S> {
        S::all()
            .iter()
            .copied()
            .filter(|s| {
                self.from.as_ref().is_none_or(|from| from == s)
                    && self.guard.as_ref().is_none_or(|g| g.check(s))
            })
            .collect()
    }
}

impl<S: State, O: Operation> Clone for Transition<S, O> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation,
            from: self.from,
            guard: self.guard.clone(),
            to: self.to,
            message: self.message,
        }
    }
}

impl<S: State, O: Operation> std::fmt::Debug for Transition<S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("operation", &self.operation)
            .field("sources", &self.sources())
            .field("to", &self.to)
            .field("message", &self.message)
            .finish()
    }
}
