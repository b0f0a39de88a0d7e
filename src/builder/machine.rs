//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Operation, State};
use crate::machine::{StateMachine, Transition};

/// Builder for constructing state machines with a fluent API.
///
/// `build` rejects tables where two entries for the same operation accept a
/// common source state, so every `(state, operation)` pair has at most one
/// outcome.
pub struct StateMachineBuilder<S: State, O: Operation> {
    initial: Option<S>,
    transitions: Vec<Transition<S, O>>,
}

impl<S: State, O: Operation> StateMachineBuilder<S, O> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, O>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, O>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, O>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing or the table is
    /// ambiguous.
    pub fn build(self) -> Result<StateMachine<S, O>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        check_deterministic(&self.transitions)?;

        let mut machine = StateMachine::new(initial);
        for transition in self.transitions {
            machine.add_transition(transition);
        }

        Ok(machine)
    }
}

impl<S: State, O: Operation> Default for StateMachineBuilder<S, O> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_deterministic<S: State, O: Operation>(
    transitions: &[Transition<S, O>],
) -> Result<(), BuildError> {
    for (i, earlier) in transitions.iter().enumerate() {
        let sources = earlier.sources();
        for later in &transitions[i + 1..] {
            if later.operation != earlier.operation {
                continue;
            }
            if let Some(state) = later.sources().into_iter().find(|s| sources.contains(s)) {
                return Err(BuildError::DuplicateTransition {
                    state: state.label().to_string(),
                    operation: earlier.operation.name().to_string(),
                });
            }
        }
    }
    Ok(())
}
