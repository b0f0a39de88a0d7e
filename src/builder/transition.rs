//! Builder for constructing transition table entries.

use crate::builder::error::BuildError;
use crate::core::{Guard, Operation, State};
use crate::machine::Transition;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, O: Operation> {
    operation: Option<O>,
    from: Option<S>,
    guard: Option<Guard<S>>,
    to: Option<S>,
    message: Option<&'static str>,
}

impl<S: State, O: Operation> TransitionBuilder<S, O> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            operation: None,
            from: None,
            guard: None,
            to: None,
            message: None,
        }
    }

    /// Set the triggering operation (required).
    pub fn on(mut self, operation: O) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Set the source state.
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Accept any of the listed source states.
    pub fn from_any(self, states: &[S]) -> Self {
        self.guard(Guard::any_of(states))
    }

    /// Add a guard predicate. Guards added earlier must also pass.
    pub fn guard(mut self, guard: Guard<S>) -> Self {
        self.guard = Some(match self.guard.take() {
            Some(existing) => existing.and(guard),
            None => guard,
        });
        self
    }

    /// Add a guard using a closure.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the success message (required).
    pub fn reports(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, O>, BuildError> {
        let operation = self.operation.ok_or(BuildError::MissingOperation)?;
        if self.from.is_none() && self.guard.is_none() {
            return Err(BuildError::MissingSource);
        }
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let message = self.message.ok_or(BuildError::MissingMessage)?;

        Ok(Transition {
            operation,
            from: self.from,
            guard: self.guard,
            to,
            message,
        })
    }
}

impl<S: State, O: Operation> Default for TransitionBuilder<S, O> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Editing,
        Saved,
        Archived,
    }

    impl State for TestState {
        fn label(&self) -> &'static str {
            match self {
                Self::Editing => "Editing",
                Self::Saved => "Saved",
                Self::Archived => "Archived",
            }
        }

        fn all() -> &'static [Self] {
            &[Self::Editing, Self::Saved, Self::Archived]
        }
    }

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    enum TestOp {
        Save,
    }

    impl Operation for TestOp {
        fn name(&self) -> &'static str {
            "save"
        }
    }

    #[test]
    fn builder_requires_operation() {
        let result = TransitionBuilder::<TestState, TestOp>::new()
            .from(TestState::Editing)
            .build();

        assert!(matches!(result, Err(BuildError::MissingOperation)));
    }

    #[test]
    fn builder_requires_source() {
        let result = TransitionBuilder::<TestState, TestOp>::new()
            .on(TestOp::Save)
            .to(TestState::Saved)
            .reports("saved")
            .build();

        assert!(matches!(result, Err(BuildError::MissingSource)));
    }

    #[test]
    fn builder_requires_target_and_message() {
        let result = TransitionBuilder::<TestState, TestOp>::new()
            .on(TestOp::Save)
            .from(TestState::Editing)
            .build();
        assert!(matches!(result, Err(BuildError::MissingToState)));

        let result = TransitionBuilder::<TestState, TestOp>::new()
            .on(TestOp::Save)
            .from(TestState::Editing)
            .to(TestState::Saved)
            .build();
        assert!(matches!(result, Err(BuildError::MissingMessage)));
    }

    #[test]
    fn fluent_api_builds_transition() {
        let transition = TransitionBuilder::new()
            .on(TestOp::Save)
            .from(TestState::Editing)
            .to(TestState::Saved)
            .reports("saved")
            .build()
            .unwrap();

        assert_eq!(transition.from, Some(TestState::Editing));
        assert_eq!(transition.to, TestState::Saved);
        assert_eq!(transition.message, "saved");
        assert!(transition.can_execute(&TestState::Editing, &TestOp::Save));
        assert!(!transition.can_execute(&TestState::Saved, &TestOp::Save));
    }

    #[test]
    fn when_installs_guard() {
        let transition = TransitionBuilder::new()
            .on(TestOp::Save)
            .when(|s: &TestState| matches!(s, TestState::Saved))
            .to(TestState::Editing)
            .reports("reopened")
            .build()
            .unwrap();

        assert_eq!(transition.sources(), vec![TestState::Saved]);
    }

    #[test]
    fn from_any_admits_listed_states() {
        let transition = TransitionBuilder::new()
            .on(TestOp::Save)
            .from_any(&[TestState::Editing, TestState::Archived])
            .to(TestState::Saved)
            .reports("saved")
            .build()
            .unwrap();

        assert_eq!(transition.from, None);
        assert_eq!(
            transition.sources(),
            vec![TestState::Editing, TestState::Archived]
        );
    }

    #[test]
    fn later_guards_narrow_from_any() {
        let transition = TransitionBuilder::new()
            .on(TestOp::Save)
            .from_any(&[TestState::Editing, TestState::Archived])
            .when(|s: &TestState| !matches!(s, TestState::Archived))
            .to(TestState::Saved)
            .reports("saved")
            .build()
            .unwrap();

        assert_eq!(transition.sources(), vec![TestState::Editing]);
        assert!(!transition.can_execute(&TestState::Archived, &TestOp::Save));
    }
}
