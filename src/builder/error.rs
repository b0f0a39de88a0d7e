//! Build errors for state machine and transition builders.

use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition operation not specified. Call .on(operation)")]
    MissingOperation,

    #[error("Transition source not specified. Call .from(state) or .when(predicate)")]
    MissingSource,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition message not specified. Call .reports(message)")]
    MissingMessage,

    #[error("Operation '{operation}' is defined twice from state '{state}'")]
    DuplicateTransition { state: String, operation: String },
}
