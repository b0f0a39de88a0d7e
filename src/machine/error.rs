//! Transition errors.

use thiserror::Error;

/// Sentinel reported when an operation is not legal in the current state.
pub const INVALID_OPERATION: &str = "Invalid operation in current state";

/// Errors that can occur when applying an operation.
///
/// The state machine is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Invalid operation in current state")]
    InvalidOperation { state: String, operation: String },
}

impl TransitionError {
    pub(crate) fn invalid(state: &str, operation: &str) -> Self {
        Self::InvalidOperation {
            state: state.to_string(),
            operation: operation.to_string(),
        }
    }
}

/// Collapse an operation outcome into the user-facing message: the success
/// message, or the sentinel.
pub trait Reply {
    fn reply(self) -> String;
}

impl Reply for Result<&'static str, TransitionError> {
    fn reply(self) -> String {
        match self {
            Ok(message) => message.to_string(),
            Err(error) => error.to_string(),
        }
    }
}
