//! Table-driven machine runtime.
//!
//! A machine is a current state tag plus a list of [`Transition`] entries.
//! Applying an operation looks up `(state, operation)` in the table; a hit
//! moves the machine and returns the entry's message, a miss returns
//! [`TransitionError::InvalidOperation`] and changes nothing.

mod error;
mod runtime;
mod transition;

pub use error::{Reply, TransitionError, INVALID_OPERATION};
pub use runtime::StateMachine;
pub use transition::Transition;
