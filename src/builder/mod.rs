//! Builder API for table construction.
//!
//! Fluent builders and macros for declaring states, operations and
//! transition tables with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Guard, Operation, State};
use crate::machine::Transition;

/// Create an entry legal from exactly one source state.
///
/// # Example
///
/// ```
/// use switchyard::builder::simple_transition;
/// use switchyard::{operation_enum, state_enum};
///
/// state_enum! {
///     enum Doc {
///         Editing => "Editing",
///         Saved => "Saved",
///     }
/// }
///
/// operation_enum! {
///     enum DocOp {
///         Save => "save_document",
///     }
/// }
///
/// let entry = simple_transition(DocOp::Save, Doc::Editing, Doc::Saved, "saved");
/// assert!(entry.can_execute(&Doc::Editing, &DocOp::Save));
/// ```
pub fn simple_transition<S, O>(operation: O, from: S, to: S, message: &'static str) -> Transition<S, O>
where
    S: State,
    O: Operation,
{
    Transition {
        operation,
        from: Some(from),
        guard: None,
        to,
        message,
    }
}

/// Create an entry legal from every state the predicate admits.
pub fn guarded_transition<S, O, F>(
    operation: O,
    guard: F,
    to: S,
    message: &'static str,
) -> Transition<S, O>
where
    S: State,
    O: Operation,
    F: Fn(&S) -> bool + Send + Sync + 'static,
{
    Transition {
        operation,
        from: None,
        guard: Some(Guard::new(guard)),
        to,
        message,
    }
}
