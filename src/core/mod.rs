//! Core state machine types.
//!
//! - States and operations via the `State` and `Operation` traits
//! - Guard predicates for transitions legal from several states
//! - Transition history
//!
//! Nothing in this module mutates a machine; the runtime in
//! [`crate::machine`] does that.

mod guard;
mod history;
mod operation;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use operation::Operation;
pub use state::State;
