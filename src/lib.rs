//! Switchyard: small table-driven finite-state machines.
//!
//! Every machine here keeps one state tag and a transition table mapping
//! `(state, operation)` to `(next state, message)`. An operation that has no
//! entry for the current state is not an error condition in the panic sense:
//! it returns [`TransitionError::InvalidOperation`], whose display is the
//! fixed sentinel `"Invalid operation in current state"`, and leaves the
//! state untouched.
//!
//! # Modules
//!
//! - [`core`]: `State` and `Operation` traits, guards, transition history
//! - [`machine`]: the runtime that applies operations to a table
//! - [`builder`]: fluent table builders and the `state_enum!` /
//!   `operation_enum!` macros
//! - [`devices`]: vending machine, traffic light, user authentication,
//!   document editor and elevator
//! - [`commerce`]: products and a shopping cart
//! - [`banking`]: bank accounts and a session/transfer system
//!
//! # Example
//!
//! ```rust
//! use switchyard::devices::{Device, ElevatorState, ElevatorSystem};
//! use switchyard::machine::Reply;
//!
//! let mut elevator = ElevatorSystem::new();
//! assert_eq!(elevator.move_up().reply(), "Elevator moving up");
//! assert_eq!(elevator.move_up().reply(), "Invalid operation in current state");
//! assert_eq!(elevator.stop().reply(), "Elevator stopped");
//! assert_eq!(elevator.state(), ElevatorState::Idle);
//! ```

pub mod banking;
pub mod builder;
pub mod commerce;
pub mod core;
pub mod devices;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use core::{Guard, Operation, State, StateHistory, StateTransition};
pub use machine::{Reply, StateMachine, Transition, TransitionError, INVALID_OPERATION};
