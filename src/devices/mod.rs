//! Concrete toy machines.
//!
//! Each device wraps a [`StateMachine`] built from a fixed transition table
//! and exposes one method per operation. Every method either performs the
//! single transition defined for the current state or returns
//! [`TransitionError::InvalidOperation`] without touching the state.

mod auth;
mod document;
mod elevator;
mod traffic_light;
mod vending;

pub use auth::{AuthOperation, AuthState, UserAuthentication, LOGIN_SUCCESSFUL, LOGOUT_SUCCESSFUL};
pub use document::{
    DocumentEditingSystem, DocumentOperation, DocumentState, DOCUMENT_SAVED, EDITING_RESUMED,
};
pub use elevator::{
    ElevatorOperation, ElevatorState, ElevatorSystem, ELEVATOR_MOVING_DOWN, ELEVATOR_MOVING_UP,
    ELEVATOR_STOPPED,
};
pub use traffic_light::{LightOperation, LightState, TrafficLight};
pub use vending::{
    VendingMachine, VendingOperation, VendingState, COIN_INSERTED, DRINK_DISPENSED,
};

use crate::core::{Operation, State, StateHistory};
use crate::machine::{StateMachine, TransitionError};

/// Shared surface of the devices in this module.
pub trait Device: Sized {
    type State: State;
    type Operation: Operation;

    /// Device placed directly in `state` with an empty history.
    fn in_state(state: Self::State) -> Self;

    fn machine(&self) -> &StateMachine<Self::State, Self::Operation>;

    fn machine_mut(&mut self) -> &mut StateMachine<Self::State, Self::Operation>;

    /// Current state tag.
    fn state(&self) -> Self::State {
        *self.machine().current_state()
    }

    /// Label of the current state.
    fn state_label(&self) -> &'static str {
        self.state().label()
    }

    /// Apply an operation by value rather than through the named method.
    fn apply(&mut self, operation: Self::Operation) -> Result<&'static str, TransitionError> {
        self.machine_mut().apply(operation)
    }

    fn history(&self) -> &StateHistory<Self::State> {
        self.machine().history()
    }
}

/// Build a device table that is known to be well-formed.
pub(crate) fn fixed_table<S, O>(
    initial: S,
    transitions: Vec<crate::machine::Transition<S, O>>,
) -> StateMachine<S, O>
where
    S: State,
    O: Operation,
{
    crate::builder::StateMachineBuilder::new()
        .initial(initial)
        .transitions(transitions)
        .build()
        .expect("device transition tables are non-empty and deterministic")
}
