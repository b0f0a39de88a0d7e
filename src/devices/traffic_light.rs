//! Cyclic traffic light.

use super::{fixed_table, Device};
use crate::builder::simple_transition;
use crate::core::State;
use crate::machine::{StateMachine, TransitionError};
use crate::{operation_enum, state_enum};

state_enum! {
    pub enum LightState {
        Red => "Red",
        Green => "Green",
        Yellow => "Yellow",
    }
}

operation_enum! {
    pub enum LightOperation {
        Change => "change_state",
    }
}

/// Red → Green → Yellow → Red. `change_state` is legal from every state, so
/// three calls always return the light to where it started.
///
/// # Example
///
/// ```
/// use switchyard::devices::{Device, LightState, TrafficLight};
///
/// let mut light = TrafficLight::new();
/// assert_eq!(light.current_state(), "Red");
///
/// light.change_state().unwrap();
/// assert_eq!(light.state(), LightState::Green);
/// ```
#[derive(Clone, Debug)]
pub struct TrafficLight {
    machine: StateMachine<LightState, LightOperation>,
}

impl TrafficLight {
    pub fn new() -> Self {
        Self::in_state(LightState::Red)
    }

    /// Advance to the next colour. The returned message is the new colour.
    pub fn change_state(&mut self) -> Result<&'static str, TransitionError> {
        self.machine.apply(LightOperation::Change)
    }

    pub fn current_state(&self) -> &'static str {
        self.machine.current_state().label()
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for TrafficLight {
    type State = LightState;
    type Operation = LightOperation;

    fn in_state(state: LightState) -> Self {
        let table = fixed_table(
            LightState::Red,
            vec![
                simple_transition(LightOperation::Change, LightState::Red, LightState::Green, "Green"),
                simple_transition(
                    LightOperation::Change,
                    LightState::Green,
                    LightState::Yellow,
                    "Yellow",
                ),
                simple_transition(LightOperation::Change, LightState::Yellow, LightState::Red, "Red"),
            ],
        );
        Self {
            machine: table.with_current(state),
        }
    }

    fn machine(&self) -> &StateMachine<LightState, LightOperation> {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut StateMachine<LightState, LightOperation> {
        &mut self.machine
    }
}
