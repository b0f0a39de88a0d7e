//! Elevator with two directions and a stop.

use super::{fixed_table, Device};
use crate::builder::{guarded_transition, simple_transition};
use crate::machine::{StateMachine, TransitionError};
use crate::{operation_enum, state_enum};

pub const ELEVATOR_MOVING_UP: &str = "Elevator moving up";
pub const ELEVATOR_MOVING_DOWN: &str = "Elevator moving down";
pub const ELEVATOR_STOPPED: &str = "Elevator stopped";

state_enum! {
    pub enum ElevatorState {
        Idle => "Idle",
        MovingUp => "Moving Up",
        MovingDown => "Moving Down",
    }
}

impl ElevatorState {
    pub fn is_moving(&self) -> bool {
        matches!(self, Self::MovingUp | Self::MovingDown)
    }
}

operation_enum! {
    pub enum ElevatorOperation {
        MoveUp => "move_up",
        MoveDown => "move_down",
        Stop => "stop",
    }
}

/// Starts moving only from `Idle`; stops only while moving.
#[derive(Clone, Debug)]
pub struct ElevatorSystem {
    machine: StateMachine<ElevatorState, ElevatorOperation>,
}

impl ElevatorSystem {
    pub fn new() -> Self {
        Self::in_state(ElevatorState::Idle)
    }

    pub fn move_up(&mut self) -> Result<&'static str, TransitionError> {
        self.machine.apply(ElevatorOperation::MoveUp)
    }

    pub fn move_down(&mut self) -> Result<&'static str, TransitionError> {
        self.machine.apply(ElevatorOperation::MoveDown)
    }

    pub fn stop(&mut self) -> Result<&'static str, TransitionError> {
        self.machine.apply(ElevatorOperation::Stop)
    }
}

impl Default for ElevatorSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for ElevatorSystem {
    type State = ElevatorState;
    type Operation = ElevatorOperation;

    fn in_state(state: ElevatorState) -> Self {
        let table = fixed_table(
            ElevatorState::Idle,
            vec![
                simple_transition(
                    ElevatorOperation::MoveUp,
                    ElevatorState::Idle,
                    ElevatorState::MovingUp,
                    ELEVATOR_MOVING_UP,
                ),
                simple_transition(
                    ElevatorOperation::MoveDown,
                    ElevatorState::Idle,
                    ElevatorState::MovingDown,
                    ELEVATOR_MOVING_DOWN,
                ),
                guarded_transition(
                    ElevatorOperation::Stop,
                    ElevatorState::is_moving,
                    ElevatorState::Idle,
                    ELEVATOR_STOPPED,
                ),
            ],
        );
        Self {
            machine: table.with_current(state),
        }
    }

    fn machine(&self) -> &StateMachine<ElevatorState, ElevatorOperation> {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut StateMachine<ElevatorState, ElevatorOperation> {
        &mut self.machine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::INVALID_OPERATION;

    #[test]
    fn starts_idle() {
        assert_eq!(ElevatorSystem::new().state(), ElevatorState::Idle);
    }

    #[test]
    fn move_up_when_idle() {
        let mut elevator = ElevatorSystem::new();
        assert_eq!(elevator.move_up(), Ok(ELEVATOR_MOVING_UP));
        assert_eq!(elevator.state_label(), "Moving Up");
    }

    #[test]
    fn move_down_when_idle() {
        let mut elevator = ElevatorSystem::new();
        assert_eq!(elevator.move_down(), Ok(ELEVATOR_MOVING_DOWN));
        assert_eq!(elevator.state_label(), "Moving Down");
    }

    #[test]
    fn stop_while_moving() {
        for state in [ElevatorState::MovingUp, ElevatorState::MovingDown] {
            let mut elevator = ElevatorSystem::in_state(state);
            assert_eq!(elevator.stop(), Ok(ELEVATOR_STOPPED));
            assert_eq!(elevator.state(), ElevatorState::Idle);
        }
    }

    #[test]
    fn stop_when_idle() {
        let mut elevator = ElevatorSystem::new();
        assert_eq!(elevator.stop().unwrap_err().to_string(), INVALID_OPERATION);
        assert_eq!(elevator.state(), ElevatorState::Idle);
    }

    #[test]
    fn move_while_moving() {
        for state in [ElevatorState::MovingUp, ElevatorState::MovingDown] {
            let mut elevator = ElevatorSystem::in_state(state);
            assert_eq!(elevator.move_up().unwrap_err().to_string(), INVALID_OPERATION);
            assert_eq!(
                elevator.move_down().unwrap_err().to_string(),
                INVALID_OPERATION
            );
            assert_eq!(elevator.state(), state);
        }
    }

    #[test]
    fn up_again_then_stop() {
        let mut elevator = ElevatorSystem::new();
        elevator.move_up().unwrap();
        assert!(elevator.move_up().is_err());
        assert_eq!(elevator.state(), ElevatorState::MovingUp);
        assert_eq!(elevator.stop(), Ok(ELEVATOR_STOPPED));
        assert_eq!(elevator.state(), ElevatorState::Idle);
    }
}
