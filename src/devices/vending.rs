//! Coin-operated drink dispenser.

use super::{fixed_table, Device};
use crate::builder::simple_transition;
use crate::machine::{StateMachine, TransitionError};
use crate::{operation_enum, state_enum};

pub const COIN_INSERTED: &str = "Coin Inserted. Select your drink.";
pub const DRINK_DISPENSED: &str = "Drink Dispensed. Thank you!";

state_enum! {
    /// States of a [`VendingMachine`].
    pub enum VendingState {
        Ready => "Ready",
        Dispensing => "Dispensing",
    }
}

operation_enum! {
    pub enum VendingOperation {
        InsertCoin => "insert_coin",
        SelectDrink => "select_drink",
    }
}

/// Two-state toggle: a coin moves `Ready` to `Dispensing`, choosing a drink
/// moves it back.
///
/// # Example
///
/// ```
/// use switchyard::devices::{Device, VendingMachine, VendingState};
/// use switchyard::machine::INVALID_OPERATION;
///
/// let mut machine = VendingMachine::new();
/// assert_eq!(machine.insert_coin().unwrap(), "Coin Inserted. Select your drink.");
/// assert_eq!(machine.state(), VendingState::Dispensing);
///
/// let err = machine.insert_coin().unwrap_err();
/// assert_eq!(err.to_string(), INVALID_OPERATION);
/// assert_eq!(machine.state(), VendingState::Dispensing);
/// ```
#[derive(Clone, Debug)]
pub struct VendingMachine {
    machine: StateMachine<VendingState, VendingOperation>,
}

impl VendingMachine {
    pub fn new() -> Self {
        Self::in_state(VendingState::Ready)
    }

    pub fn insert_coin(&mut self) -> Result<&'static str, TransitionError> {
        self.machine.apply(VendingOperation::InsertCoin)
    }

    pub fn select_drink(&mut self) -> Result<&'static str, TransitionError> {
        self.machine.apply(VendingOperation::SelectDrink)
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for VendingMachine {
    type State = VendingState;
    type Operation = VendingOperation;

    fn in_state(state: VendingState) -> Self {
        let table = fixed_table(
            VendingState::Ready,
            vec![
                simple_transition(
                    VendingOperation::InsertCoin,
                    VendingState::Ready,
                    VendingState::Dispensing,
                    COIN_INSERTED,
                ),
                simple_transition(
                    VendingOperation::SelectDrink,
                    VendingState::Dispensing,
                    VendingState::Ready,
                    DRINK_DISPENSED,
                ),
            ],
        );
        Self {
            machine: table.with_current(state),
        }
    }

    fn machine(&self) -> &StateMachine<VendingState, VendingOperation> {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut StateMachine<VendingState, VendingOperation> {
        &mut self.machine
    }
}
