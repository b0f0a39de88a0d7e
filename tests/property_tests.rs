//! Property-based tests for the machines and the cart.
//!
//! These tests use proptest to check that the transition rules hold across
//! arbitrary starting states and operation sequences.

use proptest::prelude::*;
use switchyard::commerce::{Product, ShoppingCart};
use switchyard::core::State;
use switchyard::devices::{
    AuthOperation, AuthState, Device, DocumentEditingSystem, DocumentOperation, DocumentState,
    ElevatorOperation, ElevatorState, ElevatorSystem, LightState, TrafficLight,
    UserAuthentication, VendingMachine, VendingOperation, VendingState,
};
use switchyard::INVALID_OPERATION;

/// Apply `operation` from `start` and check the table's verdict: a legal
/// operation moves and records one transition, an illegal one is a no-op
/// that reports the sentinel.
fn check_operation<D: Device>(start: D::State, operation: D::Operation) -> Result<(), TestCaseError> {
    let mut device = D::in_state(start);
    let legal = device.machine().can_apply(&operation);

    let result = device.apply(operation);

    if legal {
        prop_assert!(result.is_ok());
        prop_assert_eq!(device.history().len(), 1);
    } else {
        prop_assert_eq!(result.unwrap_err().to_string(), INVALID_OPERATION);
        prop_assert_eq!(device.state(), start);
        prop_assert!(device.history().is_empty());
    }
    Ok(())
}

fn vending_state() -> impl Strategy<Value = VendingState> {
    prop::sample::select(VendingState::all().to_vec())
}

fn vending_operation() -> impl Strategy<Value = VendingOperation> {
    prop::sample::select(vec![VendingOperation::InsertCoin, VendingOperation::SelectDrink])
}

fn document_state() -> impl Strategy<Value = DocumentState> {
    prop::sample::select(DocumentState::all().to_vec())
}

fn document_operation() -> impl Strategy<Value = DocumentOperation> {
    prop::sample::select(vec![DocumentOperation::Save, DocumentOperation::Edit])
}

fn auth_state() -> impl Strategy<Value = AuthState> {
    prop::sample::select(AuthState::all().to_vec())
}

fn auth_operation() -> impl Strategy<Value = AuthOperation> {
    prop::sample::select(vec![AuthOperation::Login, AuthOperation::Logout])
}

fn elevator_state() -> impl Strategy<Value = ElevatorState> {
    prop::sample::select(ElevatorState::all().to_vec())
}

fn elevator_operation() -> impl Strategy<Value = ElevatorOperation> {
    prop::sample::select(vec![
        ElevatorOperation::MoveUp,
        ElevatorOperation::MoveDown,
        ElevatorOperation::Stop,
    ])
}

fn light_state() -> impl Strategy<Value = LightState> {
    prop::sample::select(LightState::all().to_vec())
}

proptest! {
    #[test]
    fn vending_operations_follow_table(start in vending_state(), op in vending_operation()) {
        check_operation::<VendingMachine>(start, op)?;
    }

    #[test]
    fn document_operations_follow_table(start in document_state(), op in document_operation()) {
        check_operation::<DocumentEditingSystem>(start, op)?;
    }

    #[test]
    fn auth_operations_follow_table(start in auth_state(), op in auth_operation()) {
        check_operation::<UserAuthentication>(start, op)?;
    }

    #[test]
    fn elevator_operations_follow_table(start in elevator_state(), op in elevator_operation()) {
        check_operation::<ElevatorSystem>(start, op)?;
    }

    #[test]
    fn traffic_light_cycles_in_three(start in light_state()) {
        let mut light = TrafficLight::in_state(start);
        for _ in 0..3 {
            prop_assert!(light.change_state().is_ok());
        }
        prop_assert_eq!(light.state(), start);
        prop_assert_eq!(light.history().len(), 3);
    }

    #[test]
    fn state_stays_in_enumeration(ops in prop::collection::vec(elevator_operation(), 0..20)) {
        let mut elevator = ElevatorSystem::new();
        let mut applied = 0;
        for op in ops {
            if elevator.apply(op).is_ok() {
                applied += 1;
            }
            prop_assert!(ElevatorState::all().contains(&elevator.state()));
        }
        prop_assert_eq!(elevator.history().len(), applied);
    }

    #[test]
    fn history_path_ends_at_current_state(ops in prop::collection::vec(vending_operation(), 1..20)) {
        let mut machine = VendingMachine::new();
        for op in ops {
            let _ = machine.apply(op);
        }
        if let Some(last) = machine.history().path().last() {
            prop_assert_eq!(**last, machine.state());
        }
    }

    #[test]
    fn add_then_remove_same_quantity_empties_line(quantity in 1u32..1000) {
        let product = Product::new("Laptop", 1000.0);
        let mut cart = ShoppingCart::new();

        prop_assert!(cart.add_product(&product, quantity).is_ok());
        prop_assert_eq!(cart.remove_product(&product, quantity), Ok(0));
        prop_assert_eq!(cart.quantity_of(&product), 0);
        prop_assert!(cart.is_empty());
    }

    #[test]
    fn repeated_adds_merge_into_one_line(q1 in 1u32..1000, q2 in 1u32..1000) {
        let product = Product::new("Phone", 50.0);
        let mut cart = ShoppingCart::new();

        prop_assert!(cart.add_product(&product, q1).is_ok());
        prop_assert!(cart.add_product(&product, q2).is_ok());

        prop_assert_eq!(cart.items().len(), 1);
        prop_assert_eq!(cart.quantity_of(&product), q1 + q2);
    }

    #[test]
    fn partial_remove_decrements(total in 2u32..1000, removed in 1u32..1000) {
        prop_assume!(removed < total);
        let product = Product::new("Cable", 5.0);
        let mut cart = ShoppingCart::new();

        prop_assert!(cart.add_product(&product, total).is_ok());

        prop_assert_eq!(cart.remove_product(&product, removed), Ok(total - removed));
        prop_assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn checkout_total_is_sum_of_subtotals(
        quantities in prop::collection::vec(1u32..50, 1..6)
    ) {
        let mut cart = ShoppingCart::new();
        let mut expected = 0.0;
        for (i, quantity) in quantities.iter().enumerate() {
            let price = (i as f64 + 1.0) * 10.0;
            let product = Product::new(format!("item-{i}"), price);
            prop_assert!(cart.add_product(&product, *quantity).is_ok());
            expected += price * f64::from(*quantity);
        }

        prop_assert_eq!(cart.checkout().total, expected);
    }

    #[test]
    fn history_roundtrip_serialization(ops in prop::collection::vec(elevator_operation(), 0..10)) {
        let mut elevator = ElevatorSystem::new();
        for op in ops {
            let _ = elevator.apply(op);
        }

        let json = serde_json::to_string(elevator.history()).unwrap();
        let restored: switchyard::StateHistory<ElevatorState> = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(restored.transitions(), elevator.history().transitions());
    }
}
