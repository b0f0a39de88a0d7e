//! Elevator and Traffic Light
//!
//! This example drives the two machines with more than two states.
//!
//! Key concepts:
//! - Guarded transition: stop is legal from either moving state
//! - Cyclic transitions with no invalid operation
//! - Listing the operations legal in each state
//!
//! Run with: cargo run --example elevator

use switchyard::core::{Operation, State};
use switchyard::devices::{Device, ElevatorState, ElevatorSystem, TrafficLight};
use switchyard::machine::Reply;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Elevator ===\n");

    let mut elevator = ElevatorSystem::new();
    for state in ElevatorState::all() {
        let names: Vec<&str> = elevator
            .machine()
            .operations_from(state)
            .iter()
            .map(Operation::name)
            .collect();
        println!("  legal from {:<12} {}", state.label(), names.join(", "));
    }
    println!();

    println!("move_up   -> {}", elevator.move_up().reply());
    println!("move_up   -> {}", elevator.move_up().reply());
    println!("stop      -> {}", elevator.stop().reply());
    println!("move_down -> {}", elevator.move_down().reply());
    println!("stop      -> {}", elevator.stop().reply());
    println!("stop      -> {}", elevator.stop().reply());
    println!("final state: {}\n", elevator.state());

    println!("=== Traffic Light ===\n");

    let mut light = TrafficLight::new();
    print!("{}", light.current_state());
    for _ in 0..6 {
        print!(" -> {}", light.change_state().reply());
    }
    println!("\n");

    println!("=== Example Complete ===");
}
