//! Vending Machine
//!
//! This example walks a vending machine through a normal purchase and an
//! out-of-order button press.
//!
//! Key concepts:
//! - Two-state toggle (Ready <-> Dispensing)
//! - Invalid operations leave the state unchanged
//! - Transition history
//!
//! Run with: cargo run --example vending_machine
//! Set RUST_LOG=debug to see every transition logged.

use switchyard::devices::{Device, VendingMachine};
use switchyard::machine::Reply;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Vending Machine ===\n");

    let mut machine = VendingMachine::new();
    println!("Initial state: {}\n", machine.state());

    println!("Press select before paying:");
    println!("  -> {}", machine.select_drink().reply());
    println!("  state: {}\n", machine.state());

    println!("Insert a coin:");
    println!("  -> {}", machine.insert_coin().reply());
    println!("  state: {}\n", machine.state());

    println!("Insert another coin while dispensing:");
    println!("  -> {}", machine.insert_coin().reply());
    println!("  state: {}\n", machine.state());

    println!("Select a drink:");
    println!("  -> {}", machine.select_drink().reply());
    println!("  state: {}\n", machine.state());

    let path: Vec<String> = machine
        .history()
        .path()
        .iter()
        .map(|s| s.to_string())
        .collect();
    println!("Path taken: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
}
