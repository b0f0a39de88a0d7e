//! Banking and Shopping
//!
//! This example logs users into a banking system, attempts transfers, and
//! checks out a shopping cart.
//!
//! Key concepts:
//! - Pluggable credential verification via a trait
//! - Ordered transfer checks with typed errors
//! - Transfer policy loaded from JSON
//!
//! Run with: cargo run --example banking

use switchyard::banking::{
    BankAccount, BankingSystem, CredentialVerifier, InMemoryLedger, TransferPolicy,
};
use switchyard::commerce::{Product, ShoppingCart};
use tracing_subscriber::EnvFilter;

// Demo verifier: a fixed password for everyone
struct SharedSecret(&'static str);

impl CredentialVerifier for SharedSecret {
    fn verify(&self, _user: &str, password: &str) -> bool {
        password == self.0
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Banking ===\n");

    let ledger = InMemoryLedger::new()
        .with_account(BankAccount::new("alice", 1000.0))
        .with_account(BankAccount::new("bob", 50.0));

    let policy = match TransferPolicy::from_json(r#"{ "allowed_kinds": ["regular", "express"] }"#) {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("bad policy: {e}");
            return;
        }
    };

    let mut bank = BankingSystem::with_parts(SharedSecret("hunter2"), ledger).with_policy(policy);

    let attempts = [("alice", "hunter2"), ("alice", "hunter2"), ("bob", "letmein")];
    for (user, password) in attempts {
        match bank.authenticate(user, password) {
            Ok(message) => println!("  {message}"),
            Err(e) => println!("  {user}: {e}"),
        }
    }
    println!();

    let transfers = [
        ("alice", "bob", 100.0, "regular"),
        ("alice", "bob", 100.0, "scheduled"),
        ("alice", "bob", 5000.0, "express"),
        ("bob", "alice", 10.0, "regular"),
    ];
    for (sender, receiver, amount, kind) in transfers {
        match bank.transfer_money(sender, receiver, amount, kind) {
            Ok(transfer) => println!("  {transfer}"),
            Err(e) => println!("  {sender} -> {receiver} ${amount} {kind}: {e}"),
        }
    }

    println!("\n=== Shopping Cart ===\n");

    let laptop = Product::new("Laptop", 1000.0);
    let phone = Product::new("Phone", 50.0);

    let mut cart = ShoppingCart::new();
    for (product, quantity) in [(&laptop, 1), (&phone, 3)] {
        if let Err(e) = cart.add_product(product, quantity) {
            println!("  {e}");
        }
    }
    if let Err(e) = cart.remove_product(&phone, 1) {
        println!("  {e}");
    }

    println!("{}", cart.checkout());

    println!("\n=== Example Complete ===");
}
