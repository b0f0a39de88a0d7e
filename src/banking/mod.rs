//! Bank account records and the session/transfer system.
//!
//! [`BankingSystem`] keeps the set of authenticated users and vets transfers.
//! Credential checks and balance lookups are delegated to the
//! [`CredentialVerifier`] and [`AccountLedger`] traits so a host can plug in
//! real implementations; the defaults accept every credential pair and read
//! balances from an [`InMemoryLedger`].

mod account;
mod error;
mod policy;
mod system;

pub use account::{AccountLedger, BankAccount, InMemoryLedger};
pub use error::BankingError;
pub use policy::{TransferKind, TransferPolicy};
pub use system::{AcceptAll, BankingSystem, CredentialVerifier, Transfer};
