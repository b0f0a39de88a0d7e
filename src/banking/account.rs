//! Bank account record and balance lookup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::info;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub account_number: String,
    pub balance: f64,
}

impl BankAccount {
    pub fn new(account_number: impl Into<String>, balance: f64) -> Self {
        Self {
            account_number: account_number.into(),
            balance,
        }
    }

    /// Log and return the account description.
    pub fn view_account(&self) -> String {
        let description = self.to_string();
        info!(account = %self.account_number, "{description}");
        description
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The account {} has a balance of {}",
            self.account_number, self.balance
        )
    }
}

/// Where [`crate::banking::BankingSystem`] looks up balances.
pub trait AccountLedger {
    fn account(&self, account_number: &str) -> Option<&BankAccount>;

    fn balance_of(&self, account_number: &str) -> Option<f64> {
        self.account(account_number).map(|account| account.balance)
    }
}

/// Ledger held in memory, keyed by account number.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLedger {
    accounts: HashMap<String, BankAccount>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an account.
    pub fn open(&mut self, account: BankAccount) {
        self.accounts.insert(account.account_number.clone(), account);
    }

    pub fn with_account(mut self, account: BankAccount) -> Self {
        self.open(account);
        self
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountLedger for InMemoryLedger {
    fn account(&self, account_number: &str) -> Option<&BankAccount> {
        self.accounts.get(account_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_keeps_fields() {
        let account = BankAccount::new("12345", 1000.0);
        assert_eq!(account.account_number, "12345");
        assert_eq!(account.balance, 1000.0);
    }

    #[test]
    fn view_account_describes_balance() {
        let account = BankAccount::new("67890", 500.0);
        assert_eq!(
            account.view_account(),
            "The account 67890 has a balance of 500"
        );
    }

    #[test]
    fn ledger_looks_up_balances() {
        let ledger = InMemoryLedger::new()
            .with_account(BankAccount::new("user123", 1000.0))
            .with_account(BankAccount::new("user456", 20.0));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.balance_of("user123"), Some(1000.0));
        assert_eq!(ledger.balance_of("nobody"), None);
    }

    #[test]
    fn open_replaces_existing_account() {
        let mut ledger = InMemoryLedger::new();
        ledger.open(BankAccount::new("user123", 10.0));
        ledger.open(BankAccount::new("user123", 75.0));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.balance_of("user123"), Some(75.0));
    }
}
