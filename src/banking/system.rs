//! Session set and money transfers.

use super::account::{AccountLedger, InMemoryLedger};
use super::error::BankingError;
use super::policy::{TransferKind, TransferPolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{info, warn};

/// Decides whether a user/password pair is acceptable.
pub trait CredentialVerifier {
    fn verify(&self, user: &str, password: &str) -> bool;
}

/// Accepts every credential pair.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl CredentialVerifier for AcceptAll {
    fn verify(&self, _user: &str, _password: &str) -> bool {
        true
    }
}

/// A completed transfer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub sender: String,
    pub receiver: String,
    pub amount: f64,
    pub kind: TransferKind,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Money transfer of ${} ({} transfer) from {} to {} completed",
            self.amount, self.kind, self.sender, self.receiver
        )
    }
}

/// Tracks which users are logged in and vets transfers between them.
///
/// Credentials are checked by `V` and balances are read from `L`. Transfers
/// are reported, not booked: the ledger is never modified.
///
/// # Example
///
/// ```
/// use switchyard::banking::{BankAccount, BankingSystem, InMemoryLedger};
///
/// let ledger = InMemoryLedger::new().with_account(BankAccount::new("user123", 1000.0));
/// let mut bank = BankingSystem::with_ledger(ledger);
///
/// bank.authenticate("user123", "pass123").unwrap();
/// let transfer = bank.transfer_money("user123", "user456", 100.0, "regular").unwrap();
/// assert!(transfer.to_string().starts_with("Money transfer of $100 (regular transfer)"));
/// ```
#[derive(Clone, Debug)]
pub struct BankingSystem<V = AcceptAll, L = InMemoryLedger> {
    logged_in_users: BTreeSet<String>,
    verifier: V,
    ledger: L,
    policy: TransferPolicy,
}

impl BankingSystem {
    /// Accept-all credentials over an empty ledger.
    pub fn new() -> Self {
        Self::with_ledger(InMemoryLedger::new())
    }

    pub fn with_ledger(ledger: InMemoryLedger) -> Self {
        Self::with_parts(AcceptAll, ledger)
    }
}

impl Default for BankingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: CredentialVerifier, L: AccountLedger> BankingSystem<V, L> {
    pub fn with_parts(verifier: V, ledger: L) -> Self {
        Self {
            logged_in_users: BTreeSet::new(),
            verifier,
            ledger,
            policy: TransferPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: TransferPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &TransferPolicy {
        &self.policy
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn is_logged_in(&self, user: &str) -> bool {
        self.logged_in_users.contains(user)
    }

    /// Logged-in users in sorted order.
    pub fn logged_in_users(&self) -> impl Iterator<Item = &str> {
        self.logged_in_users.iter().map(String::as_str)
    }

    /// Start a session for `user`.
    pub fn authenticate(&mut self, user: &str, password: &str) -> Result<String, BankingError> {
        if self.is_logged_in(user) {
            warn!(user, "authentication refused: already logged in");
            return Err(BankingError::AlreadyLoggedIn {
                user: user.to_string(),
            });
        }

        if !self.verifier.verify(user, password) {
            warn!(user, "authentication failed");
            return Err(BankingError::AuthenticationFailed {
                user: user.to_string(),
            });
        }

        self.logged_in_users.insert(user.to_string());
        let message = format!("User {user} authenticated successfully");
        info!(user, "{message}");
        Ok(message)
    }

    /// End the session for `user`. Returns whether a session existed.
    pub fn logout(&mut self, user: &str) -> bool {
        let removed = self.logged_in_users.remove(user);
        if removed {
            info!(user, "user logged out");
        }
        removed
    }

    /// Vet a transfer of `amount` from `sender` to `receiver`.
    ///
    /// Checks run in order: sender session, transfer kind, sender balance.
    /// The amount itself is only compared against the balance.
    pub fn transfer_money(
        &self,
        sender: &str,
        receiver: &str,
        amount: f64,
        kind: &str,
    ) -> Result<Transfer, BankingError> {
        let result = self.check_transfer(sender, receiver, amount, kind);
        match &result {
            Ok(transfer) => info!(sender, receiver, amount, kind, "{transfer}"),
            Err(error) => warn!(sender, receiver, amount, kind, %error, "transfer refused"),
        }
        result
    }

    fn check_transfer(
        &self,
        sender: &str,
        receiver: &str,
        amount: f64,
        kind: &str,
    ) -> Result<Transfer, BankingError> {
        if !self.is_logged_in(sender) {
            return Err(BankingError::SenderNotAuthenticated {
                sender: sender.to_string(),
            });
        }

        let kind = self.policy.admit(kind)?;

        let balance =
            self.ledger
                .balance_of(sender)
                .ok_or_else(|| BankingError::AccountNotFound {
                    account: sender.to_string(),
                })?;

        if balance < amount {
            return Err(BankingError::InsufficientFunds { balance, amount });
        }

        Ok(Transfer {
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            amount,
            kind,
        })
    }
}
