//! Banking errors.

use thiserror::Error;

/// Reasons a banking request is refused. Display strings are the messages
/// reported to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankingError {
    #[error("User already logged in")]
    AlreadyLoggedIn { user: String },

    #[error("Authentication failed")]
    AuthenticationFailed { user: String },

    #[error("Sender not authenticated")]
    SenderNotAuthenticated { sender: String },

    #[error("Invalid transaction type")]
    InvalidTransactionType { kind: String },

    #[error("Insufficient funds")]
    InsufficientFunds { balance: f64, amount: f64 },

    #[error("Account {account} not found")]
    AccountNotFound { account: String },

    #[error("Invalid transfer policy: {0}")]
    InvalidPolicy(String),
}
