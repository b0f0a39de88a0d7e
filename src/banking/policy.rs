//! Transfer kinds and the policy that admits them.

use super::error::BankingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferKind {
    Regular,
    Express,
    Scheduled,
}

impl TransferKind {
    pub const ALL: [TransferKind; 3] = [Self::Regular, Self::Express, Self::Scheduled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Express => "express",
            Self::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransferKind {
    type Err = BankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| BankingError::InvalidTransactionType {
                kind: s.to_string(),
            })
    }
}

/// Which transfer kinds a banking system accepts.
///
/// Loadable from JSON; a missing `allowed_kinds` field means every kind.
///
/// ```
/// use switchyard::banking::{TransferKind, TransferPolicy};
///
/// let policy = TransferPolicy::from_json(r#"{ "allowed_kinds": ["regular"] }"#).unwrap();
/// assert!(policy.permits(TransferKind::Regular));
/// assert!(!policy.permits(TransferKind::Express));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferPolicy {
    pub allowed_kinds: Vec<TransferKind>,
}

impl Default for TransferPolicy {
    fn default() -> Self {
        Self {
            allowed_kinds: TransferKind::ALL.to_vec(),
        }
    }
}

impl TransferPolicy {
    pub fn from_json(json: &str) -> Result<Self, BankingError> {
        serde_json::from_str(json).map_err(|e| BankingError::InvalidPolicy(e.to_string()))
    }

    pub fn permits(&self, kind: TransferKind) -> bool {
        self.allowed_kinds.contains(&kind)
    }

    /// Parse `kind` and check it against the policy.
    pub fn admit(&self, kind: &str) -> Result<TransferKind, BankingError> {
        let parsed: TransferKind = kind.parse()?;
        if self.permits(parsed) {
            Ok(parsed)
        } else {
            Err(BankingError::InvalidTransactionType {
                kind: kind.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_from_lowercase_names() {
        assert_eq!("regular".parse::<TransferKind>(), Ok(TransferKind::Regular));
        assert_eq!("express".parse::<TransferKind>(), Ok(TransferKind::Express));
        assert_eq!(
            "scheduled".parse::<TransferKind>(),
            Ok(TransferKind::Scheduled)
        );
    }

    #[test]
    fn unknown_kind_is_invalid_transaction_type() {
        let err = "invalid".parse::<TransferKind>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid transaction type");
    }

    #[test]
    fn default_policy_admits_every_kind() {
        let policy = TransferPolicy::default();
        for kind in TransferKind::ALL {
            assert_eq!(policy.admit(kind.as_str()), Ok(kind));
        }
    }

    #[test]
    fn restricted_policy_refuses_other_kinds() {
        let policy = TransferPolicy {
            allowed_kinds: vec![TransferKind::Regular],
        };

        assert!(matches!(
            policy.admit("express"),
            Err(BankingError::InvalidTransactionType { .. })
        ));
    }

    #[test]
    fn empty_json_object_uses_defaults() {
        assert_eq!(
            TransferPolicy::from_json("{}").unwrap(),
            TransferPolicy::default()
        );
    }

    #[test]
    fn malformed_json_is_invalid_policy() {
        assert!(matches!(
            TransferPolicy::from_json(r#"{ "allowed_kinds": ["teleport"] }"#),
            Err(BankingError::InvalidPolicy(_))
        ));
    }
}
