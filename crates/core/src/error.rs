//! Domain error model.

use thiserror::Error;

use crate::id::AccountId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, lookups). The display strings of the first three variants are
/// part of the console transcript and must not change.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An amount argument was below zero.
    #[error("Amount should be positive")]
    NegativeAmount,

    /// A withdrawal asked for more than the current balance.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// No account is registered under the given id.
    #[error("Account not found")]
    AccountNotFound(AccountId),

    /// A transfer named the same account on both sides.
    ///
    /// This is a caller bug rather than a business outcome, see
    /// [`DomainError::is_recoverable`].
    #[error("Source and destination accounts cannot be the same")]
    SameAccount,

    /// A balance computation left the representable range.
    #[error("amount overflow")]
    AmountOverflow,

    /// A textual amount failed to parse.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(id: AccountId) -> Self {
        Self::AccountNotFound(id)
    }

    /// Whether callers are expected to report the error and carry on.
    ///
    /// Everything except [`DomainError::SameAccount`] is a business outcome;
    /// a same-account transfer signals a programming error and should be
    /// propagated instead of handled.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SameAccount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_messages_are_stable() {
        assert_eq!(
            DomainError::NegativeAmount.to_string(),
            "Amount should be positive"
        );
        assert_eq!(DomainError::InsufficientFunds.to_string(), "Insufficient funds");
        assert_eq!(
            DomainError::not_found(AccountId::new(7)).to_string(),
            "Account not found"
        );
    }

    #[test]
    fn only_same_account_is_unrecoverable() {
        assert!(!DomainError::SameAccount.is_recoverable());
        assert!(DomainError::NegativeAmount.is_recoverable());
        assert!(DomainError::InsufficientFunds.is_recoverable());
        assert!(DomainError::not_found(AccountId::new(1)).is_recoverable());
        assert!(DomainError::AmountOverflow.is_recoverable());
    }
}
