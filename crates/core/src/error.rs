//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger crates.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Construction-time error for ledger values.
///
/// Validation findings over a set of entries are reported as data by the
/// plugins, never through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// An account name was malformed (e.g. an empty component).
    #[error("invalid account name: {0}")]
    InvalidAccount(String),

    /// Host options could not be decoded.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl LedgerError {
    pub fn invalid_account(msg: impl Into<String>) -> Self {
        Self::InvalidAccount(msg.into())
    }

    pub fn invalid_options(msg: impl Into<String>) -> Self {
        Self::InvalidOptions(msg.into())
    }
}
