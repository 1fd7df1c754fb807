use thiserror::Error;

use crate::store::StoreError;

/// Custom error type for ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Account {0} not found")]
    AccountNotFound(String),
    #[error("Project {0} not found")]
    ProjectNotFound(String),
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;
