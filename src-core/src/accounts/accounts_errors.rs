use thiserror::Error;

use crate::store::StoreError;

/// Custom error type for account-related operations
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid data: {0}")]
    InvalidInput(String),
    #[error("Credential hashing failed: {0}")]
    Credential(String),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for account operations
pub type Result<T> = std::result::Result<T, AccountError>;
