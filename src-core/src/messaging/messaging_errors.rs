use thiserror::Error;

use crate::store::StoreError;

/// Custom error type for messaging operations
#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("Thread {0} not found")]
    ThreadNotFound(String),
    #[error("Invalid participants: {0}")]
    InvalidParticipants(String),
    #[error("Invalid data: {0}")]
    InvalidInput(String),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for messaging operations
pub type Result<T> = std::result::Result<T, MessagingError>;
