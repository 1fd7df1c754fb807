use thiserror::Error;

use crate::store::StoreError;

/// Custom error type for the social surface
#[derive(Debug, Error)]
pub enum SocialError {
    #[error("Post {0} not found")]
    PostNotFound(String),
    #[error("Event {0} not found")]
    EventNotFound(String),
    #[error("Invalid data: {0}")]
    InvalidInput(String),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for social operations
pub type Result<T> = std::result::Result<T, SocialError>;
