use thiserror::Error;

/// Custom error type for collection store and lock operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Collection '{0}' is busy: lock wait exceeded the configured bound")]
    Busy(String),
    #[error("Failed to serialize collection '{0}': {1}")]
    Serialization(String, String),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
