use thiserror::Error;

use crate::accounts::AccountError;
use crate::ledger::LedgerError;
use crate::messaging::MessagingError;
use crate::social::SocialError;
use crate::store::StoreError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the fundlink core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Messaging error: {0}")]
    Messaging(#[from] MessagingError),

    #[error("Social error: {0}")]
    Social(#[from] SocialError),
}
