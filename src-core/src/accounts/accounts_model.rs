use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accounts_errors::{AccountError, Result};

/// Domain model representing a registered account.
///
/// The email doubles as the account identity; accounts are never deleted and
/// the balance moves only through the ledger engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    pub balance: Decimal,
    #[serde(default)]
    pub following: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for registering a new account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl NewAccount {
    /// Validates the registration data
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(AccountError::InvalidInput(
                "Email cannot be empty".to_string(),
            ));
        }
        if self.password.is_empty() {
            return Err(AccountError::InvalidInput(
                "Password cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for profile updates; balance and credentials are not
/// touchable through this path
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub bio: Option<String>,
}
