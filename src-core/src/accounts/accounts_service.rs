use std::sync::Arc;

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;

use crate::constants::ACCOUNTS_COLLECTION;
use crate::store::LockManager;

use super::accounts_errors::{AccountError, Result};
use super::accounts_model::{Account, AccountUpdate, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};

/// Service for managing accounts
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
    locks: Arc<LockManager>,
    starting_balance: Decimal,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(
        repository: Arc<dyn AccountRepositoryTrait>,
        locks: Arc<LockManager>,
        starting_balance: Decimal,
    ) -> Self {
        Self {
            repository,
            locks,
            starting_balance,
        }
    }

    fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AccountError::Credential(e.to_string()))
    }
}

#[async_trait]
impl AccountServiceTrait for AccountService {
    /// Registers a new account, seeded with the configured starting balance.
    /// Email uniqueness is checked under the accounts lock.
    async fn register(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        debug!("Registering account {}", new_account.email);

        // Hash before taking the lock
        let password_hash = Self::hash_password(&new_account.password)?;

        let _guard = self.locks.acquire(&[ACCOUNTS_COLLECTION]).await?;
        let mut accounts = self.repository.load()?;
        if accounts.iter().any(|a| a.email == new_account.email) {
            return Err(AccountError::AlreadyExists(new_account.email));
        }

        let now = Utc::now();
        let account = Account {
            email: new_account.email,
            password_hash,
            name: new_account.name.unwrap_or_default(),
            bio: new_account.bio.unwrap_or_default(),
            balance: self.starting_balance,
            following: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        accounts.push(account.clone());
        self.repository.save(&accounts)?;
        Ok(account)
    }

    /// Verifies credentials, returning the account on success
    async fn authenticate(&self, email: &str, password: &str) -> Result<Account> {
        let accounts = self.repository.load()?;
        let account = accounts
            .into_iter()
            .find(|a| a.email == email)
            .ok_or(AccountError::InvalidCredentials)?;

        let parsed = PasswordHash::new(&account.password_hash)
            .map_err(|e| AccountError::Credential(e.to_string()))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AccountError::InvalidCredentials)?;
        Ok(account)
    }

    /// Retrieves an account by its email
    fn get_account(&self, email: &str) -> Result<Account> {
        let accounts = self.repository.load()?;
        accounts
            .into_iter()
            .find(|a| a.email == email)
            .ok_or_else(|| AccountError::NotFound(format!("Account {} not found", email)))
    }

    fn list_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.repository.load()?)
    }

    /// Merges name/bio changes into an existing account
    async fn update_profile(&self, email: &str, update: AccountUpdate) -> Result<Account> {
        let _guard = self.locks.acquire(&[ACCOUNTS_COLLECTION]).await?;
        let mut accounts = self.repository.load()?;
        let account = accounts
            .iter_mut()
            .find(|a| a.email == email)
            .ok_or_else(|| AccountError::NotFound(format!("Account {} not found", email)))?;

        if let Some(name) = update.name {
            account.name = name;
        }
        if let Some(bio) = update.bio {
            account.bio = bio;
        }
        account.updated_at = Utc::now();
        let updated = account.clone();
        self.repository.save(&accounts)?;
        Ok(updated)
    }

    /// Adds `followee` to the follower's deduplicated following list
    async fn follow(&self, follower: &str, followee: &str) -> Result<Account> {
        if follower == followee {
            return Err(AccountError::InvalidInput(
                "An account cannot follow itself".to_string(),
            ));
        }

        let _guard = self.locks.acquire(&[ACCOUNTS_COLLECTION]).await?;
        let mut accounts = self.repository.load()?;
        if !accounts.iter().any(|a| a.email == followee) {
            return Err(AccountError::NotFound(format!(
                "Account {} not found",
                followee
            )));
        }

        let account = accounts
            .iter_mut()
            .find(|a| a.email == follower)
            .ok_or_else(|| AccountError::NotFound(format!("Account {} not found", follower)))?;
        if !account.following.iter().any(|f| f == followee) {
            account.following.push(followee.to_string());
            account.updated_at = Utc::now();
        }
        let updated = account.clone();
        self.repository.save(&accounts)?;
        Ok(updated)
    }

    async fn unfollow(&self, follower: &str, followee: &str) -> Result<Account> {
        let _guard = self.locks.acquire(&[ACCOUNTS_COLLECTION]).await?;
        let mut accounts = self.repository.load()?;
        let account = accounts
            .iter_mut()
            .find(|a| a.email == follower)
            .ok_or_else(|| AccountError::NotFound(format!("Account {} not found", follower)))?;
        account.following.retain(|f| f != followee);
        account.updated_at = Utc::now();
        let updated = account.clone();
        self.repository.save(&accounts)?;
        Ok(updated)
    }
}
