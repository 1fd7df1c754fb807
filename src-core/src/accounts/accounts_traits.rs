use async_trait::async_trait;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use crate::accounts::Result;

/// Trait defining the contract for Account repository operations.
pub trait AccountRepositoryTrait: Send + Sync {
    fn load(&self) -> crate::store::Result<Vec<Account>>;
    fn save(&self, accounts: &[Account]) -> crate::store::Result<()>;
}

/// Trait defining the contract for Account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn register(&self, new_account: NewAccount) -> Result<Account>;
    async fn authenticate(&self, email: &str, password: &str) -> Result<Account>;
    fn get_account(&self, email: &str) -> Result<Account>;
    fn list_accounts(&self) -> Result<Vec<Account>>;
    async fn update_profile(&self, email: &str, update: AccountUpdate) -> Result<Account>;
    async fn follow(&self, follower: &str, followee: &str) -> Result<Account>;
    async fn unfollow(&self, follower: &str, followee: &str) -> Result<Account>;
}
