use std::sync::Arc;

use crate::constants::ACCOUNTS_COLLECTION;
use crate::store::{CollectionStore, Result};

use super::accounts_model::Account;
use super::accounts_traits::AccountRepositoryTrait;

/// Repository for the accounts collection
pub struct AccountRepository {
    store: Arc<CollectionStore>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(store: Arc<CollectionStore>) -> Self {
        Self { store }
    }
}

impl AccountRepositoryTrait for AccountRepository {
    fn load(&self) -> Result<Vec<Account>> {
        self.store.read(ACCOUNTS_COLLECTION)
    }

    fn save(&self, accounts: &[Account]) -> Result<()> {
        self.store.write(ACCOUNTS_COLLECTION, accounts)
    }
}
