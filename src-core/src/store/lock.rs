use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, OwnedMutexGuard};
use tokio::time::timeout;

use super::store_errors::{Result, StoreError};

/// Exclusive access to one or more collections for the duration of a
/// read-modify-write cycle. Dropping the guard releases every held lock, on
/// success, business-rule rejection, and panic alike.
#[derive(Debug)]
pub struct CollectionGuard {
    _guards: Vec<OwnedMutexGuard<()>>,
}

/// One exclusive lock per collection name, created on demand.
///
/// Multi-collection acquisition deduplicates and sorts the names, so every
/// caller takes locks in the same global order regardless of how it phrased
/// the request. Cross-collection operations therefore cannot deadlock each
/// other.
pub struct LockManager {
    wait_bound: Duration,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl LockManager {
    /// Creates a manager whose individual lock waits are bounded by
    /// `wait_bound`.
    pub fn new(wait_bound: Duration) -> Self {
        Self {
            wait_bound,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Acquires exclusive locks on all named collections.
    ///
    /// A wait exceeding the configured bound fails with [`StoreError::Busy`];
    /// locks acquired earlier in the same call are released before the error
    /// reaches the caller, so no partial set is ever left held.
    pub async fn acquire(&self, collections: &[&str]) -> Result<CollectionGuard> {
        let mut names: Vec<&str> = collections.to_vec();
        names.sort_unstable();
        names.dedup();

        let mut guards = Vec::with_capacity(names.len());
        for name in names {
            let lock = {
                let mut registry = self.locks.lock().await;
                registry
                    .entry(name.to_string())
                    .or_insert_with(|| Arc::new(Mutex::new(())))
                    .clone()
            };
            let guard = timeout(self.wait_bound, lock.lock_owned())
                .await
                .map_err(|_| StoreError::Busy(name.to_string()))?;
            guards.push(guard);
        }

        Ok(CollectionGuard { _guards: guards })
    }
}
