use std::fs;
use std::path::PathBuf;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::store_errors::{Result, StoreError};

/// File-backed store keeping one JSON array per named collection.
///
/// The on-disk snapshot is the authoritative state: every read parses the
/// whole file and every write replaces it. Callers that mutate a collection
/// must hold its lock for the entire read-modify-write cycle; the store
/// itself does no coordination.
pub struct CollectionStore {
    data_dir: PathBuf,
}

impl CollectionStore {
    /// Opens a store rooted at `data_dir`, creating the directory if needed.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| {
            StoreError::Unavailable(format!("creating {}: {}", data_dir.display(), e))
        })?;
        Ok(Self { data_dir })
    }

    /// Loads all records of `collection`.
    ///
    /// First access to an unknown collection bootstraps it to an empty
    /// sequence. Empty or malformed content also loads as empty, logged
    /// rather than failed: the tolerant-load behavior callers must treat as
    /// a data-loss risk, not a durability guarantee.
    pub fn read<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            debug!("bootstrapping collection '{}'", collection);
            fs::write(&path, b"[]").map_err(|e| {
                StoreError::Unavailable(format!("creating {}: {}", path.display(), e))
            })?;
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path).map_err(|e| {
            StoreError::Unavailable(format!("reading {}: {}", path.display(), e))
        })?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!("collection '{}' is corrupt, loading as empty: {}", collection, e);
                Ok(Vec::new())
            }
        }
    }

    /// Replaces the full snapshot of `collection`.
    ///
    /// The new content is serialized to a temp file in the same directory and
    /// renamed over the target, so a failed write never leaves a truncated
    /// snapshot behind.
    pub fn write<T: Serialize>(&self, collection: &str, records: &[T]) -> Result<()> {
        let path = self.collection_path(collection);
        let json = serde_json::to_vec_pretty(records)
            .map_err(|e| StoreError::Serialization(collection.to_string(), e.to_string()))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &json).map_err(|e| {
            StoreError::Unavailable(format!("writing {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            StoreError::Unavailable(format!("replacing {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection))
    }
}
