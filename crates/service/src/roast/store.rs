use std::sync::Arc;

use models::roast::RoastRecord;
use tokio::sync::Mutex;
use tracing::{error, instrument, warn};

use crate::errors::StoreError;
use crate::roast::summary::{self, RoastSummary};
use crate::storage::{FileBackend, StorageBackend};

/// The single well-known key the whole collection is serialized under.
pub const ROASTS_STORAGE_KEY: &str = "@roasts_data";

/// Persistence core for roast records.
///
/// The whole collection lives as one JSON array under one key; every
/// operation re-reads it, mutates, and writes it back. Mutations serialize
/// through `write_lock` so only one read-modify-write cycle against the
/// backend is in flight at a time, which keeps concurrent upserts from
/// overwriting each other's changes. Plain reads take no lock; a single
/// backend `get` is atomic on its own.
pub struct RoastStore {
    backend: Arc<dyn StorageBackend>,
    key: String,
    write_lock: Mutex<()>,
}

impl RoastStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_key(backend, ROASTS_STORAGE_KEY)
    }

    pub fn with_key(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self { backend, key: key.into(), write_lock: Mutex::new(()) }
    }

    /// Open a file-backed store rooted at the configured data directory.
    pub async fn from_config(cfg: &configs::StorageConfig) -> Result<Self, StoreError> {
        let backend = FileBackend::new(&cfg.data_dir).await?;
        Ok(Self::with_key(Arc::new(backend), cfg.storage_key.clone()))
    }

    /// All records, newest-first for records that were inserted new (updates
    /// keep their position). An unreadable store degrades to empty so the
    /// caller's read path never breaks; use [`try_list`](Self::try_list) to
    /// tell "unreadable" apart from "empty".
    pub async fn list(&self) -> Vec<RoastRecord> {
        match self.try_list().await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "could not read roast collection; returning empty");
                Vec::new()
            }
        }
    }

    /// Like [`list`](Self::list) but surfaces read and parse failures instead
    /// of degrading. An absent key is still an empty collection, not an error.
    pub async fn try_list(&self) -> Result<Vec<RoastRecord>, StoreError> {
        match self.backend.get(&self.key).await? {
            None => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StoreError::Deserialize(e.to_string()))
            }
        }
    }

    /// Insert-if-absent-else-replace, keyed by `record.id`.
    ///
    /// A record whose id already exists replaces the old one in place; its
    /// position in the sequence does not change. A brand-new id goes to the
    /// front. Both cases rewrite the whole collection.
    #[instrument(skip(self, record), fields(id = %record.id))]
    pub async fn upsert(&self, record: RoastRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load_for_update().await?;
        match records.iter().position(|r| r.id == record.id) {
            Some(i) => records[i] = record,
            None => records.insert(0, record),
        }
        self.persist(&records).await
    }

    /// Remove every record with the given id. Returns whether anything was
    /// removed; a miss is a no-op that still rewrites the collection.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load_for_update().await?;
        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() != before;
        self.persist(&records).await?;
        Ok(removed)
    }

    /// Lookup by id over the degrading read path.
    pub async fn find(&self, id: &str) -> Option<RoastRecord> {
        self.list().await.into_iter().find(|r| r.id == id)
    }

    /// Aggregate view for the dashboard.
    pub async fn summary(&self) -> RoastSummary {
        summary::summarize(&self.list().await)
    }

    // Read phase of a mutation. A corrupt stored value was unrecoverable
    // before we got here, so it degrades to empty and the coming write
    // rebuilds the store; a read I/O failure aborts instead, since the data
    // underneath may be intact.
    async fn load_for_update(&self) -> Result<Vec<RoastRecord>, StoreError> {
        match self.try_list().await {
            Ok(records) => Ok(records),
            Err(StoreError::Deserialize(e)) => {
                warn!(error = %e, "stored roast collection is corrupt; rebuilding from this write");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn persist(&self, records: &[RoastRecord]) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string(records).map_err(|e| StoreError::Serialize(e.to_string()))?;
        if let Err(e) = self.backend.set(&self.key, raw).await {
            error!(error = %e, "failed to persist roast collection");
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use models::roast::RoastProcess;

    fn record(id: &str) -> RoastRecord {
        let mut r = RoastRecord::new(id);
        r.origin = "Colombia".into();
        r.process = RoastProcess::Washed;
        r
    }

    fn store() -> (Arc<MemoryBackend>, RoastStore) {
        let backend = Arc::new(MemoryBackend::new());
        let store = RoastStore::new(backend.clone());
        (backend, store)
    }

    #[tokio::test]
    async fn list_is_empty_on_fresh_backend() {
        let (_, store) = store();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_value_lists_empty_but_try_list_errors() -> Result<(), anyhow::Error> {
        let (backend, store) = store();
        backend.set(ROASTS_STORAGE_KEY, "not json {".into()).await?;

        assert!(store.list().await.is_empty());
        assert!(matches!(store.try_list().await, Err(StoreError::Deserialize(_))));
        Ok(())
    }

    #[tokio::test]
    async fn upsert_on_corrupt_store_rebuilds_it() -> Result<(), anyhow::Error> {
        let (backend, store) = store();
        backend.set(ROASTS_STORAGE_KEY, "\"half a coll".into()).await?;

        store.upsert(record("r1")).await?;
        let records = store.try_list().await?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "r1");
        Ok(())
    }

    #[tokio::test]
    async fn persisted_form_is_a_json_array() -> Result<(), anyhow::Error> {
        let (backend, store) = store();
        store.upsert(record("r1")).await?;

        let raw = backend.get(ROASTS_STORAGE_KEY).await?.expect("value written");
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        assert!(value.is_array());
        assert_eq!(value[0]["id"], "r1");
        Ok(())
    }
}
