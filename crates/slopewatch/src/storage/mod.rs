//! Storage layer for slopewatch.
//!
//! Records are kept as one JSON array under a single key of a
//! [`KeyValueStore`]. Every mutation is a read-modify-write of that array;
//! [`RecordStore`] serializes its own mutations so that two appends through
//! the same handle cannot lose each other's writes.

mod backend;
mod file;

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub use backend::{KeyValueStore, MemoryStore};
pub use file::FileStore;

use crate::error::{Error, Result};
use crate::record::EnvironmentalRecord;

/// Key the mobile app stored its history under.
pub const DEFAULT_KEY: &str = "@dados_ambientais";

/// Maximum number of records kept by default.
pub const DEFAULT_RETENTION: usize = 50;

/// Order in which [`RecordStore::list`] returns records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest first.
    #[default]
    Recent,
    /// Oldest first.
    Oldest,
}

impl SortOrder {
    /// The other order.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Recent => Self::Oldest,
            Self::Oldest => Self::Recent,
        }
    }

    /// Sort `records` by recording time in this order. The sort is stable.
    pub fn sort(self, records: &mut [EnvironmentalRecord]) {
        match self {
            Self::Recent => records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at)),
            Self::Oldest => records.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at)),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recent => write!(f, "recent"),
            Self::Oldest => write!(f, "oldest"),
        }
    }
}

/// Bounded history of environmental records over a key-value store.
pub struct RecordStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    retention: usize,
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("key", &self.key)
            .field("retention", &self.retention)
            .finish_non_exhaustive()
    }
}

impl RecordStore {
    /// Create a record store over `store` with the default key and retention.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_settings(store, DEFAULT_KEY, DEFAULT_RETENTION)
    }

    /// Create a record store with an explicit key and retention cap.
    ///
    /// A retention of 0 is treated as 1; the record just appended is always kept.
    #[must_use]
    pub fn with_settings(
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        retention: usize,
    ) -> Self {
        Self {
            store,
            key: key.into(),
            retention: retention.max(1),
            write_lock: Mutex::new(()),
        }
    }

    /// The key the record list is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Maximum number of records kept.
    #[must_use]
    pub fn retention(&self) -> usize {
        self.retention
    }

    /// Append a record, evicting the oldest entries beyond the retention cap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the list cannot be read or written.
    pub async fn append(&self, record: EnvironmentalRecord) -> Result<EnvironmentalRecord> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load("append").await?;
        records.push(record.clone());

        if records.len() > self.retention {
            let excess = records.len() - self.retention;
            records.drain(..excess);
            warn!(
                "Retention cap of {} reached, dropped {} oldest record(s)",
                self.retention, excess
            );
        }

        self.save("append", &records).await?;
        info!("Saved record {} ({} stored)", record.id, records.len());
        Ok(record)
    }

    /// All stored records, sorted by recording time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the list cannot be read.
    pub async fn list(&self, order: SortOrder) -> Result<Vec<EnvironmentalRecord>> {
        let mut records = self.load("list").await?;
        order.sort(&mut records);
        Ok(records)
    }

    /// Remove the record with the given id.
    ///
    /// Returns `true` if a record was removed; an unknown id leaves the store
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the list cannot be read or written.
    pub async fn remove(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load("remove").await?;
        let before = records.len();
        records.retain(|record| record.id != id);

        if records.len() == before {
            debug!("No record with id {} to remove", id);
            return Ok(false);
        }

        self.save("remove", &records).await?;
        info!("Removed record {}", id);
        Ok(true)
    }

    /// Delete the whole history.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the key cannot be removed.
    pub async fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        self.store
            .remove(&self.key)
            .await
            .map_err(storage_failure("clear"))?;
        info!("Cleared record history");
        Ok(())
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the list cannot be read.
    pub async fn count(&self) -> Result<usize> {
        Ok(self.load("count").await?.len())
    }

    /// The most recently appended record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the list cannot be read.
    pub async fn latest(&self) -> Result<Option<EnvironmentalRecord>> {
        Ok(self.load("latest").await?.pop())
    }

    /// Read the stored list in stored (append) order.
    async fn load(&self, operation: &'static str) -> Result<Vec<EnvironmentalRecord>> {
        let raw = self
            .store
            .get(&self.key)
            .await
            .map_err(storage_failure(operation))?;

        match raw {
            None => Ok(Vec::new()),
            Some(json) => {
                let records: Vec<EnvironmentalRecord> = serde_json::from_str(&json)
                    .map_err(|e| Error::storage(operation, format!("corrupt record list: {e}")))?;
                debug!("Loaded {} records from {}", records.len(), self.key);
                Ok(records)
            }
        }
    }

    async fn save(&self, operation: &'static str, records: &[EnvironmentalRecord]) -> Result<()> {
        let json = serde_json::to_string(records)
            .map_err(|e| Error::storage(operation, e.to_string()))?;
        self.store
            .set(&self.key, json)
            .await
            .map_err(storage_failure(operation))
    }
}

/// Collapse any backend error into a storage failure for `operation`.
fn storage_failure(operation: &'static str) -> impl FnOnce(Error) -> Error {
    move |err| {
        warn!("Storage {} failed: {}", operation, err);
        match err {
            Error::Storage { message, .. } => Error::storage(operation, message),
            other => Error::storage(operation, other.to_string()),
        }
    }
}
