//! Record store persisted to a single JSON document
//!
//! The whole data set is loaded on open and written back after every
//! mutation, through a temporary file that is renamed over the original.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::models::{Candidate, MemorialRecord};
use crate::relationships::RelationshipEdge;
use crate::storage::errors::{StorageError, StorageResult};
use crate::storage::filters::RelativeFilters;
use crate::storage::memory::{InMemoryRecordStore, StoreSnapshot};
use crate::storage::traits::RecordStore;

#[derive(Debug)]
pub struct JsonFileRecordStore {
    path: PathBuf,
    inner: InMemoryRecordStore,
    write_lock: Mutex<()>,
}

impl JsonFileRecordStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub async fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();

        let snapshot = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => StoreSnapshot::default(),
            Ok(bytes) => serde_json::from_slice::<StoreSnapshot>(&bytes).map_err(|e| {
                StorageError::Serialization(format!(
                    "Failed to parse {}: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No record file at {}, starting empty", path.display());
                StoreSnapshot::default()
            }
            Err(e) => {
                return Err(StorageError::Connection(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        info!(
            "Opened record file {} ({} records, {} relationships)",
            path.display(),
            snapshot.records.len(),
            snapshot.edges.len()
        );

        Ok(Self {
            path,
            inner: InMemoryRecordStore::from_snapshot(snapshot),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the data, write the copy, and only then
    /// make it visible. A failed change or write leaves the store as it was.
    async fn mutate<T, F>(&self, change: F) -> StorageResult<T>
    where
        F: FnOnce(&mut StoreSnapshot) -> StorageResult<T> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut next = self.inner.snapshot()?;
        let result = change(&mut next)?;
        self.persist(&next).await?;
        self.inner.restore(next)?;
        Ok(result)
    }

    async fn persist(&self, snapshot: &StoreSnapshot) -> StorageResult<()> {
        let json = serde_json::to_vec_pretty(snapshot)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!("Wrote {} records to {}", snapshot.records.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileRecordStore {
    async fn count_matching(&self, last_name: &str, city: &str) -> StorageResult<usize> {
        self.inner.count_matching(last_name, city).await
    }

    async fn insert(&self, record: MemorialRecord) -> StorageResult<MemorialRecord> {
        self.mutate(|state| state.insert_record(record)).await
    }

    async fn insert_or_replace(&self, record: MemorialRecord) -> StorageResult<MemorialRecord> {
        self.mutate(|state| Ok(state.upsert_record(record))).await
    }

    async fn get_by_id(&self, id: &str) -> StorageResult<Option<MemorialRecord>> {
        self.inner.get_by_id(id).await
    }

    async fn delete_record(&self, id: &str) -> StorageResult<bool> {
        if self.inner.get_by_id(id).await?.is_none() {
            return Ok(false);
        }
        self.mutate(|state| Ok(state.remove_record(id))).await
    }

    async fn query_by_filters(
        &self,
        filters: &RelativeFilters,
        limit: usize,
    ) -> StorageResult<Vec<Candidate>> {
        self.inner.query_by_filters(filters, limit).await
    }

    async fn edges_for(&self, source_id: &str) -> StorageResult<Vec<RelationshipEdge>> {
        self.inner.edges_for(source_id).await
    }

    async fn delete_edges_for(&self, source_id: &str) -> StorageResult<usize> {
        if self.inner.edges_for(source_id).await?.is_empty() {
            return Ok(0);
        }
        self.mutate(|state| Ok(state.remove_edges_for(source_id))).await
    }

    async fn insert_edges(&self, edges: Vec<RelationshipEdge>) -> StorageResult<()> {
        if edges.is_empty() {
            return Ok(());
        }
        self.mutate(|state| state.append_edges(edges)).await
    }

    async fn replace_edges(
        &self,
        source_id: &str,
        edges: Vec<RelationshipEdge>,
    ) -> StorageResult<()> {
        self.mutate(|state| state.replace_edges(source_id, edges)).await
    }

    async fn increment_candles(&self, id: &str) -> StorageResult<u32> {
        self.mutate(|state| state.light_candle(id)).await
    }
}
