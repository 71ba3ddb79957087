//! In-memory record store
//!
//! Records are kept ordered by id, which is the default order of query
//! results. Edges are kept in insertion order.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Candidate, MemorialRecord};
use crate::relationships::RelationshipEdge;
use crate::storage::errors::{StorageError, StorageResult};
use crate::storage::filters::{RelativeFilters, partial_match};
use crate::storage::traits::RecordStore;

/// Everything a store holds, in serializable form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub records: BTreeMap<String, MemorialRecord>,

    #[serde(default)]
    pub edges: Vec<RelationshipEdge>,
}

impl StoreSnapshot {
    pub fn insert_record(&mut self, record: MemorialRecord) -> StorageResult<MemorialRecord> {
        if self.records.contains_key(&record.id) {
            return Err(StorageError::AlreadyExists(format!(
                "Memorial with ID {} already exists",
                record.id
            )));
        }
        self.records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    pub fn upsert_record(&mut self, record: MemorialRecord) -> MemorialRecord {
        self.records.insert(record.id.clone(), record.clone());
        record
    }

    pub fn remove_record(&mut self, id: &str) -> bool {
        self.records.remove(id).is_some()
    }

    pub fn remove_edges_for(&mut self, source_id: &str) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| edge.source_id != source_id);
        before - self.edges.len()
    }

    /// Append a batch of edges; nothing is added if any edge is rejected
    pub fn append_edges(&mut self, edges: Vec<RelationshipEdge>) -> StorageResult<()> {
        check_edges(&self.records, &self.edges, &edges)?;
        self.edges.extend(edges);
        Ok(())
    }

    /// Swap the outgoing edges of `source_id` for `edges`.
    ///
    /// The new set is checked against everything except the edges it
    /// replaces. On error the old edges are untouched.
    pub fn replace_edges(
        &mut self,
        source_id: &str,
        edges: Vec<RelationshipEdge>,
    ) -> StorageResult<()> {
        if let Some(foreign) = edges.iter().find(|e| e.source_id != source_id) {
            return Err(StorageError::Validation(format!(
                "Relationship from '{}' cannot replace edges of '{}'",
                foreign.source_id, source_id
            )));
        }
        let mut kept: Vec<RelationshipEdge> = self
            .edges
            .iter()
            .filter(|edge| edge.source_id != source_id)
            .cloned()
            .collect();
        check_edges(&self.records, &kept, &edges)?;
        kept.extend(edges);
        self.edges = kept;
        Ok(())
    }

    /// Add one candle, returning the new total
    pub fn light_candle(&mut self, id: &str) -> StorageResult<u32> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| StorageError::NotFound(format!("Memorial {}", id)))?;
        record.candles = record.candles.saturating_add(1);
        Ok(record.candles)
    }
}

fn check_edges(
    records: &BTreeMap<String, MemorialRecord>,
    existing: &[RelationshipEdge],
    edges: &[RelationshipEdge],
) -> StorageResult<()> {
    for (index, edge) in edges.iter().enumerate() {
        if edge.source_id == edge.target_id {
            return Err(StorageError::Validation(format!(
                "Self-referencing relationship on '{}'",
                edge.source_id
            )));
        }
        for id in [&edge.source_id, &edge.target_id] {
            if !records.contains_key(id) {
                return Err(StorageError::Validation(format!(
                    "Relationship references unknown memorial '{}'",
                    id
                )));
            }
        }
        let repeated = existing
            .iter()
            .chain(&edges[..index])
            .any(|e| e.source_id == edge.source_id && e.target_id == edge.target_id);
        if repeated {
            return Err(StorageError::AlreadyExists(format!(
                "Relationship {} -> {}",
                edge.source_id, edge.target_id
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    state: RwLock<StoreSnapshot>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given data
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
        }
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> StorageResult<StoreSnapshot> {
        Ok(self.read()?.clone())
    }

    /// Replace the whole contents
    pub fn restore(&self, snapshot: StoreSnapshot) -> StorageResult<()> {
        *self.write()? = snapshot;
        Ok(())
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, StoreSnapshot>> {
        self.state
            .read()
            .map_err(|e| StorageError::Operation(format!("Store lock poisoned: {}", e)))
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, StoreSnapshot>> {
        self.state
            .write()
            .map_err(|e| StorageError::Operation(format!("Store lock poisoned: {}", e)))
    }

    fn matches(record: &MemorialRecord, filters: &RelativeFilters) -> bool {
        let checks = [
            (&filters.id, &record.id),
            (&filters.last_name, &record.last_name),
            (&filters.first_name, &record.first_name),
            (&filters.city, &record.city),
        ];
        checks.iter().all(|(filter, field)| match filter {
            Some(key) => partial_match(field, key),
            None => true,
        })
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn count_matching(&self, last_name: &str, city: &str) -> StorageResult<usize> {
        let state = self.read()?;
        Ok(state
            .records
            .values()
            .filter(|r| partial_match(&r.last_name, last_name) && partial_match(&r.city, city))
            .count())
    }

    async fn insert(&self, record: MemorialRecord) -> StorageResult<MemorialRecord> {
        self.write()?.insert_record(record)
    }

    async fn insert_or_replace(&self, record: MemorialRecord) -> StorageResult<MemorialRecord> {
        Ok(self.write()?.upsert_record(record))
    }

    async fn get_by_id(&self, id: &str) -> StorageResult<Option<MemorialRecord>> {
        Ok(self.read()?.records.get(id).cloned())
    }

    async fn delete_record(&self, id: &str) -> StorageResult<bool> {
        Ok(self.write()?.remove_record(id))
    }

    async fn query_by_filters(
        &self,
        filters: &RelativeFilters,
        limit: usize,
    ) -> StorageResult<Vec<Candidate>> {
        let state = self.read()?;
        Ok(state
            .records
            .values()
            .filter(|record| Self::matches(record, filters))
            .take(limit)
            .map(Candidate::from)
            .collect())
    }

    async fn edges_for(&self, source_id: &str) -> StorageResult<Vec<RelationshipEdge>> {
        let state = self.read()?;
        Ok(state
            .edges
            .iter()
            .filter(|edge| edge.source_id == source_id)
            .cloned()
            .collect())
    }

    async fn delete_edges_for(&self, source_id: &str) -> StorageResult<usize> {
        Ok(self.write()?.remove_edges_for(source_id))
    }

    async fn insert_edges(&self, edges: Vec<RelationshipEdge>) -> StorageResult<()> {
        self.write()?.append_edges(edges)
    }

    async fn replace_edges(
        &self,
        source_id: &str,
        edges: Vec<RelationshipEdge>,
    ) -> StorageResult<()> {
        self.write()?.replace_edges(source_id, edges)
    }

    async fn increment_candles(&self, id: &str) -> StorageResult<u32> {
        self.write()?.light_candle(id)
    }
}
