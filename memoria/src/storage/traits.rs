//! Trait definition for the record store collaborator

use async_trait::async_trait;

use crate::models::{Candidate, MemorialRecord};
use crate::relationships::RelationshipEdge;
use crate::storage::errors::StorageError;
use crate::storage::filters::RelativeFilters;

/// Persistent storage of memorial records and their relationship edges.
///
/// Implementations own uniqueness of record ids and referential integrity of
/// edges; everything this crate computes is advisory until a store accepts it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Count records whose surname and city both partially match, ignoring case.
    ///
    /// Both arguments are slugs (transliterated, lowercased, no whitespace).
    async fn count_matching(&self, last_name: &str, city: &str) -> Result<usize, StorageError>;

    /// Insert a new record; fails with `AlreadyExists` if the id is taken
    async fn insert(&self, record: MemorialRecord) -> Result<MemorialRecord, StorageError>;

    /// Insert a record or replace the one with the same id
    async fn insert_or_replace(&self, record: MemorialRecord)
    -> Result<MemorialRecord, StorageError>;

    /// Get a record by its id
    async fn get_by_id(&self, id: &str) -> Result<Option<MemorialRecord>, StorageError>;

    /// Delete a record by its id, returning whether it existed
    async fn delete_record(&self, id: &str) -> Result<bool, StorageError>;

    /// Partial-match lookup with normalized filters, at most `limit` results,
    /// in the store's default order
    async fn query_by_filters(
        &self,
        filters: &RelativeFilters,
        limit: usize,
    ) -> Result<Vec<Candidate>, StorageError>;

    /// Edges attached to `source_id`, in the order they were inserted
    async fn edges_for(&self, source_id: &str) -> Result<Vec<RelationshipEdge>, StorageError>;

    /// Delete every edge attached to `source_id`, returning how many were removed
    async fn delete_edges_for(&self, source_id: &str) -> Result<usize, StorageError>;

    /// Insert edges; targets must exist and a source may not repeat a target
    async fn insert_edges(&self, edges: Vec<RelationshipEdge>) -> Result<(), StorageError>;

    /// Replace every edge attached to `source_id` with `edges` in one step.
    ///
    /// All edges must start at `source_id`. If the new set is rejected the
    /// previous edges stay in place.
    async fn replace_edges(
        &self,
        source_id: &str,
        edges: Vec<RelationshipEdge>,
    ) -> Result<(), StorageError>;

    /// Add one visitor candle to a record, returning the new total.
    /// Fails with `NotFound` if the record does not exist.
    async fn increment_candles(&self, id: &str) -> Result<u32, StorageError>;
}
