//! Relative search
//!
//! Finds candidate relatives for the record being edited. Filters are
//! normalized with [`search_key`](crate::identity::search_key) and handed to
//! the [`RecordStore`]; ranking is left to the store.
//!
//! # Example
//!
//! ```no_run
//! use memoria::prelude::*;
//!
//! # async fn example() -> memoria::Result<()> {
//! let store = InMemoryRecordStore::new();
//! let search = RelativeSearch::new(&store, 5);
//!
//! let candidates = search
//!     .search(&RelativeFilters::by_last_name("Παπαδ").with_city("athens"))
//!     .await?;
//! for candidate in candidates {
//!     println!("{} ({})", candidate.display_name(), candidate.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod debounce;

use thiserror::Error;
use tracing::{debug, error};

use crate::models::Candidate;
use crate::storage::{RecordStore, RelativeFilters, StorageError};

pub use debounce::{DebouncedSearch, SearchGuard, SearchOutcome, SearchTicket};

/// The store failed to answer a relative lookup.
///
/// Distinct from an empty result, which is a successful lookup with no matches.
#[derive(Debug, Error)]
#[error("Relative lookup failed: {source}")]
pub struct LookupError {
    #[from]
    source: StorageError,
}

impl LookupError {
    pub fn storage_error(&self) -> &StorageError {
        &self.source
    }
}

/// Bounded partial-match lookup over a record store
pub struct RelativeSearch<'a> {
    store: &'a dyn RecordStore,
    limit: usize,
}

impl<'a> RelativeSearch<'a> {
    pub fn new(store: &'a dyn RecordStore, limit: usize) -> Self {
        Self { store, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Look up candidates matching every non-blank filter.
    ///
    /// Returns an empty list without touching the store when all filters are
    /// blank.
    pub async fn search(&self, filters: &RelativeFilters) -> Result<Vec<Candidate>, LookupError> {
        if filters.is_empty() {
            debug!("All relative filters blank, skipping lookup");
            return Ok(Vec::new());
        }

        let normalized = filters.normalized();
        debug!(?normalized, limit = self.limit, "Searching relatives");

        let candidates = self
            .store
            .query_by_filters(&normalized, self.limit)
            .await
            .map_err(|e| {
                error!("Relative lookup failed: {}", e);
                LookupError::from(e)
            })?;

        debug!("Relative lookup returned {} candidates", candidates.len());
        Ok(candidates)
    }
}
