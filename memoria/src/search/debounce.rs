//! Debounced relative search with a supersede-previous contract

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::debug;

use super::{LookupError, RelativeSearch};
use crate::config::SearchConfig;
use crate::models::Candidate;
use crate::storage::{RecordStore, RelativeFilters};

/// Ticket handed out by [`SearchGuard::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Single-slot guard: only the most recently issued ticket is current.
#[derive(Debug, Default)]
pub struct SearchGuard {
    latest: AtomicU64,
}

impl SearchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding every earlier one
    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Supersede any pending search without starting a new one
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

/// Result of a debounced search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The search was still current when its results arrived
    Results(Vec<Candidate>),
    /// A newer search was issued; these results must not be applied
    Superseded,
}

impl SearchOutcome {
    pub fn into_results(self) -> Option<Vec<Candidate>> {
        match self {
            SearchOutcome::Results(candidates) => Some(candidates),
            SearchOutcome::Superseded => None,
        }
    }
}

/// Relative search that waits for input to settle before querying.
///
/// Share it (e.g. behind an `Arc`) between the tasks reacting to input;
/// every call supersedes the calls before it.
pub struct DebouncedSearch {
    store: Arc<dyn RecordStore>,
    limit: usize,
    debounce: Duration,
    guard: SearchGuard,
}

impl DebouncedSearch {
    pub fn new(store: Arc<dyn RecordStore>, limit: usize, debounce: Duration) -> Self {
        Self {
            store,
            limit,
            debounce,
            guard: SearchGuard::new(),
        }
    }

    pub fn from_config(store: Arc<dyn RecordStore>, config: &SearchConfig) -> Self {
        Self::new(
            store,
            config.result_limit,
            Duration::from_millis(config.debounce_ms),
        )
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Supersede any pending search
    pub fn cancel(&self) {
        self.guard.cancel();
    }

    pub async fn search(&self, filters: &RelativeFilters) -> Result<SearchOutcome, LookupError> {
        let ticket = self.guard.begin();

        // Cleared input clears the results straight away
        if filters.is_empty() {
            return Ok(SearchOutcome::Results(Vec::new()));
        }

        tokio::time::sleep(self.debounce).await;
        if !self.guard.is_current(ticket) {
            debug!(?ticket, "Search superseded while debouncing");
            return Ok(SearchOutcome::Superseded);
        }

        let candidates = RelativeSearch::new(self.store.as_ref(), self.limit)
            .search(filters)
            .await?;

        if !self.guard.is_current(ticket) {
            debug!(?ticket, "Search superseded while in flight");
            return Ok(SearchOutcome::Superseded);
        }
        Ok(SearchOutcome::Results(candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemorialDraft;
    use crate::storage::{InMemoryRecordStore, MockRecordStore};

    #[test]
    fn test_guard_only_latest_ticket_is_current() {
        let guard = SearchGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));

        guard.cancel();
        assert!(!guard.is_current(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_searches_only_apply_the_last() {
        let mut store = MockRecordStore::new();
        store
            .expect_query_by_filters()
            .withf(|filters, _| filters.last_name.as_deref() == Some("papad"))
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let search = DebouncedSearch::new(Arc::new(store), 5, Duration::from_millis(300));
        let typed = RelativeFilters::by_last_name("pap");
        let typed_more = RelativeFilters::by_last_name("papad");
        let (first, second) = tokio::join!(search.search(&typed), search.search(&typed_more));

        assert_eq!(first.unwrap(), SearchOutcome::Superseded);
        assert_eq!(second.unwrap(), SearchOutcome::Results(Vec::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_the_debounce_interval() {
        let store = InMemoryRecordStore::new();
        store
            .insert(MemorialDraft::new("Nikos", "Georgiou", "Patra").to_record("georgioupatraA1".into()))
            .await
            .unwrap();

        let search = DebouncedSearch::new(Arc::new(store), 5, Duration::from_millis(300));
        let started = tokio::time::Instant::now();
        let outcome = search
            .search(&RelativeFilters::by_last_name("georg"))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(300));
        let results = outcome.into_results().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "georgioupatraA1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_clears_without_lookup() {
        let mut store = MockRecordStore::new();
        store.expect_query_by_filters().times(0);

        let search = DebouncedSearch::new(Arc::new(store), 5, Duration::from_millis(300));
        let typed = RelativeFilters::by_city("athens");
        let erased = RelativeFilters::default();
        let (pending, cleared) = tokio::join!(search.search(&typed), search.search(&erased));

        assert_eq!(pending.unwrap(), SearchOutcome::Superseded);
        assert_eq!(cleared.unwrap(), SearchOutcome::Results(Vec::new()));
    }
}
