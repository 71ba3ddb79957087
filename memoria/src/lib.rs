//! # Memoria
//!
//! Identity and genealogy core for a memorial-page publishing tool.
//!
//! The crate covers the part of the admin workflow that has real invariants:
//!
//! - **Identity**: Greek-to-Latin transliteration and the `surname + city +
//!   partner code + sequence` record identifiers built from it.
//! - **Relationships**: typed, directed edges between memorial records, the
//!   per-record working set they are staged in, and the reciprocal relation map.
//! - **Search**: the relative lookup adapter with a supersede-previous guard
//!   for debounced, as-you-type queries.
//! - **Storage**: the narrow `RecordStore` collaborator interface plus an
//!   in-memory and a JSON-file backend.
//!
//! ## Quick Start
//!
//! ```rust
//! use memoria::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let store = InMemoryRecordStore::new();
//! let config = MemoriaConfig::default();
//!
//! let mut session = EditSession::create(MemorialDraft::new("Γιώργος", "Παπαδόπουλος", "Αθήνα"));
//! let outcome = session.save(&store, &config).await?;
//! assert_eq!(outcome.id, "papadopoylosathinaA1");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod identity;
pub mod logging;
pub mod models;
pub mod relationships;
pub mod search;
pub mod storage;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::config::{ConfigBuilder, LogLevel, MemoriaConfig, StorageBackend};
    pub use crate::core::{EditSession, SaveOutcome, delete_memorial, resolve_relatives};
    pub use crate::identity::{IdentityAssigner, assign_id, search_key, transliterate};
    pub use crate::models::{Candidate, Gender, MemorialDraft, MemorialRecord};
    pub use crate::relationships::{
        EdgeDiff, ReciprocalRelationMap, RelationType, RelationshipEdge, RelationshipWorkingSet,
    };
    pub use crate::search::{DebouncedSearch, RelativeSearch, SearchOutcome};
    pub use crate::storage::{
        InMemoryRecordStore, JsonFileRecordStore, RecordStore, RelativeFilters, StorageError,
    };
    pub use crate::{MemoriaError, Result, ValidationError};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rejected input. Always reported to the caller, never silently corrected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An edge from a record to itself
    #[error("A memorial cannot be related to itself ({id})")]
    SelfRelationship { id: String },

    /// A second edge to a relative that is already staged
    #[error("'{target_id}' is already staged as a relative of '{source_id}'")]
    DuplicateTarget {
        source_id: String,
        target_id: String,
    },

    /// An edge whose source is not the record the working set belongs to
    #[error("Edge source '{found}' does not belong to the working set of '{expected}'")]
    ForeignSource { expected: String, found: String },

    /// Identity input that is blank after trimming
    #[error("Cannot derive an identifier: {field} is empty")]
    EmptyIdentityInput { field: &'static str },

    /// Required record field left blank
    #[error("Required field '{field}' is empty")]
    MissingField { field: &'static str },

    /// Relation label outside the known set
    #[error("Unknown relation type '{0}'")]
    UnknownRelationType(String),

    /// Birth date after death date
    #[error("Birth date {birth} is after death date {death}")]
    DeathBeforeBirth { birth: String, death: String },

    /// Field value outside its allowed set
    #[error("Invalid {field} '{value}'")]
    InvalidField { field: &'static str, value: String },
}

/// Error type for Memoria operations
#[derive(Debug, thiserror::Error)]
pub enum MemoriaError {
    /// Input rejected by a validation rule
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Relative search failed; distinct from an empty result
    #[error("Lookup error: {0}")]
    Lookup(#[from] search::LookupError),

    /// Every identifier attempt collided with an existing record
    #[error(
        "Could not assign a unique identifier after {attempts} attempts (last tried '{last_id}'). Another editor may be creating records with the same surname and city; try saving again"
    )]
    CollisionRetriesExhausted { attempts: u32, last_id: String },

    /// Error reported by the record store
    #[error("Storage error: {0}")]
    Storage(String),

    /// Record not found
    #[error("Memorial not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for MemoriaError {
    fn from(err: crate::config::ConfigError) -> Self {
        MemoriaError::Configuration(err.to_string())
    }
}

/// Result type for Memoria operations
pub type Result<T> = std::result::Result<T, MemoriaError>;

/// Initialize logging and open the configured record store.
///
/// # Examples
///
/// ```rust,no_run
/// use memoria::prelude::*;
///
/// async fn example() -> Result<()> {
///     let config = ConfigBuilder::new()
///         .with_data_dir("/tmp/memoria")
///         .with_storage_backend(StorageBackend::JsonFile)
///         .build()?;
///
///     let store = memoria::init(&config).await?;
///     let candidates = RelativeSearch::new(store.as_ref(), config.search.result_limit)
///         .search(&RelativeFilters::by_last_name("Papadopoulos"))
///         .await?;
///     println!("{} candidates", candidates.len());
///     Ok(())
/// }
/// ```
pub async fn init(
    config: &config::MemoriaConfig,
) -> Result<std::sync::Arc<dyn storage::RecordStore>> {
    // Ignore errors if tracing is already initialized
    let _ = logging::init(&config.logging);

    let store = storage::create_record_store(&config.storage).await?;
    Ok(store)
}
