//! Storage abstractions and implementations
//!
//! [`RecordStore`] is the seam between the editing workflow and whatever
//! persists memorial records.
//!
//! ## Storage Implementations
//!
//! - **Memory**: In-process store, contents are lost when it is dropped.
//!   Used by tests and for dry runs.
//! - **JsonFile**: The memory store mirrored to a JSON document under the
//!   configured data directory.

pub mod errors;
pub mod filters;
pub mod json_file;
pub mod memory;
pub mod traits;

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageBackend, StorageConfig};

pub use errors::{StorageError, StorageResult};
pub use filters::{RelativeFilters, partial_match};
pub use json_file::JsonFileRecordStore;
pub use memory::{InMemoryRecordStore, StoreSnapshot};
pub use traits::RecordStore;

#[cfg(test)]
pub use traits::MockRecordStore;

/// Create the record store selected by the configuration
pub async fn create_record_store(config: &StorageConfig) -> crate::Result<Arc<dyn RecordStore>> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory record store");
            Ok(Arc::new(InMemoryRecordStore::new()))
        }
        StorageBackend::JsonFile => {
            let path = config.records_path();
            info!("Using JSON record store at {}", path.display());
            let store = JsonFileRecordStore::open(path).await?;
            Ok(Arc::new(store))
        }
    }
}
