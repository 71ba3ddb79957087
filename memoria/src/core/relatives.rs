//! Store-level operations on a whole memorial

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::Candidate;
use crate::relationships::RelationType;
use crate::storage::RecordStore;
use crate::{MemoriaError, Result};

/// A persisted relationship joined with the relative's names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRelative {
    pub relation_type: RelationType,
    pub relative: Candidate,
}

/// Delete a memorial and the relationships attached to it.
///
/// Returns `false` when no record had that id.
pub async fn delete_memorial(store: &dyn RecordStore, id: &str) -> Result<bool> {
    let edges = store.delete_edges_for(id).await?;
    let existed = store.delete_record(id).await?;
    if existed {
        info!(%id, edges, "Deleted memorial");
    }
    Ok(existed)
}

/// Relatives of a stored memorial, in the order they were saved.
///
/// Relatives whose records no longer exist are left out.
pub async fn resolve_relatives(store: &dyn RecordStore, id: &str) -> Result<Vec<ResolvedRelative>> {
    if store.get_by_id(id).await?.is_none() {
        return Err(MemoriaError::NotFound(id.to_string()));
    }

    let mut relatives = Vec::new();
    for edge in store.edges_for(id).await? {
        match store.get_by_id(&edge.target_id).await? {
            Some(record) => relatives.push(ResolvedRelative {
                relation_type: edge.relation_type,
                relative: Candidate::from(&record),
            }),
            None => warn!(
                source_id = %id,
                target_id = %edge.target_id,
                "Relative no longer exists, skipping"
            ),
        }
    }
    Ok(relatives)
}
