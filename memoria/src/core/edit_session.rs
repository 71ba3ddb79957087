//! Editing one memorial record and its relatives
//!
//! An [`EditSession`] owns everything the admin form used to keep in global
//! state: the record draft, the staged relationships and the relationships
//! last committed for the record. Nothing reaches the store until
//! [`EditSession::save`]; dropping a session discards its changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::MemoriaConfig;
use crate::identity::IdentityAssigner;
use crate::models::{Candidate, MemorialDraft};
use crate::relationships::{
    EdgeDiff, ReciprocalRelationMap, RelationType, RelationshipEdge, RelationshipWorkingSet,
    StagedPair, stage_with_mirror,
};
use crate::storage::RecordStore;
use crate::{MemoriaError, Result, ValidationError};

/// What a successful save did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    /// Identifier of the saved record
    pub id: String,

    /// Whether the record was created by this save
    pub created: bool,

    /// Relationship changes written by this save
    pub diff: EdgeDiff,
}

#[derive(Debug)]
pub struct EditSession {
    record_id: Option<String>,
    created_at: Option<DateTime<Utc>>,
    draft: MemorialDraft,
    working_set: RelationshipWorkingSet,
    committed: Vec<RelationshipEdge>,
}

impl EditSession {
    /// Start editing a record that does not exist yet.
    ///
    /// Relatives staged before the first save are attached to a temporary key
    /// and moved to the assigned identifier when the record is saved.
    pub fn create(draft: MemorialDraft) -> Self {
        let draft_key = format!("draft-{}", Uuid::new_v4());
        debug!(%draft_key, "Starting edit session for a new memorial");
        Self {
            record_id: None,
            created_at: None,
            draft,
            working_set: RelationshipWorkingSet::new(draft_key),
            committed: Vec::new(),
        }
    }

    /// Start editing a stored record together with its persisted relatives.
    ///
    /// Edges to relatives that have since been deleted, and repeated edges to
    /// the same relative, are not staged, so the next save drops them.
    pub async fn load(store: &dyn RecordStore, id: &str) -> Result<Self> {
        let record = store
            .get_by_id(id)
            .await?
            .ok_or_else(|| MemoriaError::NotFound(id.to_string()))?;
        let edges = store.edges_for(id).await?;
        debug!(%id, relatives = edges.len(), "Loaded memorial for editing");

        let mut live: Vec<RelationshipEdge> = Vec::with_capacity(edges.len());
        for edge in &edges {
            if live.iter().any(|kept| kept.target_id == edge.target_id) {
                warn!(source_id = %id, target_id = %edge.target_id, "Dropping repeated edge to the same relative");
            } else if store.get_by_id(&edge.target_id).await?.is_some() {
                live.push(edge.clone());
            } else {
                warn!(source_id = %id, target_id = %edge.target_id, "Dropping edge to deleted relative");
            }
        }

        let mut working_set = RelationshipWorkingSet::new(id);
        working_set.replace_all_edges(live);

        Ok(Self {
            record_id: Some(record.id.clone()),
            created_at: Some(record.created_at),
            draft: record.to_draft(),
            working_set,
            committed: edges,
        })
    }

    /// Identifier of the record, `None` until a new record is first saved
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    pub fn is_new(&self) -> bool {
        self.record_id.is_none()
    }

    pub fn draft(&self) -> &MemorialDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut MemorialDraft {
        &mut self.draft
    }

    /// Stage `candidate` as a relative of this record
    pub fn stage_relative(
        &mut self,
        candidate: &Candidate,
        relation_type: RelationType,
    ) -> std::result::Result<RelationshipEdge, ValidationError> {
        let source_id = self.working_set.source_id().to_string();
        let edge = self
            .working_set
            .add_edge(&source_id, &candidate.id, relation_type)?
            .clone();
        debug!(
            source_id = %edge.source_id,
            target_id = %edge.target_id,
            relation = %edge.relation_type,
            "Staged relative"
        );
        Ok(edge)
    }

    /// Stage a relative and the reciprocal edge on the relative's own session.
    ///
    /// Both records must already be stored. When the relation has no inverse
    /// only the forward edge is staged. Both sessions have to be saved for
    /// the edges to be committed.
    pub fn stage_relative_with_mirror(
        &mut self,
        relative: &mut EditSession,
        relation_type: RelationType,
        map: &ReciprocalRelationMap,
    ) -> Result<StagedPair> {
        if self.is_new() || relative.is_new() {
            return Err(ValidationError::MissingField { field: "id" }.into());
        }
        let target_id = relative.working_set.source_id().to_string();
        let pair = stage_with_mirror(
            &mut self.working_set,
            Some(&mut relative.working_set),
            &target_id,
            relation_type,
            map,
        )?;
        debug!(
            source_id = %pair.forward.source_id,
            target_id = %pair.forward.target_id,
            mirrored = pair.mirror.is_some(),
            "Staged relative with mirror"
        );
        Ok(pair)
    }

    /// Unstage the relative, returning the edge that was removed
    pub fn remove_relative(&mut self, target_id: &str) -> Option<RelationshipEdge> {
        let removed = self.working_set.remove_edge(target_id);
        if removed.is_some() {
            debug!(source_id = %self.working_set.source_id(), %target_id, "Removed relative");
        }
        removed
    }

    /// Staged relationships in the order they were added
    pub fn edges(&self) -> impl Iterator<Item = &RelationshipEdge> + Clone + '_ {
        self.working_set.list_edges()
    }

    /// Changes a save would make to the committed relationships
    pub fn pending_diff(&self) -> EdgeDiff {
        EdgeDiff::between(&self.committed, &self.working_set.to_edges())
    }

    /// Validate and write the record, then replace its relationships.
    ///
    /// The relationships are swapped in one store call; if the store rejects
    /// them the previously committed ones are kept.
    ///
    /// New records get their identifier here; an existing record keeps its
    /// identifier even if the surname or city changed.
    pub async fn save(
        &mut self,
        store: &dyn RecordStore,
        config: &MemoriaConfig,
    ) -> Result<SaveOutcome> {
        self.draft.validate()?;

        let (id, created) = match &self.record_id {
            Some(id) => {
                let mut record = self.draft.to_record(id.clone());
                // candles are lit by visitors while the session is open
                match store.get_by_id(id).await? {
                    Some(current) => {
                        record.created_at = current.created_at;
                        record.candles = current.candles;
                    }
                    None => {
                        if let Some(created_at) = self.created_at {
                            record.created_at = created_at;
                        }
                    }
                }
                store.insert_or_replace(record).await?;
                (id.clone(), false)
            }
            None => {
                let record = IdentityAssigner::new(store, &config.identity)
                    .insert_new(&self.draft)
                    .await?;
                self.created_at = Some(record.created_at);
                self.record_id = Some(record.id.clone());
                (record.id, true)
            }
        };

        self.working_set.rebind_source(id.as_str());
        let diff = self.pending_diff();
        let staged = self.working_set.to_edges();

        store.replace_edges(&id, staged.clone()).await?;
        self.committed = staged;

        info!(
            %id,
            created,
            added = diff.added.len(),
            removed = diff.removed.len(),
            retyped = diff.retyped.len(),
            "Saved memorial"
        );
        Ok(SaveOutcome { id, created, diff })
    }
}
