//! Per-record working set of staged relationship edges
//!
//! Edges are staged here while a record is being edited and written to the
//! store only when the record is saved. Every mutation validates first and
//! mutates second, so a rejected call leaves the set untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::registry::ReciprocalRelationMap;
use super::types::{RelationType, RelationshipEdge};
use crate::ValidationError;

/// Whether anything is staged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkingSetState {
    Empty,
    Populated,
}

/// Relationship edges staged for one memorial record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipWorkingSet {
    source_id: String,
    edges: Vec<RelationshipEdge>,
}

impl RelationshipWorkingSet {
    /// Create an empty working set for the record `source_id`
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            edges: Vec::new(),
        }
    }

    /// The record these edges are attached to
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn state(&self) -> WorkingSetState {
        if self.edges.is_empty() {
            WorkingSetState::Empty
        } else {
            WorkingSetState::Populated
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether an edge to `target_id` is staged
    pub fn contains_target(&self, target_id: &str) -> bool {
        self.edges.iter().any(|edge| edge.target_id == target_id)
    }

    /// Check that an edge could be added, without adding it.
    pub fn check_edge(&self, source_id: &str, target_id: &str) -> Result<(), ValidationError> {
        if source_id != self.source_id {
            return Err(ValidationError::ForeignSource {
                expected: self.source_id.clone(),
                found: source_id.to_string(),
            });
        }
        if target_id == source_id {
            return Err(ValidationError::SelfRelationship {
                id: source_id.to_string(),
            });
        }
        if self.contains_target(target_id) {
            return Err(ValidationError::DuplicateTarget {
                source_id: source_id.to_string(),
                target_id: target_id.to_string(),
            });
        }
        Ok(())
    }

    /// Stage an edge.
    ///
    /// Rejects self-relationships and a second edge to an already staged
    /// relative; an existing edge is never overwritten.
    pub fn add_edge(
        &mut self,
        source_id: &str,
        target_id: &str,
        relation_type: RelationType,
    ) -> Result<&RelationshipEdge, ValidationError> {
        self.push_edge(RelationshipEdge::new(source_id, target_id, relation_type))
    }

    /// Stage an already built edge, with the same checks as [`Self::add_edge`]
    pub fn push_edge(&mut self, edge: RelationshipEdge) -> Result<&RelationshipEdge, ValidationError> {
        self.check_edge(&edge.source_id, &edge.target_id)?;

        debug!(
            source_id = %edge.source_id,
            target_id = %edge.target_id,
            relation = %edge.relation_type,
            "Staged relationship"
        );
        self.edges.push(edge);
        Ok(&self.edges[self.edges.len() - 1])
    }

    /// Remove the edge to `target_id`.
    ///
    /// Returns the removed edge; `None` when nothing was staged for that
    /// target, which is not an error.
    pub fn remove_edge(&mut self, target_id: &str) -> Option<RelationshipEdge> {
        let position = self
            .edges
            .iter()
            .position(|edge| edge.target_id == target_id)?;
        let removed = self.edges.remove(position);
        // Persisted data may carry historical duplicates; drop those too
        self.edges.retain(|edge| edge.target_id != target_id);

        debug!(source_id = %self.source_id, target_id, "Removed staged relationship");
        Some(removed)
    }

    /// Staged edges in insertion order.
    ///
    /// The iterator is lazy and `Clone`, so it can be restarted.
    pub fn list_edges(&self) -> impl Iterator<Item = &RelationshipEdge> + Clone + '_ {
        self.edges.iter()
    }

    /// Replace the whole set, typically with the edges loaded for the record.
    ///
    /// The edges are kept exactly as supplied; anomalies in persisted data are
    /// logged rather than repaired.
    pub fn replace_all_edges(&mut self, edges: Vec<RelationshipEdge>) {
        for (index, edge) in edges.iter().enumerate() {
            if edge.source_id != self.source_id {
                warn!(
                    expected = %self.source_id,
                    found = %edge.source_id,
                    "Loaded relationship belongs to another record"
                );
            }
            if edges[..index]
                .iter()
                .any(|earlier| earlier.target_id == edge.target_id)
            {
                warn!(
                    source_id = %self.source_id,
                    target_id = %edge.target_id,
                    "Loaded relationships contain a duplicate relative"
                );
            }
        }
        self.edges = edges;
    }

    /// Attach every staged edge to a new source id.
    ///
    /// Used when a new record receives its identifier at save time.
    pub fn rebind_source(&mut self, source_id: impl Into<String>) {
        let source_id = source_id.into();
        for edge in &mut self.edges {
            edge.source_id = source_id.clone();
        }
        self.source_id = source_id;
    }

    /// Clone the staged edges out
    pub fn to_edges(&self) -> Vec<RelationshipEdge> {
        self.edges.clone()
    }
}

/// Edges staged by a single [`stage_with_mirror`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedPair {
    pub forward: RelationshipEdge,
    pub mirror: Option<RelationshipEdge>,
}

/// Stage an edge and, optionally, its mirror on the relative's working set.
///
/// The mirror is staged only when `mirror` is the working set of `target_id`
/// and the relation has an inverse. Both edges are validated before either is
/// added, so the call stages both or nothing.
pub fn stage_with_mirror(
    forward: &mut RelationshipWorkingSet,
    mirror: Option<&mut RelationshipWorkingSet>,
    target_id: &str,
    relation_type: RelationType,
    map: &ReciprocalRelationMap,
) -> Result<StagedPair, ValidationError> {
    let source_id = forward.source_id().to_string();
    forward.check_edge(&source_id, target_id)?;

    let mirror = match (mirror, map.inverse(relation_type)) {
        (Some(set), Some(inverse)) => {
            set.check_edge(target_id, &source_id)?;
            Some((set, inverse))
        }
        _ => None,
    };

    let forward_edge = forward
        .add_edge(&source_id, target_id, relation_type)?
        .clone();
    let mirror_edge = match mirror {
        Some((set, inverse)) => Some(set.push_edge(forward_edge.mirrored(inverse))?.clone()),
        None => None,
    };

    Ok(StagedPair {
        forward: forward_edge,
        mirror: mirror_edge,
    })
}
