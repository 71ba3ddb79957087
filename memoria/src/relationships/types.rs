//! Genealogy relationship data structures

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ValidationError;

/// Kind of family relation an edge expresses, read as
/// "`target` is the `relation` of `source`".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationType {
    Father,
    Mother,
    Parent,
    Child,
    Son,
    Daughter,
    Sibling,
    Brother,
    Sister,
    Spouse,
    Grandparent,
    Grandchild,
    Uncle,
    Aunt,
    NephewNiece,
    Cousin,
}

impl RelationType {
    /// Every relation type, in display order
    pub const ALL: [RelationType; 16] = [
        RelationType::Father,
        RelationType::Mother,
        RelationType::Parent,
        RelationType::Child,
        RelationType::Son,
        RelationType::Daughter,
        RelationType::Sibling,
        RelationType::Brother,
        RelationType::Sister,
        RelationType::Spouse,
        RelationType::Grandparent,
        RelationType::Grandchild,
        RelationType::Uncle,
        RelationType::Aunt,
        RelationType::NephewNiece,
        RelationType::Cousin,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            RelationType::Father => "Father",
            RelationType::Mother => "Mother",
            RelationType::Parent => "Parent",
            RelationType::Child => "Child",
            RelationType::Son => "Son",
            RelationType::Daughter => "Daughter",
            RelationType::Sibling => "Sibling",
            RelationType::Brother => "Brother",
            RelationType::Sister => "Sister",
            RelationType::Spouse => "Spouse",
            RelationType::Grandparent => "Grandparent",
            RelationType::Grandchild => "Grandchild",
            RelationType::Uncle => "Uncle",
            RelationType::Aunt => "Aunt",
            RelationType::NephewNiece => "Nephew/Niece",
            RelationType::Cousin => "Cousin",
        }
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RelationType {
    type Err = ValidationError;

    /// Parse a label, ignoring case and separators ("Nephew/Niece",
    /// "nephew_niece" and "NephewNiece" are the same type).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        RelationType::ALL
            .into_iter()
            .find(|relation| {
                let label: String = relation
                    .label()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect();
                label.to_lowercase() == wanted
            })
            .ok_or_else(|| ValidationError::UnknownRelationType(s.to_string()))
    }
}

/// A directed, typed edge from one memorial record to a relative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationshipEdge {
    /// Record the edge is attached to
    pub source_id: String,

    /// The relative
    pub target_id: String,

    pub relation_type: RelationType,
}

impl RelationshipEdge {
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        relation_type: RelationType,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            relation_type,
        }
    }

    /// The same relation seen from the relative's side
    pub fn mirrored(&self, inverse: RelationType) -> Self {
        Self {
            source_id: self.target_id.clone(),
            target_id: self.source_id.clone(),
            relation_type: inverse,
        }
    }
}
