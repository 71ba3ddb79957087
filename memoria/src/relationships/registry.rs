//! Reciprocal relation map
//!
//! Static table of relation types and the type describing the same edge from
//! the relative's side. Types without an entry for `inverse` (currently only
//! `NephewNiece`, whose inverse depends on the relative's gender) stage the
//! forward edge alone.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::RelationType;

/// Definition of a relation type and its reciprocal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationTypeDef {
    pub relation: RelationType,

    /// Type of the mirror edge, if one is defined
    pub inverse: Option<RelationType>,

    /// Whether the relation is its own inverse
    /// Example: Sibling, Spouse, Cousin
    pub symmetric: bool,
}

impl RelationTypeDef {
    /// A relation with no reciprocal
    pub const fn new(relation: RelationType) -> Self {
        Self {
            relation,
            inverse: None,
            symmetric: false,
        }
    }

    /// Set the inverse relation type
    pub const fn with_inverse(mut self, inverse: RelationType) -> Self {
        self.inverse = Some(inverse);
        self
    }

    /// Mark this type as its own inverse
    pub const fn symmetric(mut self) -> Self {
        self.inverse = Some(self.relation);
        self.symmetric = true;
        self
    }
}

use RelationType::*;

const GENEALOGY: [RelationTypeDef; 16] = [
    RelationTypeDef::new(Father).with_inverse(Child),
    RelationTypeDef::new(Mother).with_inverse(Child),
    RelationTypeDef::new(Parent).with_inverse(Child),
    RelationTypeDef::new(Child).with_inverse(Parent),
    RelationTypeDef::new(Son).with_inverse(Parent),
    RelationTypeDef::new(Daughter).with_inverse(Parent),
    RelationTypeDef::new(Sibling).symmetric(),
    RelationTypeDef::new(Brother).with_inverse(Sibling),
    RelationTypeDef::new(Sister).with_inverse(Sibling),
    RelationTypeDef::new(Spouse).symmetric(),
    RelationTypeDef::new(Grandparent).with_inverse(Grandchild),
    RelationTypeDef::new(Grandchild).with_inverse(Grandparent),
    RelationTypeDef::new(Uncle).with_inverse(NephewNiece),
    RelationTypeDef::new(Aunt).with_inverse(NephewNiece),
    RelationTypeDef::new(NephewNiece),
    RelationTypeDef::new(Cousin).symmetric(),
];

/// Lookup table from relation type to its reciprocal
#[derive(Debug, Clone)]
pub struct ReciprocalRelationMap {
    types: HashMap<RelationType, RelationTypeDef>,
}

impl ReciprocalRelationMap {
    /// The genealogy relation table
    pub fn genealogy() -> Self {
        Self {
            types: GENEALOGY.iter().map(|def| (def.relation, *def)).collect(),
        }
    }

    /// Inverse of a relation label.
    ///
    /// `None` when the label is unknown or the type has no defined inverse;
    /// either way the caller stages the forward edge only.
    ///
    /// # Examples
    ///
    /// ```
    /// use memoria::relationships::{ReciprocalRelationMap, RelationType};
    ///
    /// let map = ReciprocalRelationMap::genealogy();
    /// assert_eq!(map.inverse_of("Father"), Some(RelationType::Child));
    /// assert_eq!(map.inverse_of("UnknownType"), None);
    /// ```
    pub fn inverse_of(&self, relation_type: &str) -> Option<RelationType> {
        let relation = relation_type.parse::<RelationType>().ok()?;
        self.inverse(relation)
    }

    /// Inverse of a parsed relation type
    pub fn inverse(&self, relation: RelationType) -> Option<RelationType> {
        self.types.get(&relation).and_then(|def| def.inverse)
    }

    /// Definition of a relation type
    pub fn get(&self, relation: RelationType) -> Option<&RelationTypeDef> {
        self.types.get(&relation)
    }

    /// All definitions, in display order
    pub fn list(&self) -> Vec<RelationTypeDef> {
        RelationType::ALL
            .iter()
            .filter_map(|relation| self.types.get(relation).copied())
            .collect()
    }
}

impl Default for ReciprocalRelationMap {
    fn default() -> Self {
        Self::genealogy()
    }
}
