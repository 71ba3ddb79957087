//! Difference between committed and staged edges

use serde::{Deserialize, Serialize};

use super::types::RelationshipEdge;

/// What a save will change in a record's relationships, keyed by relative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDiff {
    /// Relatives staged but not committed
    pub added: Vec<RelationshipEdge>,

    /// Relatives committed but no longer staged
    pub removed: Vec<RelationshipEdge>,

    /// Relatives present in both with a different relation (staged version)
    pub retyped: Vec<RelationshipEdge>,
}

impl EdgeDiff {
    pub fn between(committed: &[RelationshipEdge], staged: &[RelationshipEdge]) -> Self {
        let find = |edges: &[RelationshipEdge], target_id: &str| {
            edges
                .iter()
                .find(|edge| edge.target_id == target_id)
                .cloned()
        };

        let mut diff = EdgeDiff::default();
        for edge in staged {
            match find(committed, &edge.target_id) {
                None => diff.added.push(edge.clone()),
                Some(old) if old.relation_type != edge.relation_type => {
                    diff.retyped.push(edge.clone())
                }
                Some(_) => {}
            }
        }
        for edge in committed {
            if find(staged, &edge.target_id).is_none() {
                diff.removed.push(edge.clone());
            }
        }
        diff
    }

    /// True when saving would leave the relationships as they are
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.retyped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relationships::RelationType;

    #[test]
    fn test_diff_classifies_changes() {
        let committed = vec![
            RelationshipEdge::new("a", "keep", RelationType::Father),
            RelationshipEdge::new("a", "drop", RelationType::Cousin),
            RelationshipEdge::new("a", "change", RelationType::Uncle),
        ];
        let staged = vec![
            RelationshipEdge::new("a", "keep", RelationType::Father),
            RelationshipEdge::new("a", "change", RelationType::Aunt),
            RelationshipEdge::new("a", "new", RelationType::Spouse),
        ];

        let diff = EdgeDiff::between(&committed, &staged);
        assert_eq!(diff.added, vec![RelationshipEdge::new("a", "new", RelationType::Spouse)]);
        assert_eq!(diff.removed, vec![RelationshipEdge::new("a", "drop", RelationType::Cousin)]);
        assert_eq!(diff.retyped, vec![RelationshipEdge::new("a", "change", RelationType::Aunt)]);
        assert!(!diff.is_empty());
    }

    #[test]
    fn test_identical_sets_have_empty_diff() {
        let edges = vec![RelationshipEdge::new("a", "b", RelationType::Sibling)];
        assert!(EdgeDiff::between(&edges, &edges).is_empty());
        assert!(EdgeDiff::between(&[], &[]).is_empty());
    }
}
