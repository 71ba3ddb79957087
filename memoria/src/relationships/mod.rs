//! Genealogy relationships
//!
//! Typed edges between memorial records, the working set they are staged in
//! while a record is edited, and the reciprocal relation map used to mirror
//! an edge onto the relative.

pub mod diff;
pub mod registry;
pub mod types;
pub mod working_set;

pub use diff::EdgeDiff;
pub use registry::{ReciprocalRelationMap, RelationTypeDef};
pub use types::{RelationType, RelationshipEdge};
pub use working_set::{RelationshipWorkingSet, StagedPair, WorkingSetState, stage_with_mirror};
