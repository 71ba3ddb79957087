//! Record editing workflow

pub mod edit_session;
pub mod relatives;

pub use edit_session::{EditSession, SaveOutcome};
pub use relatives::{ResolvedRelative, delete_memorial, resolve_relatives};
