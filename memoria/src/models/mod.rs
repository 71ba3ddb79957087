//! Domain models for memorial records

pub mod memorial;

pub use memorial::{Candidate, Gender, MemorialDraft, MemorialRecord, age_between};
