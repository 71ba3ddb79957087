//! Record identity
//!
//! Transliteration of free-text names and places, and the identifiers built
//! from them.

mod assigner;
mod transliterate;

pub use assigner::{DEFAULT_PARTNER_CODE, IdentityAssigner, IdentitySlugInputs, assign_id};
pub use transliterate::{fold_diacritics, search_key, slug, transliterate};
