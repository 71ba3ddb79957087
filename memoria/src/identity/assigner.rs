//! Record identifier assignment
//!
//! Identifiers are `surname slug + city slug + partner code + sequence`, where
//! the sequence is one more than the number of stored records whose surname
//! and city partially match. The count is advisory: two editors observing the
//! same count produce the same identifier, so uniqueness is enforced by the
//! store's conditional insert and a bounded recount-and-retry loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::transliterate::slug;
use crate::config::IdentityConfig;
use crate::models::{MemorialDraft, MemorialRecord};
use crate::storage::{RecordStore, StorageError};
use crate::{MemoriaError, Result, ValidationError};

/// Partner code used when none is configured
pub const DEFAULT_PARTNER_CODE: &str = "A";

/// Normalized inputs of one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySlugInputs {
    /// Transliterated, lowercased, whitespace-free surname
    pub surname: String,

    /// Transliterated, lowercased, whitespace-free city
    pub city: String,

    /// Position of the new record among same-surname/same-city records (1-based)
    pub sequence: usize,
}

impl IdentitySlugInputs {
    /// Normalize the raw surname and city.
    ///
    /// `existing_count` is the number of stored records matching both the
    /// surname slug and the city slug (case-insensitive partial match).
    pub fn new(
        last_name: &str,
        city: &str,
        existing_count: usize,
    ) -> std::result::Result<Self, ValidationError> {
        if last_name.trim().is_empty() {
            return Err(ValidationError::EmptyIdentityInput { field: "last_name" });
        }
        if city.trim().is_empty() {
            return Err(ValidationError::EmptyIdentityInput { field: "city" });
        }

        Ok(Self {
            surname: slug(last_name),
            city: slug(city),
            sequence: existing_count.saturating_add(1),
        })
    }

    /// Build the identifier for the given partner code.
    pub fn to_id(&self, partner_code: &str) -> String {
        format!(
            "{}{}{}{}",
            self.surname, self.city, partner_code, self.sequence
        )
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
    }
}

/// Derive a record identifier.
///
/// Deterministic for identical inputs. The caller must check for collisions
/// before committing.
///
/// # Examples
///
/// ```
/// use memoria::identity::assign_id;
///
/// let id = assign_id("Papadopoulos", "Athens", 2, "A").unwrap();
/// assert_eq!(id, "papadopoulosathensA3");
/// ```
pub fn assign_id(
    last_name: &str,
    city: &str,
    existing_count: usize,
    partner_code: &str,
) -> std::result::Result<String, ValidationError> {
    Ok(IdentitySlugInputs::new(last_name, city, existing_count)?.to_id(partner_code))
}

/// Store-backed identifier assignment for new records.
pub struct IdentityAssigner<'a> {
    store: &'a dyn RecordStore,
    config: &'a IdentityConfig,
}

impl<'a> IdentityAssigner<'a> {
    pub fn new(store: &'a dyn RecordStore, config: &'a IdentityConfig) -> Self {
        Self { store, config }
    }

    /// Count stored records with the same surname and city slugs.
    pub async fn existing_count(&self, last_name: &str, city: &str) -> Result<usize> {
        let count = self
            .store
            .count_matching(&slug(last_name), &slug(city))
            .await?;
        Ok(count)
    }

    /// Assign an identifier to `draft` and insert it.
    ///
    /// On a duplicate-key rejection the count is taken again and the sequence
    /// moves forward by at least one, so a gap left by a deleted record cannot
    /// pin every attempt to the same identifier.
    pub async fn insert_new(&self, draft: &MemorialDraft) -> Result<MemorialRecord> {
        let attempts = self.config.max_assign_attempts;
        let mut last_id = String::new();
        let mut floor = 0usize;

        for attempt in 1..=attempts {
            let counted = self
                .existing_count(&draft.last_name, &draft.city)
                .await?;
            let existing_count = counted.max(floor);
            let id = assign_id(
                &draft.last_name,
                &draft.city,
                existing_count,
                &self.config.partner_code,
            )?;

            debug!(attempt, %id, existing_count, "Trying memorial identifier");

            match self.store.insert(draft.to_record(id.clone())).await {
                Ok(record) => {
                    info!(id = %record.id, attempt, "Assigned memorial identifier");
                    return Ok(record);
                }
                Err(StorageError::AlreadyExists(_)) => {
                    warn!(attempt, %id, "Identifier already taken, recounting");
                    floor = existing_count + 1;
                    last_id = id;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(MemoriaError::CollisionRetriesExhausted { attempts, last_id })
    }
}
