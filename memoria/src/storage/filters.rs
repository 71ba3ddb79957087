//! Filter types for relative lookups

use serde::{Deserialize, Serialize};

use crate::identity::search_key;

/// Partial-match filters for finding relatives.
///
/// Absent and blank values are ignored. Values reaching a store have been
/// through [`RelativeFilters::normalized`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeFilters {
    /// Filter by (part of) the record identifier
    pub id: Option<String>,

    /// Filter by surname
    pub last_name: Option<String>,

    /// Filter by given name
    pub first_name: Option<String>,

    /// Filter by city
    pub city: Option<String>,
}

impl RelativeFilters {
    pub fn by_last_name(last_name: impl Into<String>) -> Self {
        Self {
            last_name: Some(last_name.into()),
            ..Default::default()
        }
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn by_city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Default::default()
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// True when no filter has a non-blank value
    pub fn is_empty(&self) -> bool {
        [&self.id, &self.last_name, &self.first_name, &self.city]
            .into_iter()
            .all(|value| value.as_deref().is_none_or(|v| v.trim().is_empty()))
    }

    /// Transliterated, lowercased copies of the non-blank values
    pub fn normalized(&self) -> Self {
        let normalize = |value: &Option<String>| {
            value
                .as_deref()
                .map(search_key)
                .filter(|v| !v.is_empty())
        };

        Self {
            id: normalize(&self.id),
            last_name: normalize(&self.last_name),
            first_name: normalize(&self.first_name),
            city: normalize(&self.city),
        }
    }
}

/// Case-insensitive, whitespace-insensitive partial match of a stored field
/// against a normalized key.
///
/// An empty key matches everything.
pub fn partial_match(field: &str, key: &str) -> bool {
    let compact = |s: &str| -> String { s.chars().filter(|c| !c.is_whitespace()).collect() };
    compact(&search_key(field)).contains(&compact(&search_key(key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filters_are_empty() {
        assert!(RelativeFilters::default().is_empty());
        assert!(RelativeFilters::by_last_name("  ").with_city("").is_empty());
        assert!(!RelativeFilters::by_id("pap").is_empty());
    }

    #[test]
    fn test_normalized_transliterates_values() {
        let filters = RelativeFilters::by_last_name("Παπαδόπουλος")
            .with_city(" ")
            .normalized();
        assert_eq!(filters.last_name.as_deref(), Some("papadopoylos"));
        assert_eq!(filters.city, None);
    }

    #[test]
    fn test_partial_match_across_scripts() {
        assert!(partial_match("Παπαδόπουλος", "papado"));
        assert!(partial_match("Papadopoulos", "ΠΑΠΑΔ"));
        assert!(partial_match("Nea Smyrni", "neasmyrni"));
        assert!(!partial_match("Georgiou", "papa"));
        assert!(partial_match("anything", ""));
    }
}
