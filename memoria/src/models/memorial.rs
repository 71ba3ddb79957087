//! Memorial record model

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ValidationError;

/// Gender shown on the memorial page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "άνδρας" => Ok(Gender::Male),
            "female" | "f" | "γυναίκα" => Ok(Gender::Female),
            _ => Err(ValidationError::InvalidField {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

/// Whole years between two dates, one less if the anniversary had not been
/// reached yet.
pub fn age_between(birth: NaiveDate, death: NaiveDate) -> i32 {
    let mut age = death.year() - birth.year();
    if (death.month(), death.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

fn clean(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A stored memorial page.
///
/// The `id` is assigned once, when the record is first created, and is never
/// recomputed afterwards even if the name or city changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemorialRecord {
    /// Unique, immutable identifier
    pub id: String,

    pub first_name: String,

    pub last_name: String,

    pub city: String,

    /// Region or prefecture the city belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Short message shown under the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,

    /// Where the person is buried
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cemetery: Option<String>,

    /// Free-text family history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genealogy: Option<String>,

    /// Candles lit by visitors
    #[serde(default)]
    pub candles: u32,

    /// When the record was first stored
    pub created_at: DateTime<Utc>,
}

impl MemorialRecord {
    /// Full name as shown on the page
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age at death in whole years, when both dates are known
    pub fn age_at_death(&self) -> Option<i32> {
        Some(age_between(self.birth_date?, self.death_date?))
    }

    /// Editable fields of this record
    pub fn to_draft(&self) -> MemorialDraft {
        MemorialDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            city: self.city.clone(),
            region: self.region.clone(),
            birth_date: self.birth_date,
            death_date: self.death_date,
            gender: self.gender,
            message: self.message.clone(),
            birth_place: self.birth_place.clone(),
            profession: self.profession.clone(),
            education: self.education.clone(),
            cemetery: self.cemetery.clone(),
            genealogy: self.genealogy.clone(),
        }
    }
}

/// The editable part of a memorial record, before it has an identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MemorialDraft {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub region: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub message: Option<String>,
    pub birth_place: Option<String>,
    pub profession: Option<String>,
    pub education: Option<String>,
    pub cemetery: Option<String>,
    pub genealogy: Option<String>,
}

impl MemorialDraft {
    /// Create a draft with the three required fields
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            city: city.into(),
            ..Default::default()
        }
    }

    /// Set the region
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the birth date
    pub fn birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    /// Set the death date
    pub fn death_date(mut self, date: NaiveDate) -> Self {
        self.death_date = Some(date);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn birth_place(mut self, place: impl Into<String>) -> Self {
        self.birth_place = Some(place.into());
        self
    }

    pub fn profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = Some(profession.into());
        self
    }

    pub fn education(mut self, education: impl Into<String>) -> Self {
        self.education = Some(education.into());
        self
    }

    pub fn cemetery(mut self, cemetery: impl Into<String>) -> Self {
        self.cemetery = Some(cemetery.into());
        self
    }

    pub fn genealogy(mut self, genealogy: impl Into<String>) -> Self {
        self.genealogy = Some(genealogy.into());
        self
    }

    /// Check required fields and date ordering.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "first_name" });
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "last_name" });
        }
        if self.city.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "city" });
        }

        if let (Some(birth), Some(death)) = (self.birth_date, self.death_date)
            && birth > death
        {
            return Err(ValidationError::DeathBeforeBirth {
                birth: birth.to_string(),
                death: death.to_string(),
            });
        }

        Ok(())
    }

    /// Turn the draft into a record with the given identifier.
    ///
    /// Text fields are trimmed; blank optional fields are dropped. The new
    /// record has no candles.
    pub fn to_record(&self, id: String) -> MemorialRecord {
        MemorialRecord {
            id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            city: self.city.trim().to_string(),
            region: clean(&self.region),
            birth_date: self.birth_date,
            death_date: self.death_date,
            gender: self.gender,
            message: clean(&self.message),
            birth_place: clean(&self.birth_place),
            profession: clean(&self.profession),
            education: clean(&self.education),
            cemetery: clean(&self.cemetery),
            genealogy: clean(&self.genealogy),
            candles: 0,
            created_at: Utc::now(),
        }
    }
}

/// Minimal projection of a record returned by relative search.
///
/// Carries exactly what is needed to stage an edge and label it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
}

impl Candidate {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<&MemorialRecord> for Candidate {
    fn from(record: &MemorialRecord) -> Self {
        Self {
            id: record.id.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            city: record.city.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_requires_names_and_city() {
        assert_eq!(
            MemorialDraft::new(" ", "Papadopoulos", "Athens").validate(),
            Err(ValidationError::MissingField { field: "first_name" })
        );
        assert_eq!(
            MemorialDraft::new("Nikos", "", "Athens").validate(),
            Err(ValidationError::MissingField { field: "last_name" })
        );
        assert_eq!(
            MemorialDraft::new("Nikos", "Papadopoulos", "\t").validate(),
            Err(ValidationError::MissingField { field: "city" })
        );
    }

    #[test]
    fn test_validate_date_order() {
        let draft = MemorialDraft::new("Nikos", "Papadopoulos", "Athens")
            .birth_date(date(1950, 3, 1))
            .death_date(date(1949, 1, 1));
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::DeathBeforeBirth { .. })
        ));

        let same_day = MemorialDraft::new("Nikos", "Papadopoulos", "Athens")
            .birth_date(date(1950, 3, 1))
            .death_date(date(1950, 3, 1));
        assert!(same_day.validate().is_ok());
    }

    #[test]
    fn test_to_record_trims_fields() {
        let record = MemorialDraft::new(" Nikos ", "Papadopoulos ", " Athens")
            .region("  ")
            .to_record("papadopoulosathensA1".to_string());

        assert_eq!(record.first_name, "Nikos");
        assert_eq!(record.last_name, "Papadopoulos");
        assert_eq!(record.city, "Athens");
        assert_eq!(record.region, None);
        assert_eq!(record.display_name(), "Nikos Papadopoulos");
    }

    #[test]
    fn test_optional_text_fields_are_cleaned() {
        let record = MemorialDraft::new("Eleni", "Georgiou", "Patra")
            .gender(Gender::Female)
            .profession(" Teacher ")
            .cemetery("")
            .message("\n")
            .to_record("georgioupatraA1".into());

        assert_eq!(record.gender, Some(Gender::Female));
        assert_eq!(record.profession.as_deref(), Some("Teacher"));
        assert_eq!(record.cemetery, None);
        assert_eq!(record.message, None);
        assert_eq!(record.candles, 0);
        assert_eq!(record.to_draft().profession.as_deref(), Some("Teacher"));
    }

    #[test]
    fn test_age_at_death_counts_completed_years() {
        let draft = MemorialDraft::new("Nikos", "Papadopoulos", "Athens").birth_date(date(1931, 4, 2));

        let before_birthday = draft.clone().death_date(date(2019, 4, 1)).to_record("a".into());
        assert_eq!(before_birthday.age_at_death(), Some(87));

        let on_birthday = draft.clone().death_date(date(2019, 4, 2)).to_record("a".into());
        assert_eq!(on_birthday.age_at_death(), Some(88));

        let earlier_month = draft.clone().death_date(date(2019, 3, 30)).to_record("a".into());
        assert_eq!(earlier_month.age_at_death(), Some(87));

        assert_eq!(draft.to_record("a".into()).age_at_death(), None);
    }

    #[test]
    fn test_age_between_leap_day() {
        assert_eq!(age_between(date(2000, 2, 29), date(2001, 2, 28)), 0);
        assert_eq!(age_between(date(2000, 2, 29), date(2001, 3, 1)), 1);
    }

    #[test]
    fn test_parse_gender() {
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("m".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("Άνδρας".parse::<Gender>(), Ok(Gender::Male));
        assert!(matches!(
            "other".parse::<Gender>(),
            Err(ValidationError::InvalidField { field: "gender", .. })
        ));
    }

    #[test]
    fn test_legacy_json_without_new_fields() {
        let json = r#"{"id":"georgioupatraA1","first_name":"Eleni","last_name":"Georgiou","city":"Patra","created_at":"2024-01-01T00:00:00Z"}"#;
        let record: MemorialRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.candles, 0);
        assert_eq!(record.gender, None);
    }

    #[test]
    fn test_candidate_projection() {
        let record = MemorialDraft::new("Eleni", "Georgiou", "Patra").to_record("georgioupatraA1".into());
        let candidate = Candidate::from(&record);
        assert_eq!(candidate.id, "georgioupatraA1");
        assert_eq!(candidate.display_name(), "Eleni Georgiou");
    }
}
