//! Person details value object

use crate::core::error::DomainError;
use crate::numerology::{BirthDate, NumerologyProfile};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// `MM/DD/YYYY` with a month of 01-12 and a day of 01-31
static DATE_OF_BIRTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/\d{4}$")
        .expect("date of birth pattern is valid")
});

const MIN_NAME_CHARS: usize = 2;

/// Intake details for a reading (Value Object)
///
/// This is the form-level check done before any numbers are computed: the
/// name must have at least two characters and the date must look like
/// `MM/DD/YYYY`. The numerology engine itself is more lenient and does not
/// require this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    full_name: String,
    date_of_birth: String,
}

impl PersonDetails {
    /// Validate and create person details
    pub fn new(
        full_name: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let full_name = full_name.into().trim().to_string();
        let date_of_birth = date_of_birth.into().trim().to_string();

        if full_name.chars().count() < MIN_NAME_CHARS {
            return Err(DomainError::InvalidName(
                "Please enter a full name of at least two characters.".to_string(),
            ));
        }

        if !is_valid_date_of_birth(&date_of_birth) {
            return Err(DomainError::InvalidDateOfBirth(date_of_birth));
        }

        Ok(Self {
            full_name,
            date_of_birth,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    /// Parsed date of birth
    pub fn birth_date(&self) -> Result<BirthDate, DomainError> {
        BirthDate::parse(&self.date_of_birth)
    }

    /// Numerology profile for these details
    pub fn profile(&self) -> Result<NumerologyProfile, DomainError> {
        NumerologyProfile::calculate(&self.full_name, &self.date_of_birth)
    }
}

impl std::fmt::Display for PersonDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.full_name, self.date_of_birth)
    }
}

/// Check a date of birth against the `MM/DD/YYYY` intake pattern
pub fn is_valid_date_of_birth(date_of_birth: &str) -> bool {
    DATE_OF_BIRTH_PATTERN.is_match(date_of_birth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_creation() {
        let person = PersonDetails::new("  John Smith ", "01/01/2000").unwrap();
        assert_eq!(person.full_name(), "John Smith");
        assert_eq!(person.date_of_birth(), "01/01/2000");
        assert_eq!(person.to_string(), "John Smith (01/01/2000)");
    }

    #[test]
    fn test_short_name_rejected() {
        let err = PersonDetails::new("J", "01/01/2000").unwrap_err();
        assert!(matches!(err, DomainError::InvalidName(_)));
        assert!(PersonDetails::new("   ", "01/01/2000").is_err());
    }

    #[test]
    fn test_date_pattern() {
        assert!(is_valid_date_of_birth("12/31/1999"));
        assert!(is_valid_date_of_birth("02/30/2020"));
        assert!(!is_valid_date_of_birth("13/01/2000"));
        assert!(!is_valid_date_of_birth("00/10/2000"));
        assert!(!is_valid_date_of_birth("1/1/2000"));
        assert!(!is_valid_date_of_birth("01/32/2000"));
        assert!(!is_valid_date_of_birth("01/01/20000"));
        assert!(!is_valid_date_of_birth("2000-01-01"));
    }

    #[test]
    fn test_bad_date_rejected() {
        let err = PersonDetails::new("John Smith", "1/1/2000").unwrap_err();
        assert_eq!(err, DomainError::InvalidDateOfBirth("1/1/2000".to_string()));
    }

    #[test]
    fn test_profile_from_details() {
        let person = PersonDetails::new("John Smith", "01/01/2000").unwrap();
        let profile = person.profile().unwrap();
        assert_eq!(profile.life_path_number, 4);
        assert_eq!(person.birth_date().unwrap().year, 2000);
    }
}
