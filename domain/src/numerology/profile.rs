//! The five core numbers of a person.

use super::date::BirthDate;
use super::name::{destiny_number, personality_number, soul_urge_number};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One of the five core numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreNumberKind {
    LifePath,
    Destiny,
    SoulUrge,
    Personality,
    Birthday,
}

impl CoreNumberKind {
    /// All kinds, in profile order.
    pub const ALL: [CoreNumberKind; 5] = [
        CoreNumberKind::LifePath,
        CoreNumberKind::Destiny,
        CoreNumberKind::SoulUrge,
        CoreNumberKind::Personality,
        CoreNumberKind::Birthday,
    ];

    /// Human-readable label, e.g. "Life Path Number"
    pub fn label(&self) -> &'static str {
        match self {
            CoreNumberKind::LifePath => "Life Path Number",
            CoreNumberKind::Destiny => "Destiny Number",
            CoreNumberKind::SoulUrge => "Soul Urge Number",
            CoreNumberKind::Personality => "Personality Number",
            CoreNumberKind::Birthday => "Birthday Number",
        }
    }
}

impl std::fmt::Display for CoreNumberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A person's numerology profile (Value Object)
///
/// Every number is 1-9, 11 or 22 for a parseable date and a name with
/// letters. A name without letters (or without vowels / consonants) yields
/// 0 in the affected fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyProfile {
    pub life_path_number: u32,
    pub destiny_number: u32,
    pub soul_urge_number: u32,
    pub personality_number: u32,
    pub birthday_number: u32,
}

impl NumerologyProfile {
    /// Compute the profile for a full name and a `MM/DD/YYYY` date of birth.
    ///
    /// Fails only when the date does not parse; any name is accepted.
    ///
    /// ```
    /// use numawise_domain::NumerologyProfile;
    ///
    /// let profile = NumerologyProfile::calculate("John Smith", "01/01/2000").unwrap();
    /// assert_eq!(profile.life_path_number, 4);
    /// assert_eq!(profile.personality_number, 11);
    /// ```
    pub fn calculate(full_name: &str, date_of_birth: &str) -> Result<Self, DomainError> {
        let date = BirthDate::parse(date_of_birth)?;
        Ok(Self::from_parts(full_name, &date))
    }

    /// Compute the profile from an already parsed date.
    pub fn from_parts(full_name: &str, date: &BirthDate) -> Self {
        Self {
            life_path_number: date.life_path_number(),
            destiny_number: destiny_number(full_name),
            soul_urge_number: soul_urge_number(full_name),
            personality_number: personality_number(full_name),
            birthday_number: date.birthday_number(),
        }
    }

    /// Value of a single core number
    pub fn get(&self, kind: CoreNumberKind) -> u32 {
        match kind {
            CoreNumberKind::LifePath => self.life_path_number,
            CoreNumberKind::Destiny => self.destiny_number,
            CoreNumberKind::SoulUrge => self.soul_urge_number,
            CoreNumberKind::Personality => self.personality_number,
            CoreNumberKind::Birthday => self.birthday_number,
        }
    }

    /// `(kind, value)` pairs in profile order
    pub fn entries(&self) -> impl Iterator<Item = (CoreNumberKind, u32)> + '_ {
        CoreNumberKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

/// Compute a [`NumerologyProfile`]. See [`NumerologyProfile::calculate`].
pub fn profile(full_name: &str, date_of_birth: &str) -> Result<NumerologyProfile, DomainError> {
    NumerologyProfile::calculate(full_name, date_of_birth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_john_smith_profile() {
        let profile = profile("John Smith", "01/01/2000").unwrap();
        assert_eq!(
            profile,
            NumerologyProfile {
                life_path_number: 4,
                destiny_number: 8,
                soul_urge_number: 6,
                personality_number: 11,
                birthday_number: 1,
            }
        );
    }

    #[test]
    fn test_master_life_path() {
        let profile = profile("Mary Taylor", "12/25/1990").unwrap();
        assert_eq!(profile.life_path_number, 11);
        assert_eq!(profile.birthday_number, 7);
        assert_eq!(profile.destiny_number, 4);
        assert_eq!(profile.soul_urge_number, 8);
        assert_eq!(profile.personality_number, 5);
    }

    #[test]
    fn test_malformed_date_propagates() {
        let err = profile("John Smith", "13/45/abcd").unwrap_err();
        assert!(err.is_date_error());
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let profile = profile("", "01/01/2000").unwrap();
        assert_eq!(profile.destiny_number, 0);
        assert_eq!(profile.soul_urge_number, 0);
        assert_eq!(profile.personality_number, 0);
        assert_eq!(profile.life_path_number, 4);
    }

    #[test]
    fn test_entries_order() {
        let profile = profile("John Smith", "01/01/2000").unwrap();
        let entries: Vec<_> = profile.entries().collect();
        assert_eq!(
            entries,
            vec![
                (CoreNumberKind::LifePath, 4),
                (CoreNumberKind::Destiny, 8),
                (CoreNumberKind::SoulUrge, 6),
                (CoreNumberKind::Personality, 11),
                (CoreNumberKind::Birthday, 1),
            ]
        );
    }

    #[test]
    fn test_serialize_camel_case() {
        let profile = profile("John Smith", "01/01/2000").unwrap();
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["lifePathNumber"], 4);
        assert_eq!(json["soulUrgeNumber"], 6);
        assert_eq!(json["birthdayNumber"], 1);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(CoreNumberKind::SoulUrge.to_string(), "Soul Urge Number");
        assert_eq!(CoreNumberKind::LifePath.label(), "Life Path Number");
    }
}
