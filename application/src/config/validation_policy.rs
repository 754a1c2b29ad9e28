//! Validation policy: how strictly input is checked before computing.
//!
//! The numerology engine accepts any name and any date whose segments parse
//! as numbers. [`ValidationPolicy`] lets the application reject input the
//! engine would otherwise turn into zeros or into numbers for days that do
//! not exist.

use chrono::NaiveDate;
use numawise_domain::BirthDate;
use serde::{Deserialize, Serialize};

/// How birth dates are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateValidation {
    /// Any parseable date is used as-is, e.g. `02/30/2020` (default)
    #[default]
    Permissive,
    /// The date must be a real calendar day
    Strict,
}

impl DateValidation {
    /// Check a parsed date under this mode.
    pub fn accepts(self, date: &BirthDate) -> bool {
        match self {
            DateValidation::Permissive => true,
            DateValidation::Strict => is_calendar_date(date),
        }
    }
}

/// Input checks applied before a profile is computed.
///
/// | Field | Default | Effect when tightened |
/// |-------|---------|-----------------------|
/// | `date_validation` | `Permissive` | non-existent days are rejected |
/// | `require_name_letters` | `false` | names without ASCII letters are rejected |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationPolicy {
    pub date_validation: DateValidation,
    pub require_name_letters: bool,
}

impl ValidationPolicy {
    /// Reject non-existent days and letterless names.
    pub fn strict() -> Self {
        Self {
            date_validation: DateValidation::Strict,
            require_name_letters: true,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_date_validation(mut self, mode: DateValidation) -> Self {
        self.date_validation = mode;
        self
    }

    pub fn with_require_name_letters(mut self, require: bool) -> Self {
        self.require_name_letters = require;
        self
    }
}

/// Returns `true` if the date names a real day of the proleptic Gregorian
/// calendar.
pub fn is_calendar_date(date: &BirthDate) -> bool {
    let (Ok(year), Ok(month), Ok(day)) = (
        i32::try_from(date.year),
        u32::try_from(date.month),
        u32::try_from(date.day),
    ) else {
        return false;
    };
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.date_validation, DateValidation::Permissive);
        assert!(!policy.require_name_letters);
    }

    #[test]
    fn test_calendar_dates() {
        assert!(is_calendar_date(&BirthDate::new(2, 29, 2020)));
        assert!(!is_calendar_date(&BirthDate::new(2, 29, 2021)));
        assert!(!is_calendar_date(&BirthDate::new(2, 30, 2020)));
        assert!(!is_calendar_date(&BirthDate::new(13, 1, 2020)));
        assert!(!is_calendar_date(&BirthDate::new(0, 1, 2020)));
        assert!(!is_calendar_date(&BirthDate::new(1, 1, u64::from(u32::MAX))));
        assert!(!is_calendar_date(&BirthDate::new(u64::MAX, 1, 2020)));
    }

    #[test]
    fn test_modes() {
        let feb_30 = BirthDate::new(2, 30, 2020);
        assert!(DateValidation::Permissive.accepts(&feb_30));
        assert!(!DateValidation::Strict.accepts(&feb_30));
    }

    #[test]
    fn test_builders() {
        let policy = ValidationPolicy::default()
            .with_date_validation(DateValidation::Strict)
            .with_require_name_letters(true);
        assert_eq!(policy, ValidationPolicy::strict());
    }
}
