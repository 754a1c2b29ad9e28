//! Birth date decomposition: Life Path and Birthday numbers.

use super::reduce::reduce;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A date of birth split into its `MM/DD/YYYY` components (Value Object)
///
/// Only the shape is checked: each of the first three `/`-separated
/// segments must be a non-negative integer. Calendar validity is not
/// checked, so `02/30/2020` and `13/01/2020` both parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub month: u64,
    pub day: u64,
    pub year: u64,
}

impl BirthDate {
    pub fn new(month: u64, day: u64, year: u64) -> Self {
        Self { month, day, year }
    }

    /// Parse a `MM/DD/YYYY` string.
    ///
    /// Segments after the third are ignored. Surrounding whitespace inside a
    /// segment is tolerated.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidDateFormat {
            input: input.to_string(),
        };

        let mut segments = input.split('/').map(|s| s.trim().parse::<u64>());
        let mut next = || segments.next().and_then(Result::ok).ok_or_else(invalid);

        let month = next()?;
        let day = next()?;
        let year = next()?;

        Ok(Self { month, day, year })
    }

    /// Life Path number.
    ///
    /// Month, day and year are each reduced first, then their sum is
    /// reduced. `12/25/1990` gives 3 + 7 + 1 = 11.
    pub fn life_path_number(&self) -> u32 {
        let sum = reduce(self.month) + reduce(self.day) + reduce(self.year);
        reduce(u64::from(sum))
    }

    /// Birthday number: the reduced day of the month.
    pub fn birthday_number(&self) -> u32 {
        reduce(self.day)
    }
}

impl FromStr for BirthDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }
}

/// Life Path number straight from a `MM/DD/YYYY` string.
pub fn life_path_number(date_of_birth: &str) -> Result<u32, DomainError> {
    Ok(BirthDate::parse(date_of_birth)?.life_path_number())
}

/// Birthday number straight from a `MM/DD/YYYY` string.
pub fn birthday_number(date_of_birth: &str) -> Result<u32, DomainError> {
    Ok(BirthDate::parse(date_of_birth)?.birthday_number())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_components() {
        let date = BirthDate::parse("12/25/1990").unwrap();
        assert_eq!(date, BirthDate::new(12, 25, 1990));
    }

    #[test]
    fn test_life_path_reduces_components_first() {
        // 3 + 7 + 1 = 11, a master number
        assert_eq!(life_path_number("12/25/1990").unwrap(), 11);

        // 1 + 2 + 1 = 4, while the raw sum 1 + 2 + 1990 = 1993 would give 22
        assert_eq!(life_path_number("01/02/1990").unwrap(), 4);
        assert_eq!(reduce(1 + 2 + 1990), 22);
    }

    #[test]
    fn test_life_path_simple() {
        assert_eq!(life_path_number("01/01/2000").unwrap(), 4);
        // 11 + 11 + (1+9+8+5=23 -> 5) = 27 -> 9
        assert_eq!(life_path_number("11/29/1985").unwrap(), 9);
    }

    #[test]
    fn test_birthday_number() {
        assert_eq!(birthday_number("12/25/1990").unwrap(), 7);
        assert_eq!(birthday_number("01/01/2000").unwrap(), 1);
        assert_eq!(birthday_number("03/29/2001").unwrap(), 11);
        assert_eq!(birthday_number("03/22/2001").unwrap(), 22);
    }

    #[test]
    fn test_malformed_segments_fail() {
        for input in ["13/45/abcd", "ab/01/2000", "01/xx/2000", "01/01", "", "2000-01-01", "-1/01/2000"] {
            let err = BirthDate::parse(input).unwrap_err();
            assert_eq!(
                err,
                DomainError::InvalidDateFormat {
                    input: input.to_string()
                },
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_calendar_invalid_dates_are_accepted() {
        let date: BirthDate = "02/30/2020".parse().unwrap();
        assert_eq!(date.birthday_number(), 3);
        assert!(BirthDate::parse("13/01/2020").is_ok());
        assert!(BirthDate::parse("00/00/0").is_ok());
    }

    #[test]
    fn test_extra_segments_ignored() {
        assert_eq!(
            BirthDate::parse("01/02/2003/extra").unwrap(),
            BirthDate::new(1, 2, 2003)
        );
    }

    #[test]
    fn test_large_numeric_segments_parse() {
        let date = BirthDate::parse("01/01/99999999999").unwrap();
        assert_eq!(date.year, 99_999_999_999);
        // 1 + 1 + (9 * 11 = 99 -> 18 -> 9) = 11
        assert_eq!(date.life_path_number(), 11);
    }

    #[test]
    fn test_display_pads_components() {
        assert_eq!(BirthDate::new(1, 2, 2003).to_string(), "01/02/2003");
    }
}
