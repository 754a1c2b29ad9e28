//! Calculate Profile use case.
//!
//! Applies the [`ValidationPolicy`] and then runs the numerology engine.
//! With the default (permissive) policy the result is exactly
//! [`NumerologyProfile::calculate`].

use crate::config::ValidationPolicy;
use numawise_domain::numerology::letter_sum;
use numawise_domain::{BirthDate, DomainError, NumerologyProfile};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while calculating a profile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculateProfileError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("'{0}' is not a real calendar date")]
    CalendarInvalidDate(String),

    #[error("Name '{0}' contains no letters")]
    NameWithoutLetters(String),
}

/// Input for the [`CalculateProfileUseCase`].
#[derive(Debug, Clone)]
pub struct CalculateProfileInput {
    pub full_name: String,
    pub date_of_birth: String,
}

impl CalculateProfileInput {
    pub fn new(full_name: impl Into<String>, date_of_birth: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            date_of_birth: date_of_birth.into(),
        }
    }
}

/// Use case for computing a numerology profile under a validation policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateProfileUseCase {
    policy: ValidationPolicy,
}

impl CalculateProfileUseCase {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Compute the profile.
    pub fn execute(
        &self,
        input: &CalculateProfileInput,
    ) -> Result<NumerologyProfile, CalculateProfileError> {
        debug!(
            "Calculating profile for '{}' born {} ({:?})",
            input.full_name, input.date_of_birth, self.policy
        );

        let date = BirthDate::parse(&input.date_of_birth)?;

        if !self.policy.date_validation.accepts(&date) {
            return Err(CalculateProfileError::CalendarInvalidDate(
                input.date_of_birth.clone(),
            ));
        }

        if self.policy.require_name_letters && letter_sum(&input.full_name, |_| true) == 0 {
            return Err(CalculateProfileError::NameWithoutLetters(
                input.full_name.clone(),
            ));
        }

        let profile = NumerologyProfile::from_parts(&input.full_name, &date);
        info!(
            "Profile computed: life path {}, destiny {}, soul urge {}, personality {}, birthday {}",
            profile.life_path_number,
            profile.destiny_number,
            profile.soul_urge_number,
            profile.personality_number,
            profile.birthday_number
        );

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateValidation;

    #[test]
    fn test_default_policy_matches_engine() {
        let use_case = CalculateProfileUseCase::default();
        let input = CalculateProfileInput::new("John Smith", "01/01/2000");
        assert_eq!(
            use_case.execute(&input).unwrap(),
            NumerologyProfile::calculate("John Smith", "01/01/2000").unwrap()
        );
    }

    #[test]
    fn test_format_error_propagates() {
        let use_case = CalculateProfileUseCase::default();
        let err = use_case
            .execute(&CalculateProfileInput::new("John Smith", "13/45/abcd"))
            .unwrap_err();
        assert!(matches!(
            err,
            CalculateProfileError::Domain(DomainError::InvalidDateFormat { .. })
        ));
    }

    #[test]
    fn test_permissive_accepts_february_30() {
        let use_case = CalculateProfileUseCase::default();
        let profile = use_case
            .execute(&CalculateProfileInput::new("Ana", "02/30/2020"))
            .unwrap();
        assert_eq!(profile.birthday_number, 3);
    }

    #[test]
    fn test_strict_rejects_february_30() {
        let use_case = CalculateProfileUseCase::new(
            ValidationPolicy::default().with_date_validation(DateValidation::Strict),
        );
        let err = use_case
            .execute(&CalculateProfileInput::new("Ana", "02/30/2020"))
            .unwrap_err();
        assert_eq!(
            err,
            CalculateProfileError::CalendarInvalidDate("02/30/2020".to_string())
        );
    }

    #[test]
    fn test_letterless_name_policy() {
        let input = CalculateProfileInput::new("--", "01/01/2000");

        let lenient = CalculateProfileUseCase::default().execute(&input).unwrap();
        assert_eq!(lenient.destiny_number, 0);

        let strict = CalculateProfileUseCase::new(ValidationPolicy::strict());
        assert_eq!(
            strict.execute(&input).unwrap_err(),
            CalculateProfileError::NameWithoutLetters("--".to_string())
        );
    }
}
