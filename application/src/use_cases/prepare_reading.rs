//! Prepare Reading use case.
//!
//! Validates the person's details, computes their profile and renders the
//! reading prompt. Sending the prompt to a model is left to the caller.

use super::calculate_profile::{
    CalculateProfileError, CalculateProfileInput, CalculateProfileUseCase,
};
use crate::config::{PromptSettings, ValidationPolicy};
use numawise_domain::prompt::{greeting, is_compatibility_question};
use numawise_domain::{
    DomainError, NumerologyProfile, PersonDetails, PreparedPrompt, ReadingPromptTemplate,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while preparing a prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreparePromptError {
    #[error(transparent)]
    InvalidDetails(#[from] DomainError),

    #[error(transparent)]
    Profile(#[from] CalculateProfileError),

    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Compatibility needs the partner's details. Use `numawise compat` instead.")]
    UseCompatibility,
}

/// Input for the [`PrepareReadingUseCase`].
#[derive(Debug, Clone)]
pub struct PrepareReadingInput {
    pub full_name: String,
    pub date_of_birth: String,
    pub question: String,
}

impl PrepareReadingInput {
    pub fn new(
        full_name: impl Into<String>,
        date_of_birth: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            date_of_birth: date_of_birth.into(),
            question: question.into(),
        }
    }
}

/// Output of the [`PrepareReadingUseCase`].
#[derive(Debug, Clone, Serialize)]
pub struct PreparedReading {
    pub person: PersonDetails,
    pub profile: NumerologyProfile,
    pub greeting: String,
    pub question: String,
    pub prompt: PreparedPrompt,
}

/// Use case for preparing a single-person reading prompt.
#[derive(Debug, Clone, Default)]
pub struct PrepareReadingUseCase {
    profiles: CalculateProfileUseCase,
    settings: PromptSettings,
}

impl PrepareReadingUseCase {
    pub fn new(policy: ValidationPolicy, settings: PromptSettings) -> Self {
        Self {
            profiles: CalculateProfileUseCase::new(policy),
            settings,
        }
    }

    pub fn execute(
        &self,
        input: PrepareReadingInput,
    ) -> Result<PreparedReading, PreparePromptError> {
        let question = input.question.trim().to_string();
        if question.is_empty() {
            return Err(PreparePromptError::EmptyQuestion);
        }
        if is_compatibility_question(&question) {
            return Err(PreparePromptError::UseCompatibility);
        }

        let person = PersonDetails::new(input.full_name, input.date_of_birth)?;
        let profile = self.profiles.execute(&CalculateProfileInput::new(
            person.full_name(),
            person.date_of_birth(),
        ))?;

        let prompt = ReadingPromptTemplate::prepare_reading(
            &self.settings.persona,
            &person,
            &profile,
            &question,
        );
        debug!("Reading prompt is {} bytes", prompt.user.len());
        info!("Prepared reading prompt for {}", person);

        Ok(PreparedReading {
            greeting: greeting(&self.settings.persona, person.full_name()),
            person,
            profile,
            question,
            prompt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numawise_domain::prompt::COMPATIBILITY_QUESTION;

    #[test]
    fn test_prepare_reading() {
        let use_case = PrepareReadingUseCase::default();
        let reading = use_case
            .execute(PrepareReadingInput::new(
                "John Smith",
                "01/01/2000",
                "What career suits me?",
            ))
            .unwrap();

        assert_eq!(reading.profile.life_path_number, 4);
        assert_eq!(reading.question, "What career suits me?");
        assert!(reading.prompt.system.contains("You are Numa,"));
        assert!(reading.prompt.user.contains("Question: What career suits me?"));
    }

    #[test]
    fn test_custom_persona() {
        let use_case = PrepareReadingUseCase::new(
            ValidationPolicy::default(),
            PromptSettings::default().with_persona("Iris"),
        );
        let reading = use_case
            .execute(PrepareReadingInput::new("John Smith", "01/01/2000", "Hi"))
            .unwrap();
        assert!(reading.prompt.system.contains("You are Iris,"));
    }

    #[test]
    fn test_empty_question_rejected() {
        let err = PrepareReadingUseCase::default()
            .execute(PrepareReadingInput::new("John Smith", "01/01/2000", "  "))
            .unwrap_err();
        assert_eq!(err, PreparePromptError::EmptyQuestion);
    }

    #[test]
    fn test_compatibility_question_redirected() {
        let err = PrepareReadingUseCase::default()
            .execute(PrepareReadingInput::new(
                "John Smith",
                "01/01/2000",
                COMPATIBILITY_QUESTION,
            ))
            .unwrap_err();
        assert_eq!(err, PreparePromptError::UseCompatibility);
    }

    #[test]
    fn test_greeting_uses_persona_and_name() {
        let use_case = PrepareReadingUseCase::new(
            ValidationPolicy::default(),
            PromptSettings::default().with_persona("Iris"),
        );
        let reading = use_case
            .execute(PrepareReadingInput::new("John Smith", "01/01/2000", "Hi"))
            .unwrap();
        assert!(reading.greeting.starts_with("Hello, John Smith."));
        assert!(reading.greeting.contains("I am Iris,"));
    }

    #[test]
    fn test_intake_pattern_enforced() {
        // the engine would accept this, the intake form does not
        let err = PrepareReadingUseCase::default()
            .execute(PrepareReadingInput::new("John Smith", "1/1/2000", "Hi"))
            .unwrap_err();
        assert!(matches!(
            err,
            PreparePromptError::InvalidDetails(DomainError::InvalidDateOfBirth(_))
        ));
    }

    #[test]
    fn test_strict_policy_applies() {
        let use_case =
            PrepareReadingUseCase::new(ValidationPolicy::strict(), PromptSettings::default());
        let err = use_case
            .execute(PrepareReadingInput::new("John Smith", "02/30/2000", "Hi"))
            .unwrap_err();
        assert!(matches!(
            err,
            PreparePromptError::Profile(CalculateProfileError::CalendarInvalidDate(_))
        ));
    }

    #[test]
    fn test_output_serializes() {
        let reading = PrepareReadingUseCase::default()
            .execute(PrepareReadingInput::new("John Smith", "01/01/2000", "Hi"))
            .unwrap();
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["person"]["fullName"], "John Smith");
        assert_eq!(json["profile"]["destinyNumber"], 8);
        assert!(json["prompt"]["system"].is_string());
    }
}
