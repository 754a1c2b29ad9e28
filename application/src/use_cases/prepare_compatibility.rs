//! Prepare Compatibility use case.
//!
//! Computes both profiles and renders the compatibility prompt, including
//! the core numbers the two people share.

use super::calculate_profile::{CalculateProfileInput, CalculateProfileUseCase};
use super::prepare_reading::PreparePromptError;
use crate::config::{PromptSettings, ValidationPolicy};
use numawise_domain::{
    NumerologyProfile, PersonDetails, PreparedPrompt, ProfilePair, ReadingPromptTemplate,
};
use serde::Serialize;
use tracing::info;

/// Input for the [`PrepareCompatibilityUseCase`].
#[derive(Debug, Clone)]
pub struct PrepareCompatibilityInput {
    pub user_full_name: String,
    pub user_date_of_birth: String,
    pub partner_full_name: String,
    pub partner_date_of_birth: String,
}

impl PrepareCompatibilityInput {
    pub fn new(
        user_full_name: impl Into<String>,
        user_date_of_birth: impl Into<String>,
        partner_full_name: impl Into<String>,
        partner_date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            user_full_name: user_full_name.into(),
            user_date_of_birth: user_date_of_birth.into(),
            partner_full_name: partner_full_name.into(),
            partner_date_of_birth: partner_date_of_birth.into(),
        }
    }
}

/// Output of the [`PrepareCompatibilityUseCase`].
#[derive(Debug, Clone, Serialize)]
pub struct PreparedCompatibility {
    pub user: PersonDetails,
    pub partner: PersonDetails,
    pub profiles: ProfilePair,
    pub prompt: PreparedPrompt,
}

/// Use case for preparing a compatibility analysis prompt.
#[derive(Debug, Clone, Default)]
pub struct PrepareCompatibilityUseCase {
    profiles: CalculateProfileUseCase,
    settings: PromptSettings,
}

impl PrepareCompatibilityUseCase {
    pub fn new(policy: ValidationPolicy, settings: PromptSettings) -> Self {
        Self {
            profiles: CalculateProfileUseCase::new(policy),
            settings,
        }
    }

    pub fn execute(
        &self,
        input: PrepareCompatibilityInput,
    ) -> Result<PreparedCompatibility, PreparePromptError> {
        let user = PersonDetails::new(input.user_full_name, input.user_date_of_birth)?;
        let partner = PersonDetails::new(input.partner_full_name, input.partner_date_of_birth)?;

        let profiles = ProfilePair::new(self.profile_of(&user)?, self.profile_of(&partner)?);

        let prompt = ReadingPromptTemplate::prepare_compatibility(
            &self.settings.persona,
            &user,
            &partner,
            &profiles,
        );
        info!(
            "Prepared compatibility prompt for {} and {} ({} shared numbers)",
            user,
            partner,
            profiles.shared_numbers().len()
        );

        Ok(PreparedCompatibility {
            user,
            partner,
            profiles,
            prompt,
        })
    }

    fn profile_of(&self, person: &PersonDetails) -> Result<NumerologyProfile, PreparePromptError> {
        let input = CalculateProfileInput::new(person.full_name(), person.date_of_birth());
        Ok(self.profiles.execute(&input)?)
    }
}
