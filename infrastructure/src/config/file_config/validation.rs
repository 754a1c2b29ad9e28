//! Validation configuration from TOML (`[validation]` section)

use numawise_application::{DateValidation, ValidationPolicy};
use serde::{Deserialize, Serialize};

/// Raw validation configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileValidationConfig {
    /// Reject dates that are not real calendar days (e.g. 02/30)
    pub strict_dates: bool,
    /// Reject names that contain no letters
    pub require_name_letters: bool,
}

impl FileValidationConfig {
    /// Convert to the application-layer policy
    pub fn to_policy(&self) -> ValidationPolicy {
        let date_validation = if self.strict_dates {
            DateValidation::Strict
        } else {
            DateValidation::Permissive
        };
        ValidationPolicy::default()
            .with_date_validation(date_validation)
            .with_require_name_letters(self.require_name_letters)
    }
}
