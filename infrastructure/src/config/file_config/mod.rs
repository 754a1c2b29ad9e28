//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod prompt;
mod validation;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use prompt::FilePromptConfig;
pub use validation::FileValidationConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending key, e.g. `prompt.persona`
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// Input validation settings
    pub validation: FileValidationConfig,
    /// Prompt settings
    pub prompt: FilePromptConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.prompt.persona.contains(['\n', '\r']) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "prompt.persona".to_string(),
                message: "prompt.persona must be a single line".to_string(),
            });
        } else if self.prompt.persona.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "prompt.persona".to_string(),
                message: "prompt.persona is empty, falling back to the default persona".to_string(),
            });
        }

        issues
    }

    /// Check whether any issues are errors (i.e. fatal).
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
