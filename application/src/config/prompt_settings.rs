//! Prompt settings used when rendering templates.

use serde::{Deserialize, Serialize};

/// Name the numerologist introduces itself with
pub const DEFAULT_PERSONA: &str = "Numa";

/// Prompt rendering parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSettings {
    pub persona: String,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            persona: DEFAULT_PERSONA.to_string(),
        }
    }
}

impl PromptSettings {
    /// Use `persona`, falling back to the default for a blank name.
    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        let persona = persona.into();
        if !persona.trim().is_empty() {
            self.persona = persona.trim().to_string();
        }
        self
    }
}
