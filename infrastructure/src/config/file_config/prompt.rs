//! Prompt configuration from TOML (`[prompt]` section)

use numawise_application::PromptSettings;
use numawise_application::config::prompt_settings::DEFAULT_PERSONA;
use serde::{Deserialize, Serialize};

/// Raw prompt configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    /// Name the numerologist introduces itself with
    pub persona: String,
}

impl Default for FilePromptConfig {
    fn default() -> Self {
        Self {
            persona: DEFAULT_PERSONA.to_string(),
        }
    }
}

impl FilePromptConfig {
    pub fn to_settings(&self) -> PromptSettings {
        PromptSettings::default().with_persona(self.persona.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_deserialize() {
        let toml_str = r#"
[prompt]
persona = "Iris"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.prompt.to_settings().persona, "Iris");
    }
}
