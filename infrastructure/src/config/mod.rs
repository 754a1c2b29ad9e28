//! Configuration file loading for numawise
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./numawise.toml` or `./.numawise.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/numawise/config.toml`
//! 4. Fallback: `~/.config/numawise/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileOutputConfig, FileOutputFormat, FilePromptConfig,
    FileValidationConfig, Severity,
};
pub use loader::ConfigLoader;
