//! Infrastructure layer for numawise
//!
//! This crate contains adapters for the outside world. Today that is
//! configuration file loading.

pub mod config;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileOutputConfig, FileOutputFormat, FilePromptConfig,
    FileValidationConfig, Severity,
};
