//! Application layer for numawise
//!
//! This crate contains use cases and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DateValidation, PromptSettings, ValidationPolicy};
pub use use_cases::calculate_profile::{
    CalculateProfileError, CalculateProfileInput, CalculateProfileUseCase,
};
pub use use_cases::prepare_compatibility::{
    PrepareCompatibilityInput, PrepareCompatibilityUseCase, PreparedCompatibility,
};
pub use use_cases::prepare_reading::{
    PreparePromptError, PrepareReadingInput, PrepareReadingUseCase, PreparedReading,
};
