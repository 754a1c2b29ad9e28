//! Application-level configuration.
//!
//! - [`ValidationPolicy`]: input checks applied before computing a profile
//! - [`PromptSettings`]: persona used by the prompt templates

pub mod prompt_settings;
pub mod validation_policy;

pub use prompt_settings::PromptSettings;
pub use validation_policy::{DateValidation, ValidationPolicy, is_calendar_date};
