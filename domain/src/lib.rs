//! Domain layer for numawise
//!
//! This crate contains the numerology engine and the value objects built
//! around it. It performs no I/O and has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Numerology profile
//!
//! [`NumerologyProfile`] holds the five core numbers derived from a full name
//! and a `MM/DD/YYYY` date of birth:
//!
//! - **Life Path** and **Birthday** from the date
//! - **Destiny**, **Soul Urge** and **Personality** from the letters of the name
//!
//! ## Prompts and replies
//!
//! - [`ReadingPromptTemplate`] renders the prompts for readings and
//!   compatibility analyses
//! - [`reply`] parses the JSON the model sends back

pub mod compatibility;
pub mod config;
pub mod core;
pub mod numerology;
pub mod prompt;
pub mod reply;

// Re-export commonly used types
pub use compatibility::ProfilePair;
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    person::{PersonDetails, is_valid_date_of_birth},
};
pub use numerology::{BirthDate, CoreNumberKind, NumerologyProfile, profile};
pub use prompt::{PreparedPrompt, ReadingPromptTemplate};
pub use reply::{CompatibilityReply, ReadingReply, parse_compatibility_reply, parse_reading_reply};
