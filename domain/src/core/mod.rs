//! Core domain concepts shared across all subdomains.
//!
//! - [`person::PersonDetails`]: validated name and date of birth
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod person;
