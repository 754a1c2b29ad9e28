//! Use cases for numawise.
//!
//! - [`calculate_profile`]: numerology profile under a validation policy
//! - [`prepare_reading`]: reading prompt for one person
//! - [`prepare_compatibility`]: compatibility prompt for two people

pub mod calculate_profile;
pub mod prepare_compatibility;
pub mod prepare_reading;
