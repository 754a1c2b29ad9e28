//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid date format '{input}'. Please use MM/DD/YYYY.")]
    InvalidDateFormat { input: String },

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid date of birth '{0}'. Please enter a valid date in MM/DD/YYYY format.")]
    InvalidDateOfBirth(String),

    #[error("Invalid model reply: {0}")]
    InvalidReply(String),
}

impl DomainError {
    /// Check if this error came from parsing a birth date
    pub fn is_date_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDateFormat { .. } | DomainError::InvalidDateOfBirth(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_format_display() {
        let error = DomainError::InvalidDateFormat {
            input: "13/45/abcd".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date format '13/45/abcd'. Please use MM/DD/YYYY."
        );
    }

    #[test]
    fn test_is_date_error_check() {
        assert!(
            DomainError::InvalidDateFormat {
                input: String::new()
            }
            .is_date_error()
        );
        assert!(DomainError::InvalidDateOfBirth("x".to_string()).is_date_error());
        assert!(!DomainError::InvalidName("x".to_string()).is_date_error());
        assert!(!DomainError::InvalidReply("x".to_string()).is_date_error());
    }
}
