//! Reply parsing for readings and compatibility analyses.
//!
//! Models do not always return bare JSON: the object may be wrapped in a
//! ```` ```json ```` fence or surrounded by prose. The parsers start at the
//! first `{` and deserialize a single object, ignoring anything after it.

use super::{CompatibilityReply, ReadingReply};
use crate::core::error::DomainError;
use serde::de::DeserializeOwned;

/// Parse a reading reply from raw model text.
///
/// # Examples
///
/// ```
/// use numawise_domain::reply::parse_reading_reply;
///
/// let text = r#"Here you go:
/// {"answer": "Your path is 4.", "followUpQuestion": "Shall we go on?", "isYesNoQuestion": true}"#;
/// let reply = parse_reading_reply(text).unwrap();
/// assert_eq!(reply.answer, "Your path is 4.");
/// assert!(reply.is_yes_no_question);
/// ```
pub fn parse_reading_reply(response: &str) -> Result<ReadingReply, DomainError> {
    let reply: ReadingReply = parse_json_object(response)?;
    if reply.answer.trim().is_empty() {
        return Err(DomainError::InvalidReply("answer is empty".to_string()));
    }
    Ok(reply)
}

/// Parse a compatibility reply from raw model text.
pub fn parse_compatibility_reply(response: &str) -> Result<CompatibilityReply, DomainError> {
    let reply: CompatibilityReply = parse_json_object(response)?;
    if reply.analysis.trim().is_empty() {
        return Err(DomainError::InvalidReply("analysis is empty".to_string()));
    }
    Ok(reply)
}

fn parse_json_object<T: DeserializeOwned>(response: &str) -> Result<T, DomainError> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidReply(
            "the model did not return a response".to_string(),
        ));
    }

    let start = trimmed.find('{').ok_or_else(|| {
        DomainError::InvalidReply("no JSON object found in response".to_string())
    })?;

    // Stop at the end of the first object so trailing prose is ignored
    let mut objects = serde_json::Deserializer::from_str(&trimmed[start..]).into_iter::<T>();
    match objects.next() {
        Some(Ok(reply)) => Ok(reply),
        Some(Err(e)) => Err(DomainError::InvalidReply(e.to_string())),
        None => Err(DomainError::InvalidReply(
            "no JSON object found in response".to_string(),
        )),
    }
}
