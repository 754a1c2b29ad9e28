//! Structured replies returned by the language model.
//!
//! Both prompts ask for a JSON object. These types describe that object and
//! [`parsing`] extracts it from the raw model text.

pub mod parsing;

pub use parsing::{parse_compatibility_reply, parse_reading_reply};

use serde::{Deserialize, Serialize};

/// Reply to a single-person reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingReply {
    pub answer: String,
    pub follow_up_question: String,
    #[serde(default)]
    pub is_yes_no_question: bool,
}

/// Reply to a compatibility analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReply {
    pub analysis: String,
    pub follow_up_question: String,
    #[serde(default)]
    pub is_yes_no_question: bool,
}

impl CompatibilityReply {
    /// Chat message text: the analysis followed by the follow-up question
    pub fn to_message(&self) -> String {
        format!("{}\n\n{}", self.analysis, self.follow_up_question)
    }
}
