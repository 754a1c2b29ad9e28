//! Prompt domain
//!
//! Templates for the prompts sent to a language model, plus the greeting and
//! suggested questions shown before the first reading.

pub mod intro;
mod template;

pub use intro::{COMPATIBILITY_QUESTION, SUGGESTED_QUESTIONS, greeting, is_compatibility_question};
pub use template::{PreparedPrompt, ReadingPromptTemplate};
