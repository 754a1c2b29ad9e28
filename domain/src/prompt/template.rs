//! Prompt templates for readings and compatibility analyses

use crate::compatibility::ProfilePair;
use crate::core::person::PersonDetails;
use crate::numerology::NumerologyProfile;
use serde::{Deserialize, Serialize};

/// A rendered prompt, ready to hand to a language model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedPrompt {
    pub system: String,
    pub user: String,
}

/// Templates for generating numerology prompts
pub struct ReadingPromptTemplate;

impl ReadingPromptTemplate {
    /// System prompt for single-person readings
    pub fn reading_system(persona: &str) -> String {
        format!(
            r#"You are {persona}, an expert Pythagorean numerologist with a warm, encouraging and insightful voice.
Your readings should feel personal and a little magical while staying practical.
Go beyond the literal question and draw connections between the person's core numbers.

Reply with a single JSON object with these fields:
- "answer": three paragraphs. The first answers the question directly. The second weaves in the person's other core numbers and their practical meaning. The third offers an uplifting insight they may not have considered.
- "followUpQuestion": a conversational offer to explore another layer of their profile, not a request for more personal details.
- "isYesNoQuestion": true if the follow-up question can be answered with a simple "Yes", otherwise false."#
        )
    }

    /// User prompt for a reading
    pub fn reading_prompt(
        person: &PersonDetails,
        profile: &NumerologyProfile,
        question: &str,
    ) -> String {
        let mut prompt = String::from("Here are the details for the person:\n");
        prompt.push_str(&Self::person_block(person, profile));
        prompt.push_str(&format!("\nQuestion: {}\n", question.trim()));
        prompt
    }

    /// System prompt for compatibility analyses
    pub fn compatibility_system(persona: &str) -> String {
        format!(
            r#"You are {persona}, an expert numerologist specializing in relationship compatibility using Pythagorean numerology.
Your tone is warm, encouraging and a little bit magical. Reveal the deeper dynamics of the relationship.

Reply with a single JSON object with these fields:
- "analysis": three paragraphs. The first covers the foundational harmony from their Life Path and Destiny numbers, with strengths and challenges. The second explores how their Soul Urge and Personality numbers play together day to day. The third gives practical advice or a hidden insight for growing together.
- "followUpQuestion": a conversational offer to explore their relationship further, not a request for more details.
- "isYesNoQuestion": true if the follow-up question can be answered with a simple "Yes", otherwise false."#
        )
    }

    /// User prompt for a compatibility analysis
    pub fn compatibility_prompt(
        user: &PersonDetails,
        partner: &PersonDetails,
        pair: &ProfilePair,
    ) -> String {
        let mut prompt = String::from("User's details:\n");
        prompt.push_str(&Self::person_block(user, &pair.user));
        prompt.push_str("\nPartner's details:\n");
        prompt.push_str(&Self::person_block(partner, &pair.partner));

        let shared = pair.shared_numbers();
        if !shared.is_empty() {
            prompt.push_str("\nShared numbers:\n");
            for (kind, value) in shared {
                prompt.push_str(&format!("- {}: {}\n", kind, value));
            }
        }

        prompt
    }

    /// Prepared reading prompt with the system prompt for `persona`
    pub fn prepare_reading(
        persona: &str,
        person: &PersonDetails,
        profile: &NumerologyProfile,
        question: &str,
    ) -> PreparedPrompt {
        PreparedPrompt {
            system: Self::reading_system(persona),
            user: Self::reading_prompt(person, profile, question),
        }
    }

    /// Prepared compatibility prompt with the system prompt for `persona`
    pub fn prepare_compatibility(
        persona: &str,
        user: &PersonDetails,
        partner: &PersonDetails,
        pair: &ProfilePair,
    ) -> PreparedPrompt {
        PreparedPrompt {
            system: Self::compatibility_system(persona),
            user: Self::compatibility_prompt(user, partner, pair),
        }
    }

    fn person_block(person: &PersonDetails, profile: &NumerologyProfile) -> String {
        let mut block = format!(
            "- Full Name: {}\n- Date of Birth: {}\n",
            person.full_name(),
            person.date_of_birth()
        );
        for (kind, value) in profile.entries() {
            block.push_str(&format!("- {}: {}\n", kind, value));
        }
        block
    }
}
