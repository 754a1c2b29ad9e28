//! Conversation openers: greeting and suggested questions

/// Questions offered to a user who does not know where to start
pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "What is my Life Path number and what does it reveal about me?",
    "Analyze my name to find my Destiny number.",
    "What career paths are best suited for my numerological profile?",
    "How can I better understand my life's mission and purpose?",
    COMPATIBILITY_QUESTION,
];

/// The suggested question that switches to a compatibility analysis
pub const COMPATIBILITY_QUESTION: &str =
    "Check the numerological compatibility between me and my partner.";

/// Opening message once a person's details have been received
pub fn greeting(persona: &str, full_name: &str) -> String {
    format!(
        "Hello, {full_name}. I have received your information. I am {persona}, an expert numerologist ready to answer your questions. What would you like to explore first?"
    )
}

/// Returns `true` when a question asks for a compatibility analysis
/// rather than a single-person reading
pub fn is_compatibility_question(question: &str) -> bool {
    question.trim().eq_ignore_ascii_case(COMPATIBILITY_QUESTION)
}
