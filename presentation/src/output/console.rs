//! Console output formatter for profiles, prompts and replies

use colored::Colorize;
use numawise_application::{PreparedCompatibility, PreparedReading};
use numawise_domain::numerology::is_master_number;
use numawise_domain::{CompatibilityReply, NumerologyProfile, PreparedPrompt, ReadingReply};
use serde::Serialize;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a profile with the name and date it was computed from
    pub fn format_profile(
        full_name: &str,
        date_of_birth: &str,
        profile: &NumerologyProfile,
    ) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Numerology Profile"));
        output.push('\n');
        output.push_str(&Self::person_line(full_name, date_of_birth));
        output.push('\n');
        output.push_str(&Self::profile_table(profile));
        output.push_str(&Self::footer());

        output
    }

    /// Format a prepared reading: profile, then the prompt
    pub fn format_reading(reading: &PreparedReading) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Reading Prompt"));
        output.push('\n');
        output.push_str(&format!("{}\n\n", reading.greeting.italic()));
        output.push_str(&Self::person_line(
            reading.person.full_name(),
            reading.person.date_of_birth(),
        ));
        output.push_str(&format!("{} {}\n\n", "Question:".cyan().bold(), reading.question));
        output.push_str(&Self::profile_table(&reading.profile));
        output.push_str(&Self::format_prompt(&reading.prompt));
        output.push_str(&Self::footer());

        output
    }

    /// Format a prepared compatibility analysis: both profiles, then the prompt
    pub fn format_compatibility(prepared: &PreparedCompatibility) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Compatibility Prompt"));
        output.push('\n');
        output.push_str(&format!(
            "{:<22}{:>12}{:>12}\n",
            "",
            prepared.user.full_name().bold(),
            prepared.partner.full_name().bold()
        ));

        for (kind, user, partner) in prepared.profiles.rows() {
            let row = format!("{:<22}{:>12}{:>12}", kind.label(), user, partner);
            if user == partner {
                output.push_str(&format!("{}  {}\n", row.green(), "shared".dimmed()));
            } else {
                output.push_str(&format!("{}\n", row));
            }
        }

        output.push_str(&Self::format_prompt(&prepared.prompt));
        output.push_str(&Self::footer());

        output
    }

    /// Format the system and user prompts
    pub fn format_prompt(prompt: &PreparedPrompt) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("System Prompt"));
        output.push_str(&Self::indent(&prompt.system, "  "));
        output.push('\n');
        output.push_str(&Self::section_header("User Prompt"));
        output.push_str(&Self::indent(&prompt.user, "  "));
        output.push('\n');

        output
    }

    /// Format a numbered list of suggested questions
    pub fn format_questions(questions: &[&str]) -> String {
        let mut output = format!("{}\n", "Suggested questions:".cyan().bold());
        for (i, question) in questions.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, question));
        }
        output
    }

    /// Format a parsed reading reply
    pub fn format_reading_reply(reply: &ReadingReply) -> String {
        let mut output = String::new();
        output.push_str(&reply.answer);
        output.push_str("\n\n");
        output.push_str(&Self::follow_up(&reply.follow_up_question, reply.is_yes_no_question));
        output
    }

    /// Format a parsed compatibility reply
    pub fn format_compatibility_reply(reply: &CompatibilityReply) -> String {
        let mut output = reply.to_message();
        if reply.is_yes_no_question {
            output.push_str(&format!(" {}", "[yes]".dimmed()));
        }
        output.push('\n');
        output
    }

    /// Format any serializable result as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a core number, marking master numbers
    pub fn format_number(value: u32) -> String {
        if is_master_number(u64::from(value)) {
            format!(
                "{} {}",
                value.to_string().magenta().bold(),
                "(master number)".dimmed()
            )
        } else {
            value.to_string()
        }
    }

    fn profile_table(profile: &NumerologyProfile) -> String {
        let mut output = String::new();
        for (kind, value) in profile.entries() {
            output.push_str(&format!(
                "  {:<22}{}\n",
                format!("{}:", kind.label()).yellow(),
                Self::format_number(value)
            ));
        }
        output
    }

    fn person_line(full_name: &str, date_of_birth: &str) -> String {
        format!(
            "{} {}\n{} {}\n",
            "Name:".cyan().bold(),
            full_name,
            "Born:".cyan().bold(),
            date_of_birth
        )
    }

    fn follow_up(question: &str, is_yes_no: bool) -> String {
        if is_yes_no {
            format!("{} {}\n", question.italic(), "[yes]".dimmed())
        } else {
            format!("{}\n", question.italic())
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
