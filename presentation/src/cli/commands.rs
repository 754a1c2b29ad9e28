//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for numawise_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => numawise_domain::OutputFormat::Text,
            OutputFormat::Json => numawise_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for numawise
#[derive(Parser, Debug)]
#[command(name = "numawise")]
#[command(author, version, about = "Pythagorean numerology profiles and reading prompts")]
#[command(long_about = r#"
numawise computes a numerology profile (Life Path, Destiny, Soul Urge,
Personality and Birthday numbers) from a full name and a MM/DD/YYYY date of
birth, and prepares the prompts used to ask a language model for readings and
compatibility analyses.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./numawise.toml     Project-level config
3. ~/.config/numawise/config.toml   Global config

Example:
  numawise profile --name "John Smith" --dob 01/01/2000
  numawise reading --name "John Smith" --dob 01/01/2000 -q "What career suits me?"
  numawise compat --name "John Smith" --dob 01/01/2000 --partner-name "Mary Taylor" --partner-dob 12/25/1990
  numawise parse-reply reply.json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reject dates that are not real calendar days
    #[arg(long, global = true)]
    pub strict_dates: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a numerology profile
    Profile(PersonArgs),

    /// Prepare the prompt for a reading
    Reading {
        #[command(flatten)]
        person: PersonArgs,

        /// The question to ask about the profile
        #[arg(short, long)]
        question: String,
    },

    /// Prepare the prompt for a compatibility analysis
    Compat {
        #[command(flatten)]
        person: PersonArgs,

        /// Partner's full name
        #[arg(long, value_name = "NAME")]
        partner_name: String,

        /// Partner's date of birth (MM/DD/YYYY)
        #[arg(long, value_name = "MM/DD/YYYY")]
        partner_dob: String,
    },

    /// List suggested questions
    Questions,

    /// Parse a model reply (JSON) from a file, or stdin with `-`
    ParseReply {
        /// Reply file, `-` for stdin
        #[arg(value_name = "FILE", default_value = "-")]
        input: PathBuf,

        /// Parse as a compatibility reply instead of a reading reply
        #[arg(long)]
        compatibility: bool,
    },
}

/// A person's name and date of birth
#[derive(Args, Debug, Clone)]
pub struct PersonArgs {
    /// Full name
    #[arg(short, long)]
    pub name: String,

    /// Date of birth (MM/DD/YYYY)
    #[arg(short, long, value_name = "MM/DD/YYYY")]
    pub dob: String,
}
