//! CLI entrypoint for numawise
//!
//! This is the main binary that wires together all layers.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use numawise_application::{
    CalculateProfileInput, CalculateProfileUseCase, DateValidation, PrepareCompatibilityInput,
    PrepareCompatibilityUseCase, PrepareReadingInput, PrepareReadingUseCase, PromptSettings,
    ValidationPolicy,
};
use numawise_domain::prompt::SUGGESTED_QUESTIONS;
use numawise_domain::{OutputFormat, parse_compatibility_reply, parse_reading_reply};
use numawise_infrastructure::{ConfigLoader, FileConfig, Severity};
use numawise_presentation::{Cli, Command, ConsoleFormatter};
use std::io::Read;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}: {}", issue.field, issue.message),
            Severity::Warning => warn!("{}: {}", issue.field, issue.message),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Invalid configuration, see the errors above");
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let policy = validation_policy(&cli, &config);
    let settings = config.prompt.to_settings();

    info!("Starting numawise ({:?} output, {:?})", format, policy);

    let Some(command) = cli.command else {
        bail!("A command is required. Run `numawise --help` for usage.");
    };

    let output = run(command, format, policy, settings)?;
    println!("{}", output);

    Ok(())
}

fn validation_policy(cli: &Cli, config: &FileConfig) -> ValidationPolicy {
    let policy = config.validation.to_policy();
    if cli.strict_dates {
        policy.with_date_validation(DateValidation::Strict)
    } else {
        policy
    }
}

fn run(
    command: Command,
    format: OutputFormat,
    policy: ValidationPolicy,
    settings: PromptSettings,
) -> Result<String> {
    let output = match command {
        Command::Profile(person) => {
            let use_case = CalculateProfileUseCase::new(policy);
            let input = CalculateProfileInput::new(&person.name, &person.dob);
            let profile = use_case.execute(&input)?;
            match format {
                OutputFormat::Text => {
                    ConsoleFormatter::format_profile(&person.name, &person.dob, &profile)
                }
                OutputFormat::Json => ConsoleFormatter::format_json(&profile),
            }
        }
        Command::Reading { person, question } => {
            let use_case = PrepareReadingUseCase::new(policy, settings);
            let reading =
                use_case.execute(PrepareReadingInput::new(person.name, person.dob, question))?;
            match format {
                OutputFormat::Text => ConsoleFormatter::format_reading(&reading),
                OutputFormat::Json => ConsoleFormatter::format_json(&reading),
            }
        }
        Command::Compat {
            person,
            partner_name,
            partner_dob,
        } => {
            let use_case = PrepareCompatibilityUseCase::new(policy, settings);
            let prepared = use_case.execute(PrepareCompatibilityInput::new(
                person.name,
                person.dob,
                partner_name,
                partner_dob,
            ))?;
            match format {
                OutputFormat::Text => ConsoleFormatter::format_compatibility(&prepared),
                OutputFormat::Json => ConsoleFormatter::format_json(&prepared),
            }
        }
        Command::Questions => match format {
            OutputFormat::Text => ConsoleFormatter::format_questions(&SUGGESTED_QUESTIONS),
            OutputFormat::Json => ConsoleFormatter::format_json(&SUGGESTED_QUESTIONS),
        },
        Command::ParseReply {
            input,
            compatibility,
        } => {
            let text = read_input(&input)?;
            if compatibility {
                let reply = parse_compatibility_reply(&text)?;
                match format {
                    OutputFormat::Text => ConsoleFormatter::format_compatibility_reply(&reply),
                    OutputFormat::Json => ConsoleFormatter::format_json(&reply),
                }
            } else {
                let reply = parse_reading_reply(&text)?;
                match format {
                    OutputFormat::Text => ConsoleFormatter::format_reading_reply(&reply),
                    OutputFormat::Json => ConsoleFormatter::format_json(&reply),
                }
            }
        }
    };

    Ok(output)
}

/// Read a file, or stdin for `-`
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read reply from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read reply from {}", path.display()))
    }
}
