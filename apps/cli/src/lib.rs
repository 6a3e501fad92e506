//! # Numero CLI Library
//!
//! Core library for the `numero` binary: argument parsing, startup and
//! command dispatch.
//!
//! ## Module Organization
//! ```text
//! numero_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── form.rs     ◄─── Form field state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── reading.rs  ◄─── One submission
//! │   ├── form.rs     ◄─── Interactive form
//! │   └── config.rs   ◄─── Show configuration
//! ├── render.rs       ◄─── Result screen (text / JSON)
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use numero_core::validation::parse_birthdate;
use numero_core::{Language, ReadingRequest};

use commands::reading::{submit, Submission};
use error::ApiError;
use render::{render, render_error, render_warning};
use state::{ConfigState, OutputFormat};

/// Numerology reading from a name and birthdate.
///
/// Without a subcommand an interactive form is shown.
#[derive(Parser, Debug)]
#[command(name = "numero")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Language of the result text (en, ja)
    #[arg(long = "lang", global = true)]
    pub language: Option<Language>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file (default: numero.toml in the platform config directory)
    #[arg(long = "config", env = "NUMERO_CONFIG", global = true)]
    pub config_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute one reading from the given fields
    Read(ReadArgs),

    /// Fill in the form interactively
    Form,

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Name, in Latin letters
    #[arg(long, short = 'n', default_value = "")]
    pub name: String,

    /// Birthdate as YYYY-MM-DD, between 1925-01-01 and 2025-12-31
    #[arg(long, short = 'b')]
    pub birthdate: Option<String>,
}

/// Runs the binary: parse arguments, load configuration, dispatch.
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ConfigState::load(cli.config_file.as_deref())
        .context("could not load configuration")?
        .with_overrides(cli.language, cli.format);
    info!(language = %config.language, "Starting numero");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let outcome = dispatch(
        cli.command.unwrap_or(Command::Form),
        &config,
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(outcome.into())
}

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Result shown, or a warning the user can act on.
    Success,
    /// The command failed; the error was printed.
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Executes one command against the given streams.
///
/// Command failures are printed to `err` and turned into a failing exit
/// code, as is a form session in which every submission failed. Only
/// broken output streams surface as `Err`.
pub fn dispatch<R, W, E>(
    command: Command,
    config: &ConfigState,
    input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<Outcome>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    debug!(?command, "Dispatching");
    let result = match command {
        Command::Read(args) => read(&args, config, out, err).map(|()| Outcome::Success),
        Command::Form => {
            commands::form::run_form(config, input, out, err).map(|summary| summary.outcome())
        }
        Command::Config => commands::config::show_config(config).and_then(|rendered| {
            write!(out, "{rendered}")?;
            Ok(Outcome::Success)
        }),
    };

    match result {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            writeln!(err, "{}", render_error(&e, config.output_format))?;
            Ok(Outcome::Failure)
        }
    }
}

/// One-shot submission from command-line fields.
fn read<W: Write, E: Write>(
    args: &ReadArgs,
    config: &ConfigState,
    out: &mut W,
    err: &mut E,
) -> Result<(), ApiError> {
    let birthdate = match args.birthdate.as_deref() {
        Some(input) => parse_birthdate(input)?,
        None => config.default_birthdate,
    };
    let request = ReadingRequest::new(args.name.as_str(), birthdate);

    match submit(&request, config.language)? {
        Submission::Completed(reading) => {
            let rendered = render(&reading, config.output_format, config.mark_master_numbers)?;
            writeln!(out, "{}", rendered.trim_end())?;
        }
        Submission::Warning(message) => {
            writeln!(err, "{}", render_warning(&message, config.output_format))?;
        }
    }
    Ok(())
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - Default: WARN, so stdout carries only results
/// - `-v` / `-vv` / `-vvv`: info / debug / trace
/// - `RUST_LOG` wins when set, e.g. `RUST_LOG=numero_core=trace`
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch_args(args: &[&str], config: &ConfigState) -> (Outcome, String, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let config = config.clone().with_overrides(cli.language, cli.format);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = dispatch(
            cli.command.unwrap_or(Command::Form),
            &config,
            &b""[..],
            &mut out,
            &mut err,
        )
        .unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_read_command() {
        let (code, out, err) = dispatch_args(
            &["numero", "read", "--name", "ABC", "--birthdate", "1990-05-15"],
            &ConfigState::default(),
        );
        assert_eq!(code, Outcome::Success);
        assert!(out.contains("Life Path Number: 3 → "));
        assert!(err.is_empty());
    }

    #[test]
    fn test_read_uses_default_birthdate() {
        let (_, out, _) = dispatch_args(&["numero", "read", "-n", "ABC"], &ConfigState::default());
        assert!(out.contains("Life Path Number: 2 → "));
        assert!(out.contains("Birth Day Number: 1"));
    }

    #[test]
    fn test_read_empty_name_is_a_warning() {
        let (code, out, err) = dispatch_args(&["numero", "read"], &ConfigState::default());
        assert_eq!(code, Outcome::Success);
        assert!(out.is_empty());
        assert_eq!(err.trim_end(), "warning: Please enter your name in Latin letters.");
    }

    #[test]
    fn test_read_blank_name_still_computes() {
        let (code, out, err) = dispatch_args(
            &["numero", "read", "-n", "   ", "-b", "1990-05-15"],
            &ConfigState::default(),
        );
        assert_eq!(code, Outcome::Success);
        assert!(out.contains("Expression Number: 0"));
        assert!(out.contains("Soul Urge Number: 0"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_json_warning() {
        let (code, out, err) =
            dispatch_args(&["numero", "read", "--format", "json"], &ConfigState::default());
        assert_eq!(code, Outcome::Success);
        assert!(out.is_empty());
        let value: serde_json::Value = serde_json::from_str(&err).unwrap();
        assert_eq!(value["warning"], "Please enter your name in Latin letters.");
    }

    #[test]
    fn test_form_with_only_errors_fails() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let input = &b"Ada\n15.05.1990\n"[..];
        let code = dispatch(Command::Form, &ConfigState::default(), input, &mut out, &mut err)
            .unwrap();
        assert_eq!(code, Outcome::Failure);
        assert!(out.is_empty());
    }

    #[test]
    fn test_read_bad_date_fails() {
        let (code, out, err) = dispatch_args(
            &["numero", "read", "-n", "Ada", "-b", "2030-01-01"],
            &ConfigState::default(),
        );
        assert_eq!(code, Outcome::Failure);
        assert!(out.is_empty());
        assert!(err.starts_with("error: birthdate must be between 1925-01-01 and 2025-12-31"));
    }

    #[test]
    fn test_global_flags() {
        let (_, out, _) = dispatch_args(
            &["numero", "read", "-n", "ABC", "-b", "1990-05-15", "--lang", "ja", "--format", "json"],
            &ConfigState::default(),
        );
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["language"], "ja");
        assert_eq!(value["profile"]["life_path"], 3);
    }

    #[test]
    fn test_config_command() {
        let (code, out, _) = dispatch_args(&["numero", "config"], &ConfigState::default());
        assert_eq!(code, Outcome::Success);
        assert!(out.contains("output_format = \"text\""));
    }

    #[test]
    fn test_no_subcommand_runs_form() {
        let (code, out, err) = dispatch_args(&["numero"], &ConfigState::default());
        assert_eq!(code, Outcome::Success);
        assert!(out.is_empty());
        assert!(err.contains("Numerology Reading"));
    }

    #[test]
    fn test_unknown_language_rejected_by_parser() {
        assert!(Cli::try_parse_from(["numero", "--lang", "fr"]).is_err());
    }
}
