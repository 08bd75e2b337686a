//! Command-line argument parsing for the aifindr CLI.

use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Ask the agent one question
    Fetch(FetchArgs),
}

/// Options for a single query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchArgs {
    pub query: String,
    pub project: String,
    pub show_sources: bool,
    pub json: bool,
}

/// Argument errors; printed together with the usage text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: String },

    #[error("Query is required")]
    MissingQuery,

    #[error("--project is required")]
    MissingProject,

    #[error("unrecognized argument: {0}")]
    UnknownFlag(String),

    #[error("unexpected extra argument: {0}")]
    UnexpectedArgument(String),
}

pub const USAGE: &str = "\
Usage: aifindr [QUERY] [--query|-q QUERY] --project|-p PROJECT_ID [OPTIONS]

Fetch the agent's answer for a query.

Options:
  -q, --query QUERY       The query (alternative to the positional argument)
  -p, --project ID        AIFindr project ID (required)
  -s, --show-sources      Show retrieved sources
  -j, --json              Output as JSON
  -V, --version           Print version
  -h, --help              Print this help

Environment:
  AIFINDR_ORG_ID, AIFINDR_API_KEY   Credentials (required)
  AIFINDR_API_URL                   API root override
  AIFINDR_TIMEOUT_SECS              Request timeout (default 120)";

/// Parse command-line arguments and return the command to run.
///
/// The first item is the program name and is skipped. `--version` and
/// `--help` win over everything else. A positional query takes precedence
/// over `--query`.
///
/// # Examples
///
/// ```
/// use aifindr::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["aifindr".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut positional: Option<String> = None;
    let mut query_flag: Option<String> = None;
    let mut project: Option<String> = None;
    let mut show_sources = false;
    let mut json = false;

    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--query" | "-q" => query_flag = Some(take_value(&arg, args.next())?),
            "--project" | "-p" => project = Some(take_value(&arg, args.next())?),
            "--show-sources" | "-s" => show_sources = true,
            "--json" | "-j" => json = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(ArgsError::UnknownFlag(arg));
            }
            _ if positional.is_none() => positional = Some(arg),
            _ => return Err(ArgsError::UnexpectedArgument(arg)),
        }
    }

    let project = project.ok_or(ArgsError::MissingProject)?;
    let query = positional
        .filter(|q| !q.is_empty())
        .or(query_flag)
        .filter(|q| !q.is_empty())
        .ok_or(ArgsError::MissingQuery)?;

    Ok(CliCommand::Fetch(FetchArgs {
        query,
        project,
        show_sources,
        json,
    }))
}

fn take_value(flag: &str, value: Option<String>) -> Result<String, ArgsError> {
    value.ok_or_else(|| ArgsError::MissingValue {
        flag: flag.to_string(),
    })
}
