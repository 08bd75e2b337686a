//! CLI module for aifindr.
//!
//! - Argument parsing
//! - Version and usage display
//! - Fetching one answer and rendering it as text or JSON
//!
//! # Usage
//!
//! ```ignore
//! use aifindr::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let exit_code = runtime.block_on(run_cli_command(command));
//! std::process::exit(exit_code);
//! ```

pub mod args;
pub mod output;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, FetchArgs, USAGE};
pub use output::{render_error, FetchReport, ReportSource};
pub use version::{version_line, VERSION};

use color_eyre::{Report, Result};
use tracing::error;

use crate::client::AifindrClient;
use crate::config::ClientConfig;
use crate::error::{ErrorContext, FindrError};

/// Run a parsed command, printing its output to stdout.
///
/// Returns the process exit code: 0 on success, 1 if the query failed.
pub async fn run_cli_command(command: CliCommand) -> i32 {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            0
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            0
        }
        CliCommand::Fetch(args) => match fetch_from_env(&args).await {
            Ok(output) => {
                println!("{}", output);
                0
            }
            Err(e) => {
                println!("{}", report_failure(&e, args.json));
                1
            }
        },
    }
}

/// Log a failed query to stderr and render it for stdout.
///
/// Client errors print their user message, plus the category hint in text
/// mode. The operation context only goes to the log.
pub fn report_failure(e: &Report, json: bool) -> String {
    match e.downcast_ref::<FindrError>() {
        Some(err) => {
            let context = err
                .context()
                .map(ErrorContext::to_log_string)
                .unwrap_or_default();
            error!(
                code = err.error_code(),
                category = %err.category(),
                context = %context,
                "Query failed: {}",
                err
            );
            render_error(&err.user_message(), Some(err.recovery_hint()), json)
        }
        None => {
            error!("Query failed: {:?}", e);
            render_error(&e.to_string(), None, json)
        }
    }
}

/// Load configuration from the environment and fetch one rendered answer.
pub async fn fetch_from_env(args: &FetchArgs) -> Result<String> {
    let config = ClientConfig::from_env(&args.project).map_err(FindrError::from)?;
    fetch_rendered(&AifindrClient::new(config), args).await
}

/// Fetch one answer with an existing client and render it.
pub async fn fetch_rendered(client: &AifindrClient, args: &FetchArgs) -> Result<String> {
    let result = client.fetch(&args.query).await?;
    let report = FetchReport::new(&args.query, result, args.show_sources);

    if args.json {
        Ok(report.to_json()?)
    } else {
        Ok(report.to_text())
    }
}
