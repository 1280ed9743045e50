//! Command-line interface for ranking places with the heuristic
//! collaborators.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use placerank_core::AttributeSet;

mod error;
mod rank;

pub use error::CliError;

use rank::{RankArgs, run_rank};

const ARG_RANK_REQUEST: &str = "request-path";
const ARG_MAX_DISTANCE_KM: &str = "max-distance-km";
const ARG_ATTRIBUTE: &str = "attribute";
const ARG_OUTPUT: &str = "output";
const ARG_PRETTY: &str = "pretty";
const ENV_RANK_REQUEST: &str = "PLACERANK_CMDS_RANK_REQUEST_PATH";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the placerank CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// request cannot be read or ranked, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    init_logging()?;
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Attributes => {
            let mut stdout = std::io::stdout().lock();
            run_attributes_with(&mut stdout)
        }
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Library crates log through the `log` facade; the subscriber's
/// `tracing-log` bridge forwards those records.
fn init_logging() -> Result<(), CliError> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

#[derive(Debug, Parser)]
#[command(
    name = "placerank",
    about = "Rank candidate places against a user's preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the places in a JSON request.
    Rank(RankArgs),
    /// List the predefined attribute catalogue.
    Attributes,
}

fn run_attributes_with(writer: &mut dyn Write) -> Result<(), CliError> {
    for name in AttributeSet::catalogue().iter() {
        writeln!(writer, "{name}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
