//! Command-line interface for querying Farewise route networks.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod network;
mod report;
mod route;
mod session;

pub use error::CliError;
pub use network::{JsonFileNetworkStore, JsonNetworkStoreError};
pub use session::{SessionLog, SessionRecord};

use report::ReportArgs;
use route::RouteArgs;

pub(crate) const ARG_NETWORK: &str = "network";
pub(crate) const ARG_FROM: &str = "from";
pub(crate) const ARG_TO: &str = "to";
pub(crate) const ARG_SESSION_LOG: &str = "session-log";
pub(crate) const ARG_METRIC: &str = "metric";
pub(crate) const ENV_ROUTE_NETWORK: &str = "FAREWISE_CMDS_ROUTE_NETWORK";
pub(crate) const ENV_ROUTE_FROM: &str = "FAREWISE_CMDS_ROUTE_FROM";
pub(crate) const ENV_ROUTE_TO: &str = "FAREWISE_CMDS_ROUTE_TO";
pub(crate) const ENV_REPORT_NETWORK: &str = "FAREWISE_CMDS_REPORT_NETWORK";

/// Run the Farewise CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Route(args) => route::run_route(args, &mut stdout),
        Command::Report(args) => report::run_report(args, &mut stdout),
    }
}

/// Write `value` to `writer` as pretty JSON followed by a newline.
pub(crate) fn write_json(writer: &mut dyn Write, value: &impl Serialize) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "farewise",
    about = "Find the shortest and cheapest routes through a carrier network",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the shortest and the cheapest route between two locations.
    Route(RouteArgs),
    /// List the optimal route between every reachable pair of locations.
    Report(ReportArgs),
}

#[cfg(test)]
mod tests;
