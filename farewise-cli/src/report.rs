//! Report command implementation for the Farewise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use farewise_core::{Metric, NetworkStore, PairRoute, all_pairs_report};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::network::{JsonFileNetworkStore, require_existing};
use crate::{ARG_METRIC, ARG_NETWORK, CliError, ENV_REPORT_NETWORK, write_json};

/// CLI arguments for the `report` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load a network from a JSON file and list the optimal route \
                 between every ordered pair of reachable locations under one \
                 metric.",
    about = "List optimal routes between every pair of locations"
)]
#[ortho_config(prefix = "FAREWISE")]
pub(crate) struct ReportArgs {
    /// Path to the network JSON file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) network: Option<Utf8PathBuf>,
    /// Metric to minimise: `distance` (default) or `cost`.
    #[arg(long = ARG_METRIC, value_name = "metric", value_parser = parse_metric)]
    #[serde(default)]
    pub(crate) metric: Option<Metric>,
}

fn parse_metric(raw: &str) -> Result<Metric, String> {
    raw.parse()
}

impl ReportArgs {
    pub(crate) fn into_config(self) -> Result<ReportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ReportConfig::try_from(merged)
    }
}

/// Resolved `report` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportConfig {
    /// Path to the network JSON file.
    pub(crate) network: Utf8PathBuf,
    /// Metric every listed route minimises.
    pub(crate) metric: Metric,
}

impl TryFrom<ReportArgs> for ReportConfig {
    type Error = CliError;

    fn try_from(args: ReportArgs) -> Result<Self, Self::Error> {
        let network = args.network.ok_or(CliError::MissingArgument {
            field: ARG_NETWORK,
            env: ENV_REPORT_NETWORK,
        })?;
        Ok(Self {
            network,
            metric: args.metric.unwrap_or(Metric::Distance),
        })
    }
}

/// JSON document printed by the `report` command.
#[derive(Debug, Serialize)]
struct ReportView<'a> {
    metric: Metric,
    routes: &'a [PairRoute],
}

pub(crate) fn run_report(args: ReportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.network, ARG_NETWORK)?;
    execute_report(&config, writer)
}

/// Print the all-pairs report for the network named by `config`.
pub(crate) fn execute_report(
    config: &ReportConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let network = JsonFileNetworkStore::new(config.network.clone()).load_network()?;
    let routes = all_pairs_report(&network.locations, &network.relations, config.metric)?;
    log::debug!(
        "{} report lists {} reachable pairs",
        config.metric,
        routes.len()
    );
    write_json(
        writer,
        &ReportView {
            metric: config.metric,
            routes: &routes,
        },
    )
}
