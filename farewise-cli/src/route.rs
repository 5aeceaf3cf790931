//! Route command implementation for the Farewise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use farewise_core::{
    LocationId, Metric, NetworkStore, NoPathReason, OptimalRoute, RouteOutcome, RouteQueryResult,
    RouteQueryService,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::network::{JsonFileNetworkStore, require_existing};
use crate::session::{SessionLog, SessionRecord, unix_now};
use crate::{
    ARG_FROM, ARG_NETWORK, ARG_SESSION_LOG, ARG_TO, CliError, ENV_ROUTE_FROM, ENV_ROUTE_NETWORK,
    ENV_ROUTE_TO, write_json,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load a network from a JSON file and print the shortest and \
                 the cheapest route between two locations. Values can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Find the shortest and cheapest routes between two locations"
)]
#[ortho_config(prefix = "FAREWISE")]
pub(crate) struct RouteArgs {
    /// Path to the network JSON file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) network: Option<Utf8PathBuf>,
    /// Identifier of the start location.
    #[arg(long = ARG_FROM, value_name = "id")]
    #[serde(default)]
    pub(crate) from: Option<LocationId>,
    /// Identifier of the destination location.
    #[arg(long = ARG_TO, value_name = "id")]
    #[serde(default)]
    pub(crate) to: Option<LocationId>,
    /// Append a record of the query to this JSON session log.
    #[arg(long = ARG_SESSION_LOG, value_name = "path")]
    #[serde(default)]
    pub(crate) session_log: Option<Utf8PathBuf>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    /// Path to the network JSON file.
    pub(crate) network: Utf8PathBuf,
    /// Start location identifier.
    pub(crate) from: LocationId,
    /// Destination location identifier.
    pub(crate) to: LocationId,
    /// Optional session log path.
    pub(crate) session_log: Option<Utf8PathBuf>,
}

impl RouteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.network, ARG_NETWORK)
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let network = args.network.ok_or(CliError::MissingArgument {
            field: ARG_NETWORK,
            env: ENV_ROUTE_NETWORK,
        })?;
        let from = args.from.ok_or(CliError::MissingArgument {
            field: ARG_FROM,
            env: ENV_ROUTE_FROM,
        })?;
        let to = args.to.ok_or(CliError::MissingArgument {
            field: ARG_TO,
            env: ENV_ROUTE_TO,
        })?;
        Ok(Self {
            network,
            from,
            to,
            session_log: args.session_log,
        })
    }
}

/// JSON view of one metric's outcome.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum OutcomeView<'a> {
    Found {
        route: &'a OptimalRoute,
    },
    NoPath {
        reason: NoPathReason,
        diagnostic: &'static str,
    },
}

impl<'a> From<&'a RouteOutcome> for OutcomeView<'a> {
    fn from(outcome: &'a RouteOutcome) -> Self {
        match outcome {
            RouteOutcome::Found(route) => Self::Found { route },
            RouteOutcome::NoPath { reason } => Self::NoPath {
                reason: *reason,
                diagnostic: reason.message(),
            },
        }
    }
}

/// JSON document printed by the `route` command.
#[derive(Debug, Serialize)]
struct RouteView<'a> {
    from: LocationId,
    to: LocationId,
    distance: OutcomeView<'a>,
    cost: OutcomeView<'a>,
}

impl<'a> RouteView<'a> {
    fn new(from: LocationId, to: LocationId, result: &'a RouteQueryResult) -> Self {
        Self {
            from,
            to,
            distance: result.outcome(Metric::Distance).into(),
            cost: result.outcome(Metric::Cost).into(),
        }
    }
}

pub(crate) fn run_route(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_route_config(args)?;
    execute_route(&config, writer)
}

fn resolve_route_config(args: RouteArgs) -> Result<RouteConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Answer the query described by `config`, print it, and log it if asked.
pub(crate) fn execute_route(config: &RouteConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let network = JsonFileNetworkStore::new(config.network.clone()).load_network()?;
    let result = RouteQueryService::new().find_routes_between(&network, config.from, config.to)?;
    for metric in Metric::ALL {
        if let Some(diagnostic) = result.outcome(metric).diagnostic() {
            log::info!(
                "no {metric} route from {} to {}: {diagnostic}",
                config.from,
                config.to
            );
        }
    }
    write_json(writer, &RouteView::new(config.from, config.to, &result))?;
    if let Some(path) = &config.session_log {
        let record = SessionRecord::from_result(
            &network,
            config.from,
            config.to,
            &result,
            unix_now(),
        );
        SessionLog::new(path.clone()).append(&record)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
