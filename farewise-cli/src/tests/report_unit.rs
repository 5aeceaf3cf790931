//! Focused unit tests covering the all-pairs report command.

use super::helpers::{Workspace, parse_output};
use super::*;
use crate::report::{ReportArgs, ReportConfig, execute_report};
use camino::Utf8PathBuf;
use clap::Parser;
use farewise_core::Metric;
use rstest::rstest;
use serde_json::json;

fn parse_report_args(extra: &[&'static str]) -> Result<ReportArgs, clap::Error> {
    let argv = ["farewise", "report", "network.json"]
        .into_iter()
        .chain(extra.iter().copied());
    match Cli::try_parse_from(argv)?.command {
        Command::Report(args) => Ok(args),
        other => panic!("expected report command, found {other:?}"),
    }
}

#[rstest]
#[case::default(&[], Metric::Distance)]
#[case::distance(&["--metric", "distance"], Metric::Distance)]
#[case::cost(&["--metric", "cost"], Metric::Cost)]
#[case::price_alias(&["--metric", "price"], Metric::Cost)]
fn report_args_parse_metric(#[case] extra: &[&'static str], #[case] expected: Metric) {
    let args = parse_report_args(extra).expect("arguments should parse");
    let config = ReportConfig::try_from(args).expect("config should build");
    assert_eq!(config.network, Utf8PathBuf::from("network.json"));
    assert_eq!(config.metric, expected);
}

#[rstest]
fn report_args_reject_unknown_metric() {
    let err = parse_report_args(&["--metric", "duration"]).expect_err("unknown metric should fail");
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    assert!(err.to_string().contains("unknown metric 'duration'"));
}

#[rstest]
fn report_config_requires_network() {
    match ReportConfig::try_from(ReportArgs::default()).expect_err("network is required") {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_NETWORK);
            assert_eq!(env, ENV_REPORT_NETWORK);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::distance(Metric::Distance, "distance", 5.0)]
#[case::cost(Metric::Cost, "cost", 90.0)]
fn report_lists_every_reachable_pair(
    #[case] metric: Metric,
    #[case] label: &str,
    #[case] a_to_c: f64,
) {
    let workspace = Workspace::new();
    let config = ReportConfig {
        network: workspace.write_five_location_network(),
        metric,
    };
    let mut buffer = Vec::new();
    execute_report(&config, &mut buffer).expect("report should succeed");
    let output = parse_output(&buffer);

    assert_eq!(output["metric"], json!(label));
    let routes = output["routes"].as_array().expect("routes array");
    assert_eq!(routes.len(), 20);
    let a_to_c_route = routes
        .iter()
        .find(|route| route["from"] == json!(101) && route["to"] == json!(103))
        .expect("A to C listed");
    assert_eq!(a_to_c_route["total"], json!(a_to_c));
}
