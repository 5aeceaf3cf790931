//! Append-only JSON log of route queries.
//!
//! The log file holds a JSON array; each successful `route` invocation with
//! `--session-log` appends one [`SessionRecord`]. Existing entries are kept
//! verbatim, even when their shape differs from the current record.

use std::io::ErrorKind;
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Path, Utf8PathBuf};
use farewise_core::{LocationId, Metric, NetworkSnapshot, RouteQueryResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CliError;

/// One logged route query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Seconds since the Unix epoch when the query ran.
    pub recorded_at: u64,
    /// Start location identifier.
    pub start: LocationId,
    /// End location identifier.
    pub end: LocationId,
    /// Names of the stops on the shortest route, if one exists.
    pub shortest_route: Option<Vec<String>>,
    /// Length of the shortest route in kilometres.
    pub shortest_distance_km: Option<f64>,
    /// Names of the stops on the cheapest route, if one exists.
    pub cheapest_route: Option<Vec<String>>,
    /// Price of the cheapest route.
    pub cheapest_price: Option<f64>,
}

impl SessionRecord {
    /// Summarise `result` for the query from `start` to `end`.
    pub fn from_result(
        network: &NetworkSnapshot,
        start: LocationId,
        end: LocationId,
        result: &RouteQueryResult,
        recorded_at: u64,
    ) -> Self {
        let summary = |metric| {
            result.outcome(metric).route().map(|route| {
                let names = route
                    .stops
                    .iter()
                    .map(|id| {
                        network
                            .location(*id)
                            .map_or_else(|| id.to_string(), |location| location.name.clone())
                    })
                    .collect::<Vec<_>>();
                (names, route.total)
            })
        };
        let (shortest_route, shortest_distance_km) = summary(Metric::Distance).unzip();
        let (cheapest_route, cheapest_price) = summary(Metric::Cost).unzip();
        Self {
            recorded_at,
            start,
            end,
            shortest_route,
            shortest_distance_km,
            cheapest_route,
            cheapest_price,
        }
    }
}

/// Seconds since the Unix epoch, or zero if the clock reads earlier.
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

/// A session log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLog {
    path: Utf8PathBuf,
}

impl SessionLog {
    /// Log stored at `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File the log is stored in.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Read every entry currently in the log.
    ///
    /// A missing or blank file is an empty log.
    pub fn entries(&self) -> Result<Vec<Value>, CliError> {
        let contents = match farewise_fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(CliError::ReadSessionLog {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&contents).map_err(|source| CliError::ParseSessionLog {
            path: self.path.clone(),
            source,
        })
    }

    /// Append `record`, rewriting the file with the extended array.
    pub fn append(&self, record: &SessionRecord) -> Result<(), CliError> {
        let mut entries = self.entries()?;
        entries.push(serde_json::to_value(record).map_err(CliError::SerialiseOutput)?);
        let payload = serde_json::to_vec_pretty(&entries).map_err(CliError::SerialiseOutput)?;
        farewise_fs::write_file(&self.path, &payload).map_err(|source| {
            CliError::WriteSessionLog {
                path: self.path.clone(),
                source,
            }
        })?;
        log::info!(
            "appended session record {} to {}",
            entries.len(),
            self.path
        );
        Ok(())
    }
}
