//! All-pairs route reports.
//!
//! Lists the optimal route between every ordered pair of distinct locations
//! under one metric, for callers that print a full network overview rather
//! than answer a single query.

use crate::{
    Location, LocationId, Metric, Relation, ResolutionError, build_weight_matrix, resolve_path,
    solve,
};

/// Optimal route between one ordered pair of locations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PairRoute {
    /// Departure location.
    pub from: LocationId,
    /// Arrival location.
    pub to: LocationId,
    /// Location identifiers visited, both ends included.
    pub stops: Vec<LocationId>,
    /// Relations travelled, in order.
    pub relations: Vec<Relation>,
    /// Total weight under the report's metric, summed over `relations` in
    /// travel order.
    pub total: f64,
}

/// Build the optimal route for every reachable ordered pair `from != to`.
///
/// Pairs are listed by ascending departure index, then arrival index.
/// Unreachable pairs are omitted.
///
/// # Examples
/// ```
/// use farewise_core::{Location, Metric, Relation, all_pairs_report};
///
/// # fn main() -> Result<(), farewise_core::ResolutionError> {
/// let locations = vec![Location::new(101, "Cairo"), Location::new(102, "Luxor")];
/// let relations = vec![Relation::new(1001, 101, 102, 201, 500, 80.0)];
/// let report = all_pairs_report(&locations, &relations, Metric::Distance)?;
/// assert_eq!(report.len(), 1);
/// assert_eq!(report[0].stops, vec![101, 102]);
/// # Ok(())
/// # }
/// ```
pub fn all_pairs_report(
    locations: &[Location],
    relations: &[Relation],
    metric: Metric,
) -> Result<Vec<PairRoute>, ResolutionError> {
    let paths = solve(build_weight_matrix(locations, relations, metric));
    let table = paths.path_table();
    let mut report = Vec::new();
    for (from, source) in locations.iter().enumerate() {
        for (to, destination) in locations.iter().enumerate() {
            if from == to || paths.distance(from, to).is_none() {
                continue;
            }
            let Some(path) = table.get(from, to) else {
                continue;
            };
            let hops = resolve_path(path, locations, relations, metric)?;
            let total = metric.route_weight(&hops);
            let stops = path
                .iter()
                .filter_map(|&index| locations.get(index).map(|location| location.id))
                .collect();
            report.push(PairRoute {
                from: source.id,
                to: destination.id,
                stops,
                relations: hops,
                total,
            });
        }
    }
    log::debug!(
        "{metric} report covers {} reachable pairs across {} locations",
        report.len(),
        locations.len()
    );
    Ok(report)
}
