//! Optimal route queries across every [`Metric`].
//!
//! [`RouteQueryService`] validates a query, then builds, solves and resolves
//! one graph per metric. Expected failures such as an unreachable destination
//! come back as [`RouteOutcome::NoPath`]; only a [`ResolutionError`], which
//! signals an inconsistent snapshot, is returned as `Err`.

use std::fmt;

use crate::{
    Location, LocationId, Metric, NetworkSnapshot, Relation, ResolutionError, build_weight_matrix,
    resolve_path, solve,
};

/// Why a metric produced no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum NoPathReason {
    /// Start and end were the same location.
    SelfLoop,
    /// Start or end was missing from the supplied locations.
    UnknownLocation,
    /// No relations were supplied at all.
    NoRelationData,
    /// The destination cannot be reached from the start under this metric.
    Unreachable,
}

impl NoPathReason {
    /// Human-readable diagnostic for the reason.
    pub const fn message(self) -> &'static str {
        match self {
            Self::SelfLoop => "self-loop query not supported",
            Self::UnknownLocation => "location not in supplied set",
            Self::NoRelationData => "no relation data available",
            Self::Unreachable => "destination unreachable from start",
        }
    }
}

impl fmt::Display for NoPathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The optimal route under one metric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptimalRoute {
    /// Metric the route minimises.
    pub metric: Metric,
    /// Location identifiers visited, start and end included.
    pub stops: Vec<LocationId>,
    /// Relations travelled, in order.
    pub relations: Vec<Relation>,
    /// Total weight of the route under `metric`: the in-order sum of the
    /// weights of `relations`.
    pub total: f64,
}

/// Result of one metric's pass.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// An optimal route exists.
    Found(OptimalRoute),
    /// No route could be produced.
    NoPath {
        /// Why no route was produced.
        reason: NoPathReason,
    },
}

impl RouteOutcome {
    /// The route, when one was found.
    pub const fn route(&self) -> Option<&OptimalRoute> {
        match self {
            Self::Found(route) => Some(route),
            Self::NoPath { .. } => None,
        }
    }

    /// The reason no route was found, if any.
    pub const fn no_path_reason(&self) -> Option<NoPathReason> {
        match self {
            Self::Found(_) => None,
            Self::NoPath { reason } => Some(*reason),
        }
    }

    /// Diagnostic text for the no-path case.
    pub const fn diagnostic(&self) -> Option<&'static str> {
        match self {
            Self::Found(_) => None,
            Self::NoPath { reason } => Some(reason.message()),
        }
    }
}

/// Independent outcomes of a query for each metric.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteQueryResult {
    /// Outcome of the shortest-distance pass.
    pub distance: RouteOutcome,
    /// Outcome of the cheapest-price pass.
    pub cost: RouteOutcome,
}

impl RouteQueryResult {
    /// A result reporting `reason` for every metric.
    pub const fn no_path(reason: NoPathReason) -> Self {
        Self {
            distance: RouteOutcome::NoPath { reason },
            cost: RouteOutcome::NoPath { reason },
        }
    }

    /// Outcome for `metric`.
    pub const fn outcome(&self, metric: Metric) -> &RouteOutcome {
        match metric {
            Metric::Distance => &self.distance,
            Metric::Cost => &self.cost,
        }
    }
}

/// Stateless entry point for optimal route queries.
///
/// Each call works on its own copies of the matrices it builds, so one
/// service value can be shared freely between threads.
///
/// # Examples
/// ```
/// use farewise_core::{Location, Relation, RouteQueryService};
///
/// # fn main() -> Result<(), farewise_core::ResolutionError> {
/// let locations = vec![
///     Location::new(101, "Paris"),
///     Location::new(102, "Lyon"),
///     Location::new(103, "Nice"),
/// ];
/// let relations = vec![
///     Relation::new(1001, 101, 102, 201, 390, 70.0),
///     Relation::new(1002, 102, 103, 201, 300, 55.0),
///     Relation::new(1003, 101, 103, 202, 700, 90.0),
/// ];
/// let result = RouteQueryService::new().find_optimal_routes(
///     &locations[0],
///     &locations[2],
///     &locations,
///     &relations,
/// )?;
/// let shortest = result.distance.route().map(|route| route.stops.clone());
/// let cheapest = result.cost.route().map(|route| route.stops.clone());
/// assert_eq!(shortest, Some(vec![101, 102, 103]));
/// assert_eq!(cheapest, Some(vec![101, 103]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteQueryService;

impl RouteQueryService {
    /// Construct the service.
    pub const fn new() -> Self {
        Self
    }

    /// Find the shortest and the cheapest route from `start` to `end`.
    ///
    /// Locations are matched by identifier. The position of each location in
    /// `locations` is its matrix index for this call only.
    pub fn find_optimal_routes(
        &self,
        start: &Location,
        end: &Location,
        locations: &[Location],
        relations: &[Relation],
    ) -> Result<RouteQueryResult, ResolutionError> {
        if start.id == end.id {
            return Ok(RouteQueryResult::no_path(NoPathReason::SelfLoop));
        }
        let (Some(from), Some(to)) = (
            position_of(locations, start.id),
            position_of(locations, end.id),
        ) else {
            return Ok(RouteQueryResult::no_path(NoPathReason::UnknownLocation));
        };
        if relations.is_empty() {
            return Ok(RouteQueryResult::no_path(NoPathReason::NoRelationData));
        }
        Ok(RouteQueryResult {
            distance: optimal_route(from, to, locations, relations, Metric::Distance)?,
            cost: optimal_route(from, to, locations, relations, Metric::Cost)?,
        })
    }

    /// Find routes between two location identifiers of `network`.
    pub fn find_routes_between(
        &self,
        network: &NetworkSnapshot,
        start_id: LocationId,
        end_id: LocationId,
    ) -> Result<RouteQueryResult, ResolutionError> {
        if start_id == end_id {
            return Ok(RouteQueryResult::no_path(NoPathReason::SelfLoop));
        }
        let (Some(start), Some(end)) = (network.location(start_id), network.location(end_id))
        else {
            return Ok(RouteQueryResult::no_path(NoPathReason::UnknownLocation));
        };
        self.find_optimal_routes(start, end, &network.locations, &network.relations)
    }
}

fn position_of(locations: &[Location], id: LocationId) -> Option<usize> {
    locations.iter().position(|location| location.id == id)
}

fn optimal_route(
    from: usize,
    to: usize,
    locations: &[Location],
    relations: &[Relation],
    metric: Metric,
) -> Result<RouteOutcome, ResolutionError> {
    let paths = solve(build_weight_matrix(locations, relations, metric));
    if paths.distance(from, to).is_none() {
        log::debug!("{metric} pass found no path from index {from} to {to}");
        return Ok(RouteOutcome::NoPath {
            reason: NoPathReason::Unreachable,
        });
    }
    let path = paths.path(from, to);
    let hops = resolve_path(&path, locations, relations, metric)?;
    let total = metric.route_weight(&hops);
    let stops = path
        .iter()
        .filter_map(|&index| locations.get(index).map(|location| location.id))
        .collect();
    log::debug!(
        "{metric} pass found {} hop route from index {from} to {to} totalling {total}",
        hops.len()
    );
    Ok(RouteOutcome::Found(OptimalRoute {
        metric,
        stops,
        relations: hops,
        total,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{five_location_network, location_id};
    use rstest::{fixture, rstest};

    #[fixture]
    fn network() -> NetworkSnapshot {
        five_location_network()
    }

    fn query(network: &NetworkSnapshot, from: char, to: char) -> RouteQueryResult {
        RouteQueryService::new()
            .find_routes_between(network, location_id(from), location_id(to))
            .expect("consistent snapshot")
    }

    fn stops(outcome: &RouteOutcome) -> Vec<LocationId> {
        outcome
            .route()
            .map(|route| route.stops.clone())
            .unwrap_or_default()
    }

    #[rstest]
    fn shortest_and_cheapest_routes_can_differ(network: NetworkSnapshot) {
        let result = query(&network, 'A', 'C');
        let distance = result.distance.route().expect("distance route");
        let cost = result.cost.route().expect("cost route");
        assert_eq!(
            distance.stops,
            vec![location_id('A'), location_id('B'), location_id('C')]
        );
        assert_eq!(distance.total, 5.0);
        assert_eq!(
            cost.stops,
            vec![location_id('A'), location_id('D'), location_id('C')]
        );
        assert_eq!(cost.total, 90.0);
    }

    #[rstest]
    fn resolved_relations_sum_to_total(network: NetworkSnapshot) {
        let result = query(&network, 'E', 'B');
        for metric in Metric::ALL {
            let route = result.outcome(metric).route().expect("route");
            let sum: f64 = route
                .relations
                .iter()
                .map(|relation| metric.weight(relation))
                .sum();
            assert_eq!(sum, route.total, "{metric}");
            assert_eq!(route.relations.len() + 1, route.stops.len());
        }
    }

    #[rstest]
    fn fractional_prices_total_their_relations() {
        // Index order makes Floyd-Warshall settle B -> D before A -> D.
        let locations = vec![
            Location::new(101, "A"),
            Location::new(103, "C"),
            Location::new(102, "B"),
            Location::new(104, "D"),
        ];
        let relations = vec![
            Relation::new(1, 101, 102, 201, 100, 0.1),
            Relation::new(2, 102, 103, 201, 100, 0.2),
            Relation::new(3, 103, 104, 201, 100, 0.3),
        ];
        let result = RouteQueryService::new()
            .find_optimal_routes(&locations[0], &locations[3], &locations, &relations)
            .expect("consistent snapshot");
        let route = result.cost.route().expect("cost route");
        assert_eq!(route.stops, vec![101, 102, 103, 104]);
        let sum: f64 = route.relations.iter().map(|hop| hop.price).sum();
        assert_eq!(route.total, sum);
        assert_eq!(route.total, 0.600_000_000_000_000_1);
    }

    #[rstest]
    fn self_loop_is_a_soft_failure(network: NetworkSnapshot) {
        let result = query(&network, 'B', 'B');
        assert_eq!(result, RouteQueryResult::no_path(NoPathReason::SelfLoop));
        assert_eq!(
            result.distance.diagnostic(),
            Some("self-loop query not supported")
        );
    }

    #[rstest]
    fn unknown_location_is_a_soft_failure(network: NetworkSnapshot) {
        let stranger = Location::new(999, "Atlantis");
        let start = network.locations.first().cloned().expect("location");
        let result = RouteQueryService::new()
            .find_optimal_routes(&start, &stranger, &network.locations, &network.relations)
            .expect("soft failure");
        assert_eq!(
            result,
            RouteQueryResult::no_path(NoPathReason::UnknownLocation)
        );
    }

    #[rstest]
    fn empty_relations_report_missing_data(network: NetworkSnapshot) {
        let start = network.locations.first().cloned().expect("location");
        let end = network.locations.last().cloned().expect("location");
        let result = RouteQueryService::new()
            .find_optimal_routes(&start, &end, &network.locations, &[])
            .expect("soft failure");
        for metric in Metric::ALL {
            let outcome = result.outcome(metric);
            assert_eq!(outcome.no_path_reason(), Some(NoPathReason::NoRelationData));
            assert!(outcome.diagnostic().is_some_and(|text| !text.is_empty()));
        }
    }

    #[rstest]
    fn metrics_fail_independently() {
        let locations = vec![
            Location::new(101, "North"),
            Location::new(102, "South"),
            Location::new(103, "East"),
        ];
        let relations = vec![Relation::new(1, 101, 102, 201, 100, 10.0)];
        let result = RouteQueryService::new()
            .find_optimal_routes(&locations[0], &locations[2], &locations, &relations)
            .expect("consistent snapshot");
        assert_eq!(
            result,
            RouteQueryResult::no_path(NoPathReason::Unreachable)
        );
        let reverse = RouteQueryService::new()
            .find_optimal_routes(&locations[0], &locations[1], &locations, &relations)
            .expect("consistent snapshot");
        assert_eq!(stops(&reverse.distance), vec![101, 102]);
        assert_eq!(stops(&reverse.cost), vec![101, 102]);
    }

    #[rstest]
    fn no_path_reason_messages_are_distinct() {
        let reasons = [
            NoPathReason::SelfLoop,
            NoPathReason::UnknownLocation,
            NoPathReason::NoRelationData,
            NoPathReason::Unreachable,
        ];
        let messages: std::collections::HashSet<_> =
            reasons.iter().map(|reason| reason.to_string()).collect();
        assert_eq!(messages.len(), reasons.len());
    }
}
