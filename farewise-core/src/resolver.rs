//! Map witness paths back onto concrete relations.
//!
//! A witness path only names location indices. [`resolve_path`] picks, for
//! every hop, the relation between that pair which is cheapest under the
//! metric the path was solved for.
//!
//! Callers must pass the same locations and relations that built the solved
//! matrix. A hop without a matching relation means that snapshot changed in
//! between, and is reported as a [`ResolutionError`] instead of a truncated
//! route.

use thiserror::Error;

use crate::{Location, LocationId, Metric, Relation};

/// Errors returned by [`resolve_path`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// No relation connects two consecutive path locations.
    #[error("no {metric} relation from location {from} to location {to}")]
    MissingRelation {
        /// Departure location of the hop.
        from: LocationId,
        /// Arrival location of the hop.
        to: LocationId,
        /// Metric the path was solved for.
        metric: Metric,
    },
    /// A path index does not name a supplied location.
    #[error("path index {index} is out of range for {len} locations")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of supplied locations.
        len: usize,
    },
}

/// Resolve every hop of `path` to the cheapest relation under `metric`.
///
/// Paths with fewer than two locations resolve to an empty list. When several
/// relations tie for a hop, the first in `relations` order is returned.
///
/// # Examples
/// ```
/// use farewise_core::{Location, Metric, Relation, resolve_path};
///
/// # fn main() -> Result<(), farewise_core::ResolutionError> {
/// let locations = vec![Location::new(101, "Rome"), Location::new(102, "Milan")];
/// let relations = vec![
///     Relation::new(1001, 101, 102, 201, 480, 60.0),
///     Relation::new(1002, 101, 102, 202, 510, 45.0),
/// ];
/// let hops = resolve_path(&[0, 1], &locations, &relations, Metric::Cost)?;
/// assert_eq!(hops.len(), 1);
/// assert_eq!(hops[0].id, 1002);
/// # Ok(())
/// # }
/// ```
pub fn resolve_path(
    path: &[usize],
    locations: &[Location],
    relations: &[Relation],
    metric: Metric,
) -> Result<Vec<Relation>, ResolutionError> {
    let ids = path
        .iter()
        .map(|&index| location_id(locations, index))
        .collect::<Result<Vec<_>, _>>()?;
    ids.windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Some((*from, *to)),
            _ => None,
        })
        .map(|(from, to)| {
            cheapest_relation(relations, from, to, metric)
                .cloned()
                .ok_or(ResolutionError::MissingRelation { from, to, metric })
        })
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| log::warn!("failed to resolve {metric} path {path:?}: {err}"))
}

fn location_id(locations: &[Location], index: usize) -> Result<LocationId, ResolutionError> {
    locations
        .get(index)
        .map(|location| location.id)
        .ok_or(ResolutionError::IndexOutOfRange {
            index,
            len: locations.len(),
        })
}

fn cheapest_relation(
    relations: &[Relation],
    from: LocationId,
    to: LocationId,
    metric: Metric,
) -> Option<&Relation> {
    relations
        .iter()
        .filter(|relation| relation.connects(from, to))
        .min_by(|lhs, rhs| metric.weight(lhs).total_cmp(&metric.weight(rhs)))
}
