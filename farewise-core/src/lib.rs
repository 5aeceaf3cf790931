//! Core routing engine for Farewise.
//!
//! Given a set of locations joined by directed, possibly parallel relations,
//! the engine finds the shortest and the cheapest route between two
//! locations and names the concrete relations that realise each of them.
//!
//! A query flows through four stages, once per [`Metric`]:
//!
//! 1. [`build_weight_matrix`] collapses parallel relations into a dense
//!    [`WeightMatrix`].
//! 2. [`solve`] runs Floyd-Warshall and keeps a next-hop table for witness
//!    paths.
//! 3. [`resolve_path`] maps a witness path back onto relations.
//! 4. [`RouteQueryService`] validates the query and assembles a
//!    [`RouteQueryResult`].
//!
//! Everything is synchronous and pure over its inputs; no state survives a
//! query.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod matrix;
mod metric;
mod network;
mod query;
mod report;
mod resolver;
mod solver;
mod store;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use matrix::{UNREACHABLE, WeightMatrix, WeightMatrixError, build_weight_matrix};
pub use metric::Metric;
pub use network::{
    CarrierId, Location, LocationId, MAX_DISTANCE_KM, MAX_NAME_LEN, NetworkSnapshot,
    NetworkValidationError, Relation, RelationId,
};
pub use query::{
    NoPathReason, OptimalRoute, RouteOutcome, RouteQueryResult, RouteQueryService,
};
pub use report::{PairRoute, all_pairs_report};
pub use resolver::{ResolutionError, resolve_path};
pub use solver::{PathTable, ShortestPaths, solve};
pub use store::NetworkStore;
