//! Facade crate for the Farewise routing engine.
//!
//! This crate re-exports the routing core: domain types, the weight matrix
//! builder, the Floyd-Warshall solver, relation resolution and the route
//! query service. Serde support for the domain types sits behind the
//! default `serde` feature. In-memory fixtures for tests are re-exported as
//! `test_support` when the `test-support` feature is enabled.
//!
//! ```
//! use farewise_engine::{Location, NetworkSnapshot, Relation, RouteQueryService};
//!
//! let network = NetworkSnapshot::new(
//!     vec![Location::new(101, "Oslo"), Location::new(102, "Bergen")],
//!     vec![Relation::new(1, 101, 102, 7, 305, 59.0)],
//! );
//! let result = RouteQueryService::new()
//!     .find_routes_between(&network, 101, 102)
//!     .expect("direct relation resolves");
//! assert!(result.distance.route().is_some());
//! ```

#![forbid(unsafe_code)]

pub use farewise_core::{
    CarrierId, Location, LocationId, MAX_DISTANCE_KM, MAX_NAME_LEN, Metric, NetworkSnapshot,
    NetworkStore, NetworkValidationError, NoPathReason, OptimalRoute, PairRoute, PathTable,
    Relation, RelationId, ResolutionError, RouteOutcome, RouteQueryResult, RouteQueryService,
    ShortestPaths, UNREACHABLE, WeightMatrix, WeightMatrixError, all_pairs_report,
    build_weight_matrix, resolve_path, solve,
};

#[cfg(feature = "test-support")]
pub use farewise_core::test_support;
