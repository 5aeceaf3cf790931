//! In-memory fixtures shared by unit, behaviour and property tests.
//!
//! Compiled for this crate's own tests and, for other crates, behind the
//! `test-support` feature.
//!
//! The five-location network mirrors the textbook Floyd-Warshall example:
//!
//! ```text
//!     A   B   C   D   E
//! A   0   4   .   5   .
//! B   .   0   1   .   6
//! C   2   .   0   3   .
//! D   .   .   1   0   2
//! E   1   .   .   4   0
//! ```
//!
//! Prices are chosen so the cheapest route from A to C (via D) differs from
//! the shortest (via B).

use std::convert::Infallible;

use crate::{Location, LocationId, NetworkSnapshot, NetworkStore, Relation, WeightMatrix};

/// Identifier of the first fixture location (`A`).
pub const FIRST_LOCATION_ID: LocationId = 101;

/// `NetworkStore` returning a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryNetworkStore {
    snapshot: NetworkSnapshot,
}

impl MemoryNetworkStore {
    /// Create a store serving `snapshot`.
    pub const fn new(snapshot: NetworkSnapshot) -> Self {
        Self { snapshot }
    }
}

impl NetworkStore for MemoryNetworkStore {
    type Error = Infallible;

    fn load_network(&self) -> Result<NetworkSnapshot, Self::Error> {
        Ok(self.snapshot.clone())
    }
}

/// Identifier of the fixture location labelled `label` (`'A'` is 101).
pub fn location_id(label: char) -> LocationId {
    FIRST_LOCATION_ID + u32::from(label).saturating_sub(u32::from('A'))
}

/// Locations `A` to `E` in index order.
pub fn five_locations() -> Vec<Location> {
    ['A', 'B', 'C', 'D', 'E']
        .into_iter()
        .map(|label| Location::new(location_id(label), label.to_string()))
        .collect()
}

/// The five-location network with one relation per edge of the example, plus
/// a longer but cheaper second carrier from `A` to `B`.
pub fn five_location_network() -> NetworkSnapshot {
    let edges = [
        ('A', 'B', 4, 70.0),
        ('A', 'D', 5, 40.0),
        ('B', 'C', 1, 30.0),
        ('B', 'E', 6, 20.0),
        ('C', 'A', 2, 35.0),
        ('C', 'D', 3, 45.0),
        ('D', 'C', 1, 50.0),
        ('D', 'E', 2, 25.0),
        ('E', 'A', 1, 60.0),
        ('E', 'D', 4, 15.0),
    ];
    let mut relations: Vec<Relation> = edges
        .into_iter()
        .zip(1001..)
        .map(|((from, to, distance_km, price), id)| {
            Relation::new(id, location_id(from), location_id(to), 201, distance_km, price)
        })
        .collect();
    relations.push(Relation::new(
        1011,
        location_id('A'),
        location_id('B'),
        202,
        9,
        65.0,
    ));
    NetworkSnapshot::new(five_locations(), relations)
}

/// Direct distance matrix of the five-location example.
pub fn five_location_matrix() -> WeightMatrix {
    let edges = [
        (0, 1, 4.0),
        (0, 3, 5.0),
        (1, 2, 1.0),
        (1, 4, 6.0),
        (2, 0, 2.0),
        (2, 3, 3.0),
        (3, 2, 1.0),
        (3, 4, 2.0),
        (4, 0, 1.0),
        (4, 3, 4.0),
    ];
    let mut matrix = WeightMatrix::disconnected(5);
    for (from, to, weight) in edges {
        matrix.set(from, to, weight);
    }
    matrix
}
