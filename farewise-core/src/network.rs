//! Locations, relations and the in-memory network snapshot handed to the
//! routing core.
//!
//! The core never validates these values itself. Loaders call
//! [`NetworkSnapshot::validate`] once, before any query runs.

use std::collections::HashSet;

use thiserror::Error;

/// Identifier of a [`Location`].
pub type LocationId = u32;
/// Identifier of a [`Relation`].
pub type RelationId = u32;
/// Identifier of the carrier operating a [`Relation`].
pub type CarrierId = u32;

/// Longest accepted location name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Longest accepted relation distance in kilometres (Earth's circumference).
pub const MAX_DISTANCE_KM: u32 = 40_075;

/// A place a route can depart from or arrive at.
///
/// Identity is the `id`; the name is for display only.
///
/// # Examples
/// ```
/// use farewise_core::Location;
///
/// let hub = Location::new(101, "Madrid");
/// assert_eq!(hub.id, 101);
/// assert_eq!(hub.name, "Madrid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Unique identifier.
    pub id: LocationId,
    /// Display name.
    pub name: String,
}

impl Location {
    /// Construct a location.
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A directed, weighted edge between two locations.
///
/// Several relations may connect the same ordered pair, e.g. one per carrier.
///
/// # Examples
/// ```
/// use farewise_core::Relation;
///
/// let hop = Relation::new(1001, 101, 102, 201, 620, 89.5);
/// assert_eq!(hop.source_id, 101);
/// assert_eq!(hop.destination_id, 102);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relation {
    /// Unique identifier.
    pub id: RelationId,
    /// Departure location.
    pub source_id: LocationId,
    /// Arrival location.
    pub destination_id: LocationId,
    /// Operating carrier. Not used for routing.
    pub carrier_id: CarrierId,
    /// Distance covered, in kilometres.
    pub distance_km: u32,
    /// Ticket price.
    pub price: f64,
}

impl Relation {
    /// Construct a relation.
    pub const fn new(
        id: RelationId,
        source_id: LocationId,
        destination_id: LocationId,
        carrier_id: CarrierId,
        distance_km: u32,
        price: f64,
    ) -> Self {
        Self {
            id,
            source_id,
            destination_id,
            carrier_id,
            distance_km,
            price,
        }
    }

    /// Return `true` when this relation departs `from` and arrives at `to`.
    pub const fn connects(&self, from: LocationId, to: LocationId) -> bool {
        self.source_id == from && self.destination_id == to
    }
}

/// Fully materialised network data for one query.
///
/// The order of `locations` assigns each location its matrix index for the
/// duration of a query.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkSnapshot {
    /// Locations in index order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub locations: Vec<Location>,
    /// Every known relation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub relations: Vec<Relation>,
}

/// Reasons a [`NetworkSnapshot`] fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkValidationError {
    /// A location used the reserved identifier zero.
    #[error("location identifiers must be positive")]
    ZeroLocationId,
    /// A location name was empty or only whitespace.
    #[error("location {id} has an empty name")]
    EmptyName {
        /// Offending location.
        id: LocationId,
    },
    /// A location name exceeded [`MAX_NAME_LEN`].
    #[error("location {id} has a name longer than 255 characters")]
    NameTooLong {
        /// Offending location.
        id: LocationId,
    },
    /// Two locations shared an identifier.
    #[error("location {id} appears more than once")]
    DuplicateLocation {
        /// Repeated identifier.
        id: LocationId,
    },
    /// A relation distance fell outside `1..=MAX_DISTANCE_KM`.
    #[error("relation {id} has distance {distance_km} km outside 1..=40075")]
    DistanceOutOfRange {
        /// Offending relation.
        id: RelationId,
        /// Supplied distance.
        distance_km: u32,
    },
    /// A relation price was not a positive finite number.
    #[error("relation {id} has price {price}, expected a positive finite value")]
    InvalidPrice {
        /// Offending relation.
        id: RelationId,
        /// Supplied price.
        price: f64,
    },
    /// A relation referenced a location missing from the snapshot.
    #[error("relation {id} references unknown location {location_id}")]
    UnknownEndpoint {
        /// Offending relation.
        id: RelationId,
        /// Identifier that could not be found.
        location_id: LocationId,
    },
}

impl NetworkSnapshot {
    /// Construct a snapshot from locations and relations.
    pub const fn new(locations: Vec<Location>, relations: Vec<Relation>) -> Self {
        Self {
            locations,
            relations,
        }
    }

    /// Find a location by identifier.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    /// Check the snapshot against the entity constraints the routing core
    /// relies on.
    ///
    /// Returns the first violation found, checking locations before
    /// relations.
    ///
    /// # Examples
    /// ```
    /// use farewise_core::{Location, NetworkSnapshot, NetworkValidationError};
    ///
    /// let snapshot = NetworkSnapshot::new(
    ///     vec![Location::new(101, "Lisbon"), Location::new(101, "Porto")],
    ///     Vec::new(),
    /// );
    /// assert_eq!(
    ///     snapshot.validate(),
    ///     Err(NetworkValidationError::DuplicateLocation { id: 101 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), NetworkValidationError> {
        let mut seen = HashSet::with_capacity(self.locations.len());
        for location in &self.locations {
            validate_location(location)?;
            if !seen.insert(location.id) {
                return Err(NetworkValidationError::DuplicateLocation { id: location.id });
            }
        }
        for relation in &self.relations {
            validate_relation(relation, &seen)?;
        }
        Ok(())
    }
}

fn validate_location(location: &Location) -> Result<(), NetworkValidationError> {
    if location.id == 0 {
        return Err(NetworkValidationError::ZeroLocationId);
    }
    if location.name.trim().is_empty() {
        return Err(NetworkValidationError::EmptyName { id: location.id });
    }
    if location.name.chars().count() > MAX_NAME_LEN {
        return Err(NetworkValidationError::NameTooLong { id: location.id });
    }
    Ok(())
}

fn validate_relation(
    relation: &Relation,
    known: &HashSet<LocationId>,
) -> Result<(), NetworkValidationError> {
    if !(1..=MAX_DISTANCE_KM).contains(&relation.distance_km) {
        return Err(NetworkValidationError::DistanceOutOfRange {
            id: relation.id,
            distance_km: relation.distance_km,
        });
    }
    if !relation.price.is_finite() || relation.price <= 0.0 {
        return Err(NetworkValidationError::InvalidPrice {
            id: relation.id,
            price: relation.price,
        });
    }
    for location_id in [relation.source_id, relation.destination_id] {
        if !known.contains(&location_id) {
            return Err(NetworkValidationError::UnknownEndpoint {
                id: relation.id,
                location_id,
            });
        }
    }
    Ok(())
}
