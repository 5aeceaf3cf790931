//! Weight bases a route can be optimised for.
//!
//! # Examples
//! ```
//! use farewise_core::{Metric, Relation};
//!
//! let hop = Relation::new(1001, 101, 102, 201, 620, 89.5);
//! assert_eq!(Metric::Distance.weight(&hop), 620.0);
//! assert_eq!(Metric::Cost.weight(&hop), 89.5);
//! assert_eq!(Metric::Cost.to_string(), "cost");
//! ```

use crate::Relation;

/// Selects which weight of a [`Relation`] a graph pass minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Metric {
    /// Cumulative distance in kilometres.
    #[cfg_attr(feature = "serde", serde(alias = "km"))]
    Distance,
    /// Cumulative ticket price.
    #[cfg_attr(feature = "serde", serde(alias = "price"))]
    Cost,
}

impl Metric {
    /// Every metric, in the order queries report them.
    pub const ALL: [Self; 2] = [Self::Distance, Self::Cost];

    /// Return the weight of `relation` under this metric.
    pub fn weight(self, relation: &Relation) -> f64 {
        match self {
            Self::Distance => f64::from(relation.distance_km),
            Self::Cost => relation.price,
        }
    }

    /// Total weight of `relations` under this metric, summed left to right
    /// in travel order.
    ///
    /// Reported route totals use this sum rather than the solved matrix cell,
    /// whose additions may be grouped differently along the path.
    pub fn route_weight(self, relations: &[Relation]) -> f64 {
        relations.iter().map(|relation| self.weight(relation)).sum()
    }

    /// Return the metric as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Cost => "cost",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distance" | "km" => Ok(Self::Distance),
            "cost" | "price" => Ok(Self::Cost),
            _ => Err(format!("unknown metric '{s}'")),
        }
    }
}
