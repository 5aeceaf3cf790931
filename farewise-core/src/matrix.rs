//! Dense weight matrices over the locations of one query.
//!
//! [`build_weight_matrix`] collapses every relation between an ordered pair
//! of locations into the cheapest weight under a [`Metric`]. Pairs without a
//! relation hold [`UNREACHABLE`].

use std::collections::HashMap;

use thiserror::Error;

use crate::{Location, LocationId, Metric, Relation};

/// Weight of a pair with no known path.
///
/// Adding any finite weight leaves it unchanged and it compares greater than
/// every finite weight.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Square matrix of weights indexed by location position.
///
/// The diagonal is always zero. Off-diagonal cells hold a non-negative
/// weight or [`UNREACHABLE`].
///
/// # Examples
/// ```
/// use farewise_core::{UNREACHABLE, WeightMatrix};
///
/// # fn main() -> Result<(), farewise_core::WeightMatrixError> {
/// let matrix = WeightMatrix::from_rows(vec![
///     vec![0.0, 4.0],
///     vec![UNREACHABLE, 0.0],
/// ])?;
/// assert_eq!(matrix.get(0, 1), Some(4.0));
/// assert!(!matrix.is_reachable(1, 0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    size: usize,
    cells: Vec<f64>,
}

/// Errors returned by [`WeightMatrix::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightMatrixError {
    /// A row length differed from the number of rows.
    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Cells found in that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },
    /// A diagonal cell was not zero.
    #[error("diagonal cell {index} must be zero")]
    NonZeroDiagonal {
        /// Row and column of the cell.
        index: usize,
    },
    /// A cell held a negative or NaN weight.
    #[error("cell ({row}, {column}) must be a non-negative weight")]
    InvalidWeight {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        column: usize,
    },
}

impl WeightMatrix {
    /// Construct a fully disconnected `size x size` matrix.
    pub fn disconnected(size: usize) -> Self {
        let mut cells = vec![UNREACHABLE; size * size];
        for index in 0..size {
            if let Some(cell) = cells.get_mut(index * size + index) {
                *cell = 0.0;
            }
        }
        Self { size, cells }
    }

    /// Construct a matrix from explicit rows.
    ///
    /// Use [`UNREACHABLE`] for pairs without a direct relation.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, WeightMatrixError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(WeightMatrixError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (column, weight) in values.into_iter().enumerate() {
                if weight.is_nan() || weight < 0.0 {
                    return Err(WeightMatrixError::InvalidWeight { row, column });
                }
                if row == column && weight != 0.0 {
                    return Err(WeightMatrixError::NonZeroDiagonal { index: row });
                }
                cells.push(weight);
            }
        }
        Ok(Self { size, cells })
    }

    /// Number of locations covered by the matrix.
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Return `true` for the zero-location matrix.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Weight from `from` to `to`, or `None` when either index is out of range.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.offset(from, to)
            .and_then(|offset| self.cells.get(offset))
            .copied()
    }

    /// Return `true` when `to` has a finite weight from `from`.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_some_and(f64::is_finite)
    }

    /// Iterate over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // `chunks` rejects a zero chunk size; an empty matrix has no rows anyway.
        self.cells.chunks(self.size.max(1))
    }

    pub(crate) fn set(&mut self, from: usize, to: usize, weight: f64) {
        if let Some(cell) = self
            .offset(from, to)
            .and_then(|offset| self.cells.get_mut(offset))
        {
            *cell = weight;
        }
    }

    const fn offset(&self, from: usize, to: usize) -> Option<usize> {
        if from < self.size && to < self.size {
            Some(from * self.size + to)
        } else {
            None
        }
    }
}

/// Build the direct-weight matrix for `locations` under `metric`.
///
/// Cell `(i, j)` holds the minimum weight over every relation from
/// `locations[i]` to `locations[j]`. Relations touching locations outside the
/// list are ignored.
///
/// # Examples
/// ```
/// use farewise_core::{Location, Metric, Relation, build_weight_matrix};
///
/// let locations = vec![Location::new(101, "Oslo"), Location::new(102, "Bergen")];
/// let relations = vec![
///     Relation::new(1001, 101, 102, 201, 305, 120.0),
///     Relation::new(1002, 101, 102, 202, 310, 80.0),
/// ];
/// let matrix = build_weight_matrix(&locations, &relations, Metric::Cost);
/// assert_eq!(matrix.get(0, 1), Some(80.0));
/// assert!(!matrix.is_reachable(1, 0));
/// ```
pub fn build_weight_matrix(
    locations: &[Location],
    relations: &[Relation],
    metric: Metric,
) -> WeightMatrix {
    let cheapest = cheapest_direct_weights(relations, metric);
    let mut matrix = WeightMatrix::disconnected(locations.len());
    for (from, source) in locations.iter().enumerate() {
        for (to, destination) in locations.iter().enumerate() {
            if from == to {
                continue;
            }
            if let Some(weight) = cheapest.get(&(source.id, destination.id)) {
                matrix.set(from, to, *weight);
            }
        }
    }
    log::trace!(
        "built {metric} matrix for {} locations from {} relations",
        locations.len(),
        relations.len()
    );
    matrix
}

fn cheapest_direct_weights(
    relations: &[Relation],
    metric: Metric,
) -> HashMap<(LocationId, LocationId), f64> {
    let mut cheapest = HashMap::with_capacity(relations.len());
    for relation in relations {
        let weight = metric.weight(relation);
        cheapest
            .entry((relation.source_id, relation.destination_id))
            .and_modify(|current: &mut f64| *current = current.min(weight))
            .or_insert(weight);
    }
    cheapest
}
