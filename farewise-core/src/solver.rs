//! All-pairs shortest paths over a [`WeightMatrix`].
//!
//! [`solve`] runs Floyd-Warshall with the intermediate location as the
//! outermost loop. Alongside the shortest weights it records a next-hop table
//! so the witness path for any pair can be rebuilt on demand in O(V), rather
//! than copying a full path into every cell during relaxation.
//!
//! # Tie-breaking
//!
//! A stored entry is only replaced by a *strictly* cheaper candidate. When
//! several paths share the minimum weight, the witness is the first one
//! discovered while intermediates are visited in ascending index order. The
//! result is therefore deterministic for a fixed location order and makes no
//! promise about hop count or any other secondary criterion.

use crate::{UNREACHABLE, WeightMatrix};

/// Shortest weights and witness paths for every ordered pair of locations.
///
/// # Examples
/// ```
/// use farewise_core::{UNREACHABLE, WeightMatrix, solve};
///
/// # fn main() -> Result<(), farewise_core::WeightMatrixError> {
/// let matrix = WeightMatrix::from_rows(vec![
///     vec![0.0, 4.0, UNREACHABLE],
///     vec![UNREACHABLE, 0.0, 1.0],
///     vec![2.0, UNREACHABLE, 0.0],
/// ])?;
/// let paths = solve(matrix);
/// assert_eq!(paths.distance(0, 2), Some(5.0));
/// assert_eq!(paths.path(0, 2), vec![0, 1, 2]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    distances: WeightMatrix,
    next_hops: Vec<Option<usize>>,
}

/// Every witness path of a solved matrix, materialised.
///
/// Entry `(i, j)` lists location indices from `i` to `j` inclusive. It is
/// empty when `i == j` or `j` is unreachable from `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTable {
    size: usize,
    paths: Vec<Vec<usize>>,
}

impl PathTable {
    /// Number of locations covered by the table.
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Return `true` for the zero-location table.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Witness path from `from` to `to`, or `None` when out of range.
    pub fn get(&self, from: usize, to: usize) -> Option<&[usize]> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.paths.get(from * self.size + to).map(Vec::as_slice)
    }
}

/// Compute shortest weights and witness paths for every pair in `matrix`.
///
/// Zero- and one-location matrices are returned unchanged.
pub fn solve(matrix: WeightMatrix) -> ShortestPaths {
    let size = matrix.len();
    let mut next_hops = initial_next_hops(&matrix);
    let mut distances = matrix;
    let mut relaxations = 0_usize;

    // The intermediate must stay outermost: every path through `via` is
    // settled before `via + 1` is considered.
    for via in 0..size {
        for from in 0..size {
            let Some(leg_in) = distances.get(from, via).filter(|weight| weight.is_finite()) else {
                continue;
            };
            let Some(first_hop) = hop(&next_hops, size, from, via) else {
                continue;
            };
            for to in 0..size {
                let Some(leg_out) = distances.get(via, to) else {
                    continue;
                };
                let current = distances.get(from, to).unwrap_or(UNREACHABLE);
                let candidate = sum_weights(leg_in, leg_out);
                if candidate < current {
                    distances.set(from, to, candidate);
                    if let Some(slot) = next_hops.get_mut(from * size + to) {
                        *slot = Some(first_hop);
                    }
                    relaxations += 1;
                }
            }
        }
    }

    log::trace!("floyd-warshall over {size} locations applied {relaxations} relaxations");
    ShortestPaths {
        distances,
        next_hops,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "path weights are floating-point sums"
)]
fn sum_weights(lhs: f64, rhs: f64) -> f64 {
    lhs + rhs
}

fn initial_next_hops(matrix: &WeightMatrix) -> Vec<Option<usize>> {
    let size = matrix.len();
    let mut next_hops = vec![None; size * size];
    for from in 0..size {
        for to in 0..size {
            if from != to
                && matrix.is_reachable(from, to)
                && let Some(slot) = next_hops.get_mut(from * size + to)
            {
                *slot = Some(to);
            }
        }
    }
    next_hops
}

fn hop(next_hops: &[Option<usize>], size: usize, from: usize, to: usize) -> Option<usize> {
    if from == to {
        return Some(to);
    }
    next_hops.get(from * size + to).copied().flatten()
}

impl ShortestPaths {
    /// Number of locations covered.
    pub const fn len(&self) -> usize {
        self.distances.len()
    }

    /// Return `true` when no locations were solved.
    pub const fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// The solved weight matrix.
    pub const fn distances(&self) -> &WeightMatrix {
        &self.distances
    }

    /// Consume the result, returning the solved weight matrix.
    pub fn into_distances(self) -> WeightMatrix {
        self.distances
    }

    /// Shortest weight from `from` to `to`.
    ///
    /// Returns `None` when the pair is unreachable or an index is out of
    /// range.
    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        self.distances
            .get(from, to)
            .filter(|weight| weight.is_finite())
    }

    /// Witness path from `from` to `to` as location indices, both ends
    /// inclusive.
    ///
    /// The path is empty when `from == to`, when `to` is unreachable, or when
    /// an index is out of range.
    pub fn path(&self, from: usize, to: usize) -> Vec<usize> {
        if from == to || self.distance(from, to).is_none() {
            return Vec::new();
        }
        let size = self.len();
        let mut path = vec![from];
        let mut current = from;
        while current != to {
            let Some(next) = hop(&self.next_hops, size, current, to) else {
                log::warn!("next-hop chain from {from} to {to} broke at {current}");
                return Vec::new();
            };
            path.push(next);
            current = next;
            if path.len() > size {
                log::warn!("next-hop chain from {from} to {to} revisits a location");
                return Vec::new();
            }
        }
        path
    }

    /// Materialise the witness path of every pair.
    pub fn path_table(&self) -> PathTable {
        let size = self.len();
        let paths = (0..size)
            .flat_map(|from| (0..size).map(move |to| (from, to)))
            .map(|(from, to)| self.path(from, to))
            .collect();
        PathTable { size, paths }
    }
}
