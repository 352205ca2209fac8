//! Exact TSP by Held-Karp bitmask dynamic programming.
//!
//! # Algorithm
//!
//! `dp[mask][i]` is the length of the shortest path that starts at the depot
//! (vertex 0), visits exactly the vertices in `mask`, and ends at `i`.
//!
//! ```text
//! dp[{0}][0]  = 0
//! dp[mask][i] = min over j in mask \ {i} of dp[mask \ {i}][j] + d(j, i)
//! tour        = min over i of dp[all][i] + d(i, 0)
//! ```
//!
//! Only masks containing the depot are filled, and predecessor choices are
//! kept in a parent table for reconstruction.
//!
//! # Complexity
//!
//! O(2ⁿ · n²) time and O(2ⁿ · n) memory. The point count is bounded by
//! [`ExactTourConfig::max_points`] and checked before any table is allocated.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *J. SIAM* 10(1), 196-210.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Tour;
use crate::distance::DistanceMatrix;
use crate::error::{OptimizeError, Result};
use crate::models::{ensure_finite, Point};

/// Largest point count accepted regardless of configuration.
///
/// At 20 points the cost table alone is 2²⁰ × 20 × 8 bytes ≈ 168 MB.
pub const MAX_SUPPORTED_POINTS: usize = 20;

const DEFAULT_MAX_POINTS: usize = 16;

/// Marks a DP state that no path reaches.
const UNREACHED: f64 = f64::INFINITY;

const NO_PARENT: u8 = u8::MAX;

/// Bounds for the exact solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExactTourConfig {
    /// Largest accepted point count (depot included).
    pub max_points: usize,
}

impl Default for ExactTourConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

impl ExactTourConfig {
    /// Bound of `max_points`, still clamped by [`limit`](Self::limit).
    pub fn new(max_points: usize) -> Self {
        Self { max_points }
    }

    /// The configured bound, clamped to [`MAX_SUPPORTED_POINTS`].
    pub fn limit(&self) -> usize {
        self.max_points.min(MAX_SUPPORTED_POINTS)
    }
}

/// Solves the TSP exactly over planar points, with point 0 as the depot.
///
/// # Errors
///
/// [`OptimizeError::InvalidInput`] for an empty set or non-finite
/// coordinates, [`OptimizeError::TooLargeInput`] above the default limit.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
/// use u_dispatch::routing::solve_exact_tour;
///
/// let square = vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 1.0, 0.0),
///     Point::new(2, 1.0, 1.0),
///     Point::new(3, 0.0, 1.0),
/// ];
/// let tour = solve_exact_tour(&square).unwrap();
/// assert!((tour.cost() - 4.0).abs() < 1e-10);
/// ```
pub fn solve_exact_tour(points: &[Point]) -> Result<Tour> {
    solve_exact_tour_with(points, &ExactTourConfig::default())
}

/// Like [`solve_exact_tour`] with an explicit bound.
pub fn solve_exact_tour_with(points: &[Point], config: &ExactTourConfig) -> Result<Tour> {
    check_size(points.len(), config)?;
    ensure_finite(points)?;
    exact_tour(&DistanceMatrix::from_points(points), config)
}

/// Solves the TSP exactly over a distance matrix, with index 0 as the depot.
///
/// The matrix may be asymmetric; entries must be finite and non-negative.
pub fn exact_tour(distances: &DistanceMatrix, config: &ExactTourConfig) -> Result<Tour> {
    let n = distances.size();
    check_size(n, config)?;
    check_entries(distances)?;

    if n == 1 {
        return Ok(Tour::from_parts(vec![0], 0.0));
    }

    let states = 1usize << n;
    let full = states - 1;
    let mut cost = vec![UNREACHED; states * n];
    let mut parent = vec![NO_PARENT; states * n];
    cost[n] = 0.0; // dp[{0}][0]

    // odd masks are exactly those containing the depot
    for mask in (3..states).step_by(2) {
        for i in 1..n {
            let bit = 1usize << i;
            if mask & bit == 0 {
                continue;
            }
            let prev = mask ^ bit;
            let mut best = UNREACHED;
            let mut best_j = NO_PARENT;
            for j in 0..n {
                if prev & (1 << j) == 0 {
                    continue;
                }
                let base = cost[prev * n + j];
                if base == UNREACHED {
                    continue;
                }
                let candidate = base + distances.get(j, i);
                if candidate < best {
                    best = candidate;
                    best_j = j as u8;
                }
            }
            cost[mask * n + i] = best;
            parent[mask * n + i] = best_j;
        }
    }

    let mut end = 0;
    let mut best = UNREACHED;
    for i in 1..n {
        let path = cost[full * n + i];
        if path == UNREACHED {
            continue;
        }
        let total = path + distances.get(i, 0);
        if total < best {
            best = total;
            end = i;
        }
    }
    if end == 0 {
        return Err(OptimizeError::invalid("no finite tour through all points"));
    }

    let mut stops = Vec::with_capacity(n + 1);
    let mut mask = full;
    let mut current = end;
    while current != 0 {
        stops.push(current);
        let prev = parent[mask * n + current];
        if prev == NO_PARENT {
            return Err(OptimizeError::invalid("tour reconstruction reached an unset state"));
        }
        mask ^= 1 << current;
        current = prev as usize;
    }
    stops.push(0);
    stops.reverse();
    stops.push(0);

    debug!(points = n, cost = best, "exact tour solved");
    Ok(Tour::from_parts(stops, best))
}

fn check_size(n: usize, config: &ExactTourConfig) -> Result<()> {
    if n == 0 {
        return Err(OptimizeError::invalid("at least one point (the depot) is required"));
    }
    let limit = config.limit();
    if n > limit {
        return Err(OptimizeError::TooLargeInput {
            what: "point count",
            size: n,
            limit,
        });
    }
    Ok(())
}

fn check_entries(distances: &DistanceMatrix) -> Result<()> {
    let n = distances.size();
    for i in 0..n {
        for j in 0..n {
            let d = distances.get(i, j);
            if !d.is_finite() || d < 0.0 {
                return Err(OptimizeError::invalid(format!(
                    "distance ({i}, {j}) is {d}, expected a finite non-negative value"
                )));
            }
        }
    }
    Ok(())
}
