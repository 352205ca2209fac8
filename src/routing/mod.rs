//! Route builders over a point set with a fixed depot.
//!
//! - [`spanning_tree`]: Kruskal MST plus depth-first walk, O(n² log n)
//! - [`exact`]: Held-Karp bitmask dynamic programming, O(2ⁿ n²), exact
//! - [`radial`]: distance-from-depot ordering split across partners, O(n log n)
//! - [`clustered`]: radial split followed by an exact tour per partner
//!
//! Every builder returns [`Tour`]s that start and end at the depot.

pub mod clustered;
pub mod exact;
pub mod radial;
pub mod spanning_tree;

pub use clustered::clustered_exact_tours;
pub use exact::{exact_tour, solve_exact_tour, solve_exact_tour_with, ExactTourConfig};
pub use radial::{build_radial_routes, radial_order, radial_routes};
pub use spanning_tree::{build_greedy_route, spanning_tree_route, GreedyRoute};

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{OptimizeError, Result};

/// A closed route over point indices, with its total length.
///
/// `stops` begins and ends at the depot; a single-point problem yields the
/// degenerate tour `[depot]` of length zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    stops: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Creates a tour, measuring its length on `distances`.
    pub fn new(stops: Vec<usize>, distances: &DistanceMatrix) -> Self {
        let cost = route_length(&stops, distances);
        Self { stops, cost }
    }

    pub(crate) fn from_parts(stops: Vec<usize>, cost: f64) -> Self {
        Self { stops, cost }
    }

    /// Point indices in visiting order, depot first and last.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Total length of the closed route.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The start and end point.
    pub fn depot(&self) -> Option<usize> {
        self.stops.first().copied()
    }

    /// Stops strictly between the depot bookends.
    pub fn interior(&self) -> &[usize] {
        if self.stops.len() < 2 {
            return &[];
        }
        &self.stops[1..self.stops.len() - 1]
    }

    /// Rewrites every stop through `mapping` (local index to caller index).
    pub(crate) fn remap(self, mapping: &[usize]) -> Self {
        Self {
            stops: self.stops.into_iter().map(|s| mapping[s]).collect(),
            cost: self.cost,
        }
    }

    /// Consumes the tour, returning its stops.
    pub fn into_stops(self) -> Vec<usize> {
        self.stops
    }
}

/// A tour handed to one delivery partner.
///
/// Serializes flat: `{"partner_id": .., "stops": [..], "cost": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRoute {
    /// Identifier of the partner driving this tour.
    pub partner_id: usize,
    /// The partner's closed route.
    #[serde(flatten)]
    pub tour: Tour,
}

/// Pairs tours with partner ids in order.
///
/// The splitting routers emit at most one tour per partner, nearest ring
/// first, so the `k`-th tour belongs to `partner_ids[k]`. Partners left
/// without stops get no route.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
/// use u_dispatch::routing::{assign_partners, build_radial_routes};
///
/// let points: Vec<Point> = (0..5).map(|i| Point::new(i, i as f64, 0.0)).collect();
/// let partners = [42, 7];
/// let tours = build_radial_routes(&points, 0, partners.len()).unwrap();
/// let routes = assign_partners(&partners, tours);
/// assert_eq!(routes[0].partner_id, 42);
/// assert_eq!(routes[1].tour.stops(), &[0, 3, 4, 0]);
/// ```
pub fn assign_partners(partner_ids: &[usize], tours: Vec<Tour>) -> Vec<PartnerRoute> {
    partner_ids
        .iter()
        .zip(tours)
        .map(|(&partner_id, tour)| PartnerRoute { partner_id, tour })
        .collect()
}

/// Sum of consecutive leg lengths along `route`.
///
/// Routes with fewer than two stops have length zero.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
/// use u_dispatch::distance::DistanceMatrix;
/// use u_dispatch::routing::route_length;
///
/// let points = vec![Point::new(0, 0.0, 0.0), Point::new(1, 3.0, 4.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((route_length(&[0, 1, 0], &dm) - 10.0).abs() < 1e-10);
/// ```
pub fn route_length(route: &[usize], distances: &DistanceMatrix) -> f64 {
    route.windows(2).map(|w| distances.get(w[0], w[1])).sum()
}

pub(crate) fn ensure_depot(depot: usize, size: usize) -> Result<()> {
    if size == 0 {
        return Err(OptimizeError::invalid("at least one point (the depot) is required"));
    }
    if depot >= size {
        return Err(OptimizeError::invalid(format!(
            "depot index {depot} is outside 0..{size}"
        )));
    }
    Ok(())
}

/// Returns `true` if `tour` starts and ends at `depot` and visits every
/// other index of `0..size` exactly once in between.
#[cfg(test)]
pub(crate) fn is_valid_tour(tour: &[usize], depot: usize, size: usize) -> bool {
    if size == 1 {
        return tour.len() == 1 && tour[0] == depot;
    }
    if tour.len() != size + 1 || tour[0] != depot || tour[size] != depot {
        return false;
    }
    let mut seen = vec![false; size];
    seen[depot] = true;
    for &s in &tour[1..size] {
        if s >= size || seen[s] {
            return false;
        }
        seen[s] = true;
    }
    seen.iter().all(|&v| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0, 0.0, 0.0),
            Point::new(1, 1.0, 0.0),
            Point::new(2, 1.0, 1.0),
            Point::new(3, 0.0, 1.0),
        ])
    }

    #[test]
    fn test_route_length_short_routes() {
        let dm = square();
        assert_eq!(route_length(&[], &dm), 0.0);
        assert_eq!(route_length(&[2], &dm), 0.0);
    }

    #[test]
    fn test_tour_accessors() {
        let tour = Tour::new(vec![0, 1, 2, 3, 0], &square());
        assert!((tour.cost() - 4.0).abs() < 1e-10);
        assert_eq!(tour.depot(), Some(0));
        assert_eq!(tour.interior(), &[1, 2, 3]);
    }

    #[test]
    fn test_remap() {
        let tour = Tour::from_parts(vec![0, 1, 0], 2.0).remap(&[7, 3]);
        assert_eq!(tour.stops(), &[7, 3, 7]);
        assert_eq!(tour.cost(), 2.0);
    }

    #[test]
    fn test_is_valid_tour() {
        assert!(is_valid_tour(&[0, 2, 1, 0], 0, 3));
        assert!(is_valid_tour(&[1, 0, 2, 1], 1, 3));
        assert!(!is_valid_tour(&[0, 1, 1, 0], 0, 3));
        assert!(!is_valid_tour(&[0, 1, 0], 0, 3));
        assert!(is_valid_tour(&[0], 0, 1));
    }

    #[test]
    fn test_assign_partners_in_order() {
        let tours = vec![
            Tour::from_parts(vec![0, 1, 0], 2.0),
            Tour::from_parts(vec![0, 2, 0], 3.0),
        ];
        let routes = assign_partners(&[9, 4, 6], tours);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].partner_id, 9);
        assert_eq!(routes[1].partner_id, 4);
        assert_eq!(routes[1].tour.stops(), &[0, 2, 0]);
    }

    #[test]
    fn test_partner_route_serializes_flat() {
        let route = PartnerRoute {
            partner_id: 5,
            tour: Tour::from_parts(vec![0, 1, 0], 2.0),
        };
        let json = serde_json::to_value(&route).expect("encode");
        assert_eq!(json, serde_json::json!({"partner_id": 5, "stops": [0, 1, 0], "cost": 2.0}));
        let back: PartnerRoute = serde_json::from_value(json).expect("decode");
        assert_eq!(back, route);
    }

    #[test]
    fn test_ensure_depot() {
        assert!(ensure_depot(0, 0).is_err());
        assert!(ensure_depot(3, 3).is_err());
        assert!(ensure_depot(2, 3).is_ok());
    }
}
