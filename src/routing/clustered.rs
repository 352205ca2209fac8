//! Exact tours for point sets larger than the exact solver's bound.
//!
//! Small sets get one exact tour. Larger sets are first split radially
//! across partners (see [`radial`](super::radial)), then each
//! `depot + chunk` subset is solved exactly.

use tracing::debug;

use super::exact::{exact_tour, ExactTourConfig};
use super::radial::{radial_order, split_even};
use super::{ensure_depot, Tour};
use crate::distance::DistanceMatrix;
use crate::error::{OptimizeError, Result};
use crate::models::{ensure_finite, Point};

/// Plans one exact tour per partner, indices referring to `points`.
///
/// # Errors
///
/// [`OptimizeError::TooLargeInput`] when a partner's share (plus the depot)
/// still exceeds the exact bound, [`OptimizeError::InvalidInput`] when the
/// set must be split but `partner_count` is zero.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
/// use u_dispatch::routing::{clustered_exact_tours, ExactTourConfig};
///
/// let points: Vec<Point> = (0..7).map(|i| Point::new(i, i as f64, 0.0)).collect();
/// let tours = clustered_exact_tours(&points, 0, 2, &ExactTourConfig::new(4)).unwrap();
/// assert_eq!(tours.len(), 2);
/// ```
pub fn clustered_exact_tours(
    points: &[Point],
    depot: usize,
    partner_count: usize,
    config: &ExactTourConfig,
) -> Result<Vec<Tour>> {
    ensure_depot(depot, points.len())?;
    ensure_finite(points)?;
    let distances = DistanceMatrix::from_points(points);
    let order = radial_order(&distances, depot);
    let limit = config.limit();

    if points.len() <= limit {
        let mut indices = Vec::with_capacity(points.len());
        indices.push(depot);
        indices.extend_from_slice(&order);
        return Ok(vec![solve_subset(&distances, &indices, config)?]);
    }
    if partner_count == 0 {
        return Err(OptimizeError::invalid(
            "splitting a large point set requires at least one partner",
        ));
    }

    let mut tours = Vec::with_capacity(partner_count);
    for chunk in split_even(&order, partner_count) {
        if chunk.len() + 1 > limit {
            return Err(OptimizeError::TooLargeInput {
                what: "points per partner",
                size: chunk.len() + 1,
                limit,
            });
        }
        let mut indices = Vec::with_capacity(chunk.len() + 1);
        indices.push(depot);
        indices.extend_from_slice(chunk);
        tours.push(solve_subset(&distances, &indices, config)?);
    }

    debug!(
        points = points.len(),
        partners = partner_count,
        tours = tours.len(),
        "clustered exact tours solved"
    );
    Ok(tours)
}

/// Solves the sub-problem over `indices` (depot first) and maps the tour
/// back to caller indices.
fn solve_subset(distances: &DistanceMatrix, indices: &[usize], config: &ExactTourConfig) -> Result<Tour> {
    let local = distances.subset(indices);
    Ok(exact_tour(&local, config)?.remap(indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{is_valid_tour, solve_exact_tour};

    fn line(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i, i as f64, 0.0)).collect()
    }

    #[test]
    fn test_small_set_single_tour() {
        let points = vec![
            Point::new(0, 1.0, 1.0),
            Point::new(1, 0.0, 0.0),
            Point::new(2, 1.0, 0.0),
            Point::new(3, 0.0, 1.0),
        ];
        let tours = clustered_exact_tours(&points, 0, 3, &ExactTourConfig::default()).expect("valid");
        assert_eq!(tours.len(), 1);
        assert!(is_valid_tour(tours[0].stops(), 0, 4));
        assert!((tours[0].cost() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_matches_direct_solver_when_depot_is_zero() {
        let points = line(6);
        let tours = clustered_exact_tours(&points, 0, 1, &ExactTourConfig::default()).expect("valid");
        let direct = solve_exact_tour(&points).expect("valid");
        assert!((tours[0].cost() - direct.cost()).abs() < 1e-10);
    }

    #[test]
    fn test_non_zero_depot() {
        let points = line(5);
        let tours = clustered_exact_tours(&points, 2, 1, &ExactTourConfig::default()).expect("valid");
        assert_eq!(tours[0].depot(), Some(2));
        assert!(is_valid_tour(tours[0].stops(), 2, 5));
        assert!((tours[0].cost() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_split_across_partners() {
        let points = line(7);
        let tours = clustered_exact_tours(&points, 0, 2, &ExactTourConfig::new(4)).expect("valid");
        assert_eq!(tours.len(), 2);
        assert_eq!(tours[0].interior().len(), 3);
        assert_eq!(tours[1].interior().len(), 3);
        let mut served: Vec<usize> = tours.iter().flat_map(|t| t.interior().to_vec()).collect();
        served.sort_unstable();
        assert_eq!(served, vec![1, 2, 3, 4, 5, 6]);
        // nearest ring 1..=3 goes to the first partner
        assert!((tours[0].cost() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_share_still_too_large() {
        let points = line(9);
        let result = clustered_exact_tours(&points, 0, 2, &ExactTourConfig::new(4));
        assert!(matches!(result, Err(OptimizeError::TooLargeInput { .. })));
    }

    #[test]
    fn test_split_needs_partners() {
        let points = line(9);
        assert!(clustered_exact_tours(&points, 0, 0, &ExactTourConfig::new(4)).is_err());
    }
}
