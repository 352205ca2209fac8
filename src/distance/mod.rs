//! Distance models and matrices.
//!
//! - [`Euclidean`]: planar distance, used by the routers
//! - [`Haversine`]: great-circle distance in kilometres for lat/lng points
//! - [`TravelTimeModel`]: minutes estimate on top of haversine distance
//! - [`DistanceMatrix`]: dense pairwise matrix under any model

mod great_circle;
mod matrix;

pub use great_circle::{Haversine, TravelTimeModel};
pub use matrix::DistanceMatrix;

use crate::models::Point;

/// A metric between two points.
///
/// Implementations must return a finite, non-negative value for any pair
/// of finite points, and zero for coincident points.
pub trait DistanceModel {
    /// Distance from `from` to `to`.
    fn distance(&self, from: &Point, to: &Point) -> f64;
}

/// Planar Euclidean distance: `sqrt(dx² + dy²)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceModel for Euclidean {
    fn distance(&self, from: &Point, to: &Point) -> f64 {
        from.distance_to(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        let a = Point::new(0, 0.0, 0.0);
        let b = Point::new(1, 3.0, 4.0);
        assert!((Euclidean.distance(&a, &b) - 5.0).abs() < 1e-10);
        assert_eq!(Euclidean.distance(&b, &b), 0.0);
    }
}
