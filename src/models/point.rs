//! Location type.

use serde::{Deserialize, Serialize};

/// A location with an identifier and two coordinates.
///
/// Routers treat `(x, y)` as a flat plane. When a point represents a
/// geographic position, `x` holds the latitude and `y` the longitude in
/// degrees, which is the order [`Haversine`](crate::distance::Haversine)
/// expects.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
///
/// let depot = Point::new(0, 0.0, 0.0);
/// let stop = Point::new(1, 3.0, 4.0);
/// assert!((depot.distance_to(&stop) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: usize,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Point identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate (latitude for geographic points).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate (longitude for geographic points).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Planar Euclidean distance to another point.
    ///
    /// Finite whenever the true distance is representable, even for
    /// coordinates whose squares would overflow.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
