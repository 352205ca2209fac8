//! Dense distance matrix.

use super::{DistanceModel, Euclidean};
use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built from point coordinates under any [`DistanceModel`], or from an
/// explicit grid.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
/// use u_dispatch::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 3.0, 4.0),
///     Point::new(2, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the planar Euclidean matrix for the given points.
    pub fn from_points(points: &[Point]) -> Self {
        Self::with_model(points, &Euclidean)
    }

    /// Computes a symmetric matrix under `model`.
    pub fn with_model<M: DistanceModel + ?Sized>(points: &[Point], model: &M) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = model.distance(&points[i], &points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Builds the sub-matrix over `indices`, in the given order.
    pub fn subset(&self, indices: &[usize]) -> Self {
        let n = indices.len();
        let mut dm = Self::new(n);
        for (a, &i) in indices.iter().enumerate() {
            for (b, &j) in indices.iter().enumerate() {
                dm.set(a, b, self.get(i, j));
            }
        }
        dm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Haversine;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0, 0.0, 0.0),
            Point::new(1, 3.0, 4.0),
            Point::new(2, 0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
        assert!((dm.get(2, 1) - dm.get(1, 2)).abs() < 1e-10);
    }

    #[test]
    fn test_with_haversine() {
        let points = vec![Point::new(0, 11.0, 77.0), Point::new(1, 12.0, 77.0)];
        let dm = DistanceMatrix::with_model(&points, &Haversine::default());
        assert!((dm.get(0, 1) - 111.195).abs() < 0.01);
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_subset_reorders() {
        let dm = DistanceMatrix::from_points(&sample_points());
        let sub = dm.subset(&[2, 0]);
        assert_eq!(sub.size(), 2);
        assert!((sub.get(0, 1) - 8.0).abs() < 1e-10);
        assert_eq!(sub.get(0, 0), 0.0);
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::from_points(&[]);
        assert_eq!(dm.size(), 0);
    }
}
