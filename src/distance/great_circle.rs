//! Great-circle distance and travel-time estimation.
//!
//! Points are read as `(x = latitude, y = longitude)` in degrees.

use serde::{Deserialize, Serialize};

use super::DistanceModel;
use crate::error::{OptimizeError, Result};
use crate::models::Point;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average urban driving speed assumption.
const DEFAULT_SPEED_KMH: f64 = 25.0;

/// Fixed allowance for signals and stops, in minutes.
const DEFAULT_BUFFER_MINUTES: f64 = 5.0;

/// Haversine great-circle distance in kilometres.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::{DistanceModel, Haversine};
/// use u_dispatch::models::Point;
///
/// // Las Vegas to Los Angeles, roughly 370 km.
/// let lv = Point::new(0, 36.17, -115.14);
/// let la = Point::new(1, 34.05, -118.24);
/// let km = Haversine::default().distance(&lv, &la);
/// assert!(km > 350.0 && km < 400.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Haversine {
    /// Sphere radius in kilometres.
    pub radius_km: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl Haversine {
    /// Great-circle metric on a sphere of the given radius.
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }
}

impl DistanceModel for Haversine {
    fn distance(&self, from: &Point, to: &Point) -> f64 {
        let lat1 = from.x().to_radians();
        let lat2 = to.x().to_radians();
        let d_lat = (to.x() - from.x()).to_radians();
        let d_lng = (to.y() - from.y()).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        // rounding can push `a` just outside [0, 1] for antipodal points
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        self.radius_km * c
    }
}

/// Estimates driving time from great-circle distance.
///
/// `minutes = ceil(km / average_speed_kmh * 60 + buffer_minutes)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelTimeModel {
    /// Assumed average speed in km/h.
    pub average_speed_kmh: f64,
    /// Fixed allowance added to every leg, in minutes.
    pub buffer_minutes: f64,
    /// Distance model used for the leg length.
    pub metric: Haversine,
}

impl Default for TravelTimeModel {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_SPEED_KMH,
            buffer_minutes: DEFAULT_BUFFER_MINUTES,
            metric: Haversine::default(),
        }
    }
}

impl TravelTimeModel {
    /// Travel-time model over the default earth-radius haversine metric.
    pub fn new(average_speed_kmh: f64, buffer_minutes: f64) -> Self {
        Self {
            average_speed_kmh,
            buffer_minutes,
            metric: Haversine::default(),
        }
    }

    /// Converts a distance in kilometres to whole minutes, rounded up.
    pub fn minutes_for_km(&self, km: f64) -> Result<u32> {
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(OptimizeError::invalid(format!(
                "average speed must be positive, got {}",
                self.average_speed_kmh
            )));
        }
        if !km.is_finite() || km < 0.0 || !self.buffer_minutes.is_finite() {
            return Err(OptimizeError::invalid(format!("cannot time a leg of {km} km")));
        }
        let minutes = km / self.average_speed_kmh * 60.0 + self.buffer_minutes;
        Ok(minutes.max(0.0).ceil() as u32)
    }

    /// Estimated minutes to drive from `from` to `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_dispatch::distance::TravelTimeModel;
    /// use u_dispatch::models::Point;
    ///
    /// let p = Point::new(0, 11.0168, 76.9558);
    /// // Same point: only the buffer remains.
    /// assert_eq!(TravelTimeModel::default().estimate_minutes(&p, &p).unwrap(), 5);
    /// ```
    pub fn estimate_minutes(&self, from: &Point, to: &Point) -> Result<u32> {
        self.minutes_for_km(self.metric.distance(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let p = Point::new(0, 36.1, -115.1);
        assert!(Haversine::default().distance(&p, &p) < 1e-9);
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        // One degree of latitude is about 111.19 km on a 6371 km sphere.
        let a = Point::new(0, 0.0, 0.0);
        let b = Point::new(1, 1.0, 0.0);
        let km = Haversine::default().distance(&a, &b);
        assert!((km - 111.195).abs() < 0.01, "got {km}");
    }

    #[test]
    fn test_haversine_antipodal_is_finite() {
        let a = Point::new(0, 0.0, 0.0);
        let b = Point::new(1, 0.0, 180.0);
        let km = Haversine::default().distance(&a, &b);
        assert!(km.is_finite());
        assert!((km - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_custom_radius_scales() {
        let a = Point::new(0, 0.0, 0.0);
        let b = Point::new(1, 1.0, 1.0);
        let earth = Haversine::default().distance(&a, &b);
        let half = Haversine::new(EARTH_RADIUS_KM / 2.0).distance(&a, &b);
        assert!((earth - 2.0 * half).abs() < 1e-9);
    }

    #[test]
    fn test_minutes_rounded_up() {
        let model = TravelTimeModel::default();
        // 12.5 km at 25 km/h = 30 min, plus 5 buffer
        assert_eq!(model.minutes_for_km(12.5).expect("valid"), 35);
        // 10.1 km = 24.24 min + 5 = 29.24, rounds up
        assert_eq!(model.minutes_for_km(10.1).expect("valid"), 30);
    }

    #[test]
    fn test_custom_speed_and_buffer() {
        let model = TravelTimeModel::new(60.0, 0.0);
        assert_eq!(model.minutes_for_km(30.0).expect("valid"), 30);
    }

    #[test]
    fn test_zero_speed_rejected() {
        let model = TravelTimeModel::new(0.0, 5.0);
        assert!(model.minutes_for_km(1.0).is_err());
    }
}
