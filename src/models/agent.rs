//! Delivery agent type.

use serde::{Deserialize, Serialize};

use super::Point;
use crate::error::{OptimizeError, Result};

/// A delivery partner with a payload limit and a service radius.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Agent, Point};
///
/// let a = Agent::new(1, 50.0, 10.0, Point::new(0, 0.0, 0.0));
/// assert_eq!(a.capacity(), 50.0);
/// assert!(a.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    id: usize,
    capacity: f64,
    max_distance: f64,
    location: Point,
}

impl Agent {
    /// Creates an agent at `location`.
    pub fn new(id: usize, capacity: f64, max_distance: f64, location: Point) -> Self {
        Self {
            id,
            capacity,
            max_distance,
            location,
        }
    }

    /// Agent identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum total payload weight.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Maximum distance from the current location to any assigned task.
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Current location.
    pub fn location(&self) -> &Point {
        &self.location
    }

    /// Checks that capacity and range are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.capacity.is_finite() || self.capacity < 0.0 {
            return Err(OptimizeError::invalid(format!(
                "agent {} has invalid capacity {}",
                self.id, self.capacity
            )));
        }
        if !self.max_distance.is_finite() || self.max_distance < 0.0 {
            return Err(OptimizeError::invalid(format!(
                "agent {} has invalid max distance {}",
                self.id, self.max_distance
            )));
        }
        if !self.location.is_finite() {
            return Err(OptimizeError::invalid(format!(
                "agent {} has a non-finite location",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_new() {
        let a = Agent::new(2, 100.0, 25.0, Point::new(0, 1.0, 1.0));
        assert_eq!(a.id(), 2);
        assert_eq!(a.capacity(), 100.0);
        assert_eq!(a.max_distance(), 25.0);
        assert_eq!(a.location().x(), 1.0);
    }

    #[test]
    fn test_zero_capacity_is_valid() {
        let a = Agent::new(0, 0.0, 0.0, Point::new(0, 0.0, 0.0));
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_negative_values_rejected() {
        let origin = Point::new(0, 0.0, 0.0);
        assert!(Agent::new(0, -1.0, 5.0, origin).validate().is_err());
        assert!(Agent::new(0, 1.0, -5.0, origin).validate().is_err());
        assert!(Agent::new(0, f64::NAN, 5.0, origin).validate().is_err());
    }
}
