//! Delivery task type.

use serde::{Deserialize, Serialize};

use super::Point;
use crate::error::{OptimizeError, Result};

/// A delivery task: a weighted drop-off at a location.
///
/// Higher `priority` values are scheduled first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: usize,
    location: Point,
    weight: f64,
    priority: i32,
}

impl Task {
    /// Creates a task.
    pub fn new(id: usize, location: Point, weight: f64, priority: i32) -> Self {
        Self {
            id,
            location,
            weight,
            priority,
        }
    }

    /// Task identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Drop-off location.
    pub fn location(&self) -> &Point {
        &self.location
    }

    /// Payload weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Scheduling priority (higher = more important).
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Checks that the weight is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(OptimizeError::invalid(format!(
                "task {} has non-positive weight {}",
                self.id, self.weight
            )));
        }
        if !self.location.is_finite() {
            return Err(OptimizeError::invalid(format!(
                "task {} has a non-finite location",
                self.id
            )));
        }
        Ok(())
    }
}
