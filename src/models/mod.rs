//! Domain model types for delivery optimization.
//!
//! Points with planar or geographic coordinates, delivery agents with
//! payload and range limits, prioritized tasks, cargo items for loading,
//! and the priority-to-value policy used to weigh cargo.

mod agent;
mod assignment;
mod cargo;
mod point;
mod priority;
mod task;

pub use agent::Agent;
pub use assignment::Assignment;
pub use cargo::CargoItem;
pub use point::Point;
pub use priority::{Priority, PriorityValues};
pub use task::Task;

use crate::error::{OptimizeError, Result};

/// Checks that every point has finite coordinates.
pub(crate) fn ensure_finite(points: &[Point]) -> Result<()> {
    match points.iter().find(|p| !p.is_finite()) {
        Some(p) => Err(OptimizeError::invalid(format!(
            "point {} has non-finite coordinates",
            p.id()
        ))),
        None => Ok(()),
    }
}
