//! Cargo item type.

use serde::{Deserialize, Serialize};

use super::{Priority, PriorityValues};
use crate::error::{OptimizeError, Result};

/// A piece of cargo that may be loaded onto a vehicle.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{CargoItem, Priority, PriorityValues};
///
/// let item = CargoItem::with_priority(1, 12.5, Priority::High, &PriorityValues::default());
/// assert_eq!(item.value(), 75);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoItem {
    id: usize,
    weight: f64,
    value: u64,
}

impl CargoItem {
    /// Creates an item with an explicit value.
    pub fn new(id: usize, weight: f64, value: u64) -> Self {
        Self { id, weight, value }
    }

    /// Creates an item whose value is looked up from its priority.
    pub fn with_priority(id: usize, weight: f64, priority: Priority, values: &PriorityValues) -> Self {
        Self::new(id, weight, values.value_of(priority))
    }

    /// Item identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Weight in the caller's unit (typically kilograms).
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Loading value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Checks that the weight is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(OptimizeError::invalid(format!(
                "cargo item {} has non-positive weight {}",
                self.id, self.weight
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new() {
        let item = CargoItem::new(3, 2.5, 40);
        assert_eq!(item.id(), 3);
        assert_eq!(item.weight(), 2.5);
        assert_eq!(item.value(), 40);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_with_priority_default_value() {
        let values = PriorityValues::default();
        let item = CargoItem::with_priority(0, 1.0, Priority::from("bulk"), &values);
        assert_eq!(item.value(), 10);
    }

    #[test]
    fn test_invalid_weight() {
        assert!(CargoItem::new(0, 0.0, 1).validate().is_err());
        assert!(CargoItem::new(0, -3.0, 1).validate().is_err());
        assert!(CargoItem::new(0, f64::NAN, 1).validate().is_err());
    }
}
