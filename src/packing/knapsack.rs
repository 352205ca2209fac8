//! 0/1 knapsack with selected-set reconstruction.
//!
//! # Algorithm
//!
//! Weights are mapped to integer units (`weight × weight_scale`, then
//! truncated or rounded up per [`WeightRounding`]) and the classic table is
//! filled:
//!
//! ```text
//! dp[i][w] = max(dp[i-1][w], dp[i-1][w - units_i] + value_i)   if units_i <= w
//!          = dp[i-1][w]                                        otherwise
//! ```
//!
//! Walking back from `dp[n][capacity]`, item `i` is selected whenever
//! `dp[i][w] != dp[i-1][w]`, and `w` drops by its units.
//!
//! With the default `Truncate` rounding a fractional weight counts as its
//! floor, both for fitting and for indexing, so the value is the exact
//! optimum over truncated weights. The reported (unrounded) total weight
//! can therefore exceed the capacity by less than one unit per selected
//! item: a single 2.9 item loads into capacity 2, and items lighter than
//! one unit cost nothing. Packers that check each item's unrounded weight
//! against the remaining column but index by the floor reject the former
//! and still accept the latter, at the price of an order-dependent optimum.
//! Use `Ceil` when the load must never overshoot; a larger `weight_scale`
//! keeps more precision either way.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{OptimizeError, Result};
use crate::models::CargoItem;

const DEFAULT_MAX_CAPACITY_UNITS: usize = 1_000_000;
const DEFAULT_MAX_TABLE_CELLS: usize = 50_000_000;

/// How scaled weights become integer table indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightRounding {
    /// Floor: `2.7 → 2`.
    #[default]
    Truncate,
    /// Ceiling: `2.7 → 3`.
    Ceil,
}

/// Unit mapping and table bounds for the packer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackerConfig {
    /// Largest accepted capacity, in table units.
    pub max_capacity_units: usize,
    /// Largest accepted `(items + 1) × (capacity + 1)` table.
    pub max_table_cells: usize,
    /// Table units per unit of weight (e.g. 100 for 10 g steps in kg).
    pub weight_scale: f64,
    /// How scaled weights are rounded to table units.
    pub rounding: WeightRounding,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            max_capacity_units: DEFAULT_MAX_CAPACITY_UNITS,
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            weight_scale: 1.0,
            rounding: WeightRounding::Truncate,
        }
    }
}

impl PackerConfig {
    fn units(&self, weight: f64, capacity_units: usize) -> usize {
        let scaled = weight * self.weight_scale;
        let rounded = match self.rounding {
            WeightRounding::Truncate => scaled.floor(),
            WeightRounding::Ceil => scaled.ceil(),
        };
        // anything above capacity can never be placed
        if rounded > capacity_units as f64 {
            capacity_units + 1
        } else {
            rounded as usize
        }
    }
}

/// Outcome of a packing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingResult {
    /// Loaded items, in input order.
    pub selected: Vec<CargoItem>,
    /// Items left behind, in input order.
    pub remaining: Vec<CargoItem>,
    /// Sum of the selected items' unscaled weights.
    pub total_weight: f64,
    /// Sum of the selected items' values.
    pub total_value: u64,
}

/// Packs `items` into `capacity` with the default configuration.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::CargoItem;
/// use u_dispatch::packing::pack_knapsack;
///
/// let items = vec![
///     CargoItem::new(1, 2.0, 10),
///     CargoItem::new(2, 3.0, 14),
///     CargoItem::new(3, 4.0, 16),
///     CargoItem::new(4, 5.0, 18),
/// ];
/// let result = pack_knapsack(&items, 5).unwrap();
/// assert_eq!(result.total_value, 24);
/// assert_eq!(result.selected.len(), 2);
/// ```
pub fn pack_knapsack(items: &[CargoItem], capacity: usize) -> Result<PackingResult> {
    pack_knapsack_with(items, capacity, &PackerConfig::default())
}

/// Packs `items` into `capacity` (in weight units before scaling).
pub fn pack_knapsack_with(items: &[CargoItem], capacity: usize, config: &PackerConfig) -> Result<PackingResult> {
    if capacity == 0 {
        return Err(OptimizeError::invalid("capacity must be positive"));
    }
    if !config.weight_scale.is_finite() || config.weight_scale <= 0.0 {
        return Err(OptimizeError::invalid(format!(
            "weight scale must be positive, got {}",
            config.weight_scale
        )));
    }
    for item in items {
        item.validate()?;
    }

    let scaled_capacity = capacity as f64 * config.weight_scale;
    if scaled_capacity > config.max_capacity_units as f64 {
        return Err(OptimizeError::TooLargeInput {
            what: "capacity in table units",
            size: scaled_capacity.min(usize::MAX as f64) as usize,
            limit: config.max_capacity_units,
        });
    }
    let cap = scaled_capacity.floor() as usize;
    let width = cap + 1;
    let cells = (items.len() + 1).saturating_mul(width);
    if cells > config.max_table_cells {
        return Err(OptimizeError::TooLargeInput {
            what: "knapsack table cells",
            size: cells,
            limit: config.max_table_cells,
        });
    }

    let units: Vec<usize> = items.iter().map(|it| config.units(it.weight(), cap)).collect();
    let n = items.len();
    let mut table = vec![0u64; cells];

    for i in 1..=n {
        let (prev_rows, row) = table.split_at_mut(i * width);
        let prev = &prev_rows[(i - 1) * width..];
        let row = &mut row[..width];
        let u = units[i - 1];
        let value = items[i - 1].value();
        for w in 0..width {
            row[w] = if u <= w {
                prev[w].max(prev[w - u].saturating_add(value))
            } else {
                prev[w]
            };
        }
    }

    let mut chosen = vec![false; n];
    let mut w = cap;
    for i in (1..=n).rev() {
        if table[i * width + w] != table[(i - 1) * width + w] {
            chosen[i - 1] = true;
            w -= units[i - 1];
        }
    }

    let mut selected = Vec::new();
    let mut remaining = Vec::new();
    for (item, &take) in items.iter().zip(&chosen) {
        if take {
            selected.push(item.clone());
        } else {
            remaining.push(item.clone());
        }
    }
    let total_weight = selected.iter().map(|it| it.weight()).sum();
    let total_value = selected.iter().map(|it| it.value()).sum();

    debug!(
        items = n,
        capacity,
        selected = selected.len(),
        total_value,
        "knapsack packed"
    );
    Ok(PackingResult {
        selected,
        remaining,
        total_weight,
        total_value,
    })
}
