//! Cargo loading as a 0/1 knapsack.
//!
//! - [`pack_knapsack`]: dynamic programming over integer weight units,
//!   O(n · capacity) time and space, exact for the unit-mapped weights

mod knapsack;

pub use knapsack::{pack_knapsack, pack_knapsack_with, PackerConfig, PackingResult, WeightRounding};
