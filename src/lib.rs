//! # u-dispatch
//!
//! Delivery optimization kernels: route construction over a depot-anchored
//! point set, cargo loading, and capacity/range-constrained task assignment.
//! Every entry point is a pure, synchronous function of its inputs.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Point, Agent, Task, CargoItem, Priority)
//! - [`distance`]: Euclidean and haversine metrics, travel time, distance matrix
//! - [`graph`]: Weighted graphs, Union-Find, Kruskal minimum spanning tree
//! - [`routing`]: MST route, exact bitmask-DP tour, radial and clustered splits
//! - [`packing`]: 0/1 knapsack cargo loading
//! - [`assignment`]: Backtracking task assignment with greedy fallback
//! - [`dispatch`]: Algorithm selection by name over JSON requests
//! - [`error`]: Error type

pub mod assignment;
pub mod dispatch;
pub mod distance;
pub mod error;
pub mod graph;
pub mod models;
pub mod packing;
pub mod routing;

pub use assignment::{assign_tasks, AssignmentPlan};
pub use error::{OptimizeError, Result};
pub use packing::{pack_knapsack, PackingResult};
pub use routing::{build_greedy_route, solve_exact_tour, GreedyRoute, Tour};
