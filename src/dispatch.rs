//! Algorithm selection by name.
//!
//! Requests and responses are tagged by `"algorithm"`:
//!
//! | name | runs |
//! |---|---|
//! | `divide_and_conquer` | [`build_radial_routes`] |
//! | `greedy` | [`build_greedy_route`] |
//! | `dynamic` | [`clustered_exact_tours`] |
//! | `backtracking` | [`assign_tasks_with`] |
//! | `knapsack` | [`pack_knapsack_with`] |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assignment::{assign_tasks_with, AssignmentConfig, AssignmentPlan};
use crate::error::Result;
use crate::graph::WeightedEdge;
use crate::models::{Agent, CargoItem, Point, Priority, PriorityValues, Task};
use crate::packing::{pack_knapsack_with, PackerConfig, PackingResult};
use crate::routing::{
    assign_partners, build_greedy_route, build_radial_routes, clustered_exact_tours, ExactTourConfig, PartnerRoute, Tour,
};

/// A cargo line as submitted by the dashboard: value comes from priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoLine {
    /// Cargo identifier, echoed in the packing result.
    pub id: usize,
    /// Weight in capacity units (may be fractional).
    pub weight: f64,
    /// Priority label; its value comes from the request's `values` table.
    pub priority: Priority,
}

/// Partners for the splitting routers: either a head count or explicit ids.
///
/// `3` and `[3]` differ: the first means three partners numbered `0..3`,
/// the second one partner with id 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Partners {
    /// Anonymous partners, identified by position.
    Count(usize),
    /// Partner ids; routes are handed out in this order.
    Ids(Vec<usize>),
}

impl Default for Partners {
    fn default() -> Self {
        Partners::Count(1)
    }
}

impl Partners {
    /// Number of partners.
    pub fn count(&self) -> usize {
        match self {
            Partners::Count(n) => *n,
            Partners::Ids(ids) => ids.len(),
        }
    }

    /// Partner ids in route order.
    pub fn ids(&self) -> Vec<usize> {
        match self {
            Partners::Count(n) => (0..*n).collect(),
            Partners::Ids(ids) => ids.clone(),
        }
    }

    fn label(&self, tours: Vec<Tour>) -> Vec<PartnerRoute> {
        assign_partners(&self.ids(), tours)
    }
}

/// An optimization request.
///
/// # Examples
///
/// ```
/// use u_dispatch::dispatch::OptimizeRequest;
///
/// let request: OptimizeRequest = serde_json::from_str(
///     r#"{"algorithm":"greedy","points":[{"id":1,"x":0.0,"y":0.0},{"id":2,"x":1.0,"y":0.0}],"depot":0}"#,
/// ).unwrap();
/// assert_eq!(request.algorithm(), "greedy");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum OptimizeRequest {
    /// Radial split, one route per partner.
    DivideAndConquer {
        points: Vec<Point>,
        depot: usize,
        #[serde(default)]
        partners: Partners,
    },
    /// One MST-based route over every point.
    Greedy {
        points: Vec<Point>,
        depot: usize,
    },
    /// Exact tours, split across partners when the set is too large.
    Dynamic {
        points: Vec<Point>,
        #[serde(default)]
        depot: usize,
        #[serde(default)]
        partners: Partners,
        #[serde(default)]
        config: ExactTourConfig,
    },
    /// Task assignment with greedy fallback.
    Backtracking {
        agents: Vec<Agent>,
        tasks: Vec<Task>,
        #[serde(default)]
        config: AssignmentConfig,
    },
    /// Cargo loading by priority value.
    Knapsack {
        items: Vec<CargoLine>,
        capacity: usize,
        #[serde(default)]
        values: PriorityValues,
        #[serde(default)]
        config: PackerConfig,
    },
}

impl OptimizeRequest {
    /// The algorithm name this request selects.
    pub fn algorithm(&self) -> &'static str {
        match self {
            OptimizeRequest::DivideAndConquer { .. } => "divide_and_conquer",
            OptimizeRequest::Greedy { .. } => "greedy",
            OptimizeRequest::Dynamic { .. } => "dynamic",
            OptimizeRequest::Backtracking { .. } => "backtracking",
            OptimizeRequest::Knapsack { .. } => "knapsack",
        }
    }
}

/// The result of an optimization request, tagged like the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum OptimizeResponse {
    /// Routes in partner order.
    DivideAndConquer { routes: Vec<PartnerRoute> },
    /// Spanning tree edges in acceptance order, and the walk over them.
    Greedy { mst_edges: Vec<WeightedEdge>, route: Tour },
    /// Exact tours in partner order.
    Dynamic { routes: Vec<PartnerRoute> },
    Backtracking { plan: AssignmentPlan },
    Knapsack { result: PackingResult },
}

/// Runs the selected algorithm.
pub fn optimize(request: &OptimizeRequest) -> Result<OptimizeResponse> {
    debug!(algorithm = request.algorithm(), "optimization requested");
    let response = match request {
        OptimizeRequest::DivideAndConquer {
            points,
            depot,
            partners,
        } => OptimizeResponse::DivideAndConquer {
            routes: partners.label(build_radial_routes(points, *depot, partners.count())?),
        },
        OptimizeRequest::Greedy { points, depot } => {
            let greedy = build_greedy_route(points, *depot)?;
            OptimizeResponse::Greedy {
                mst_edges: greedy.mst_edges,
                route: greedy.route,
            }
        }
        OptimizeRequest::Dynamic {
            points,
            depot,
            partners,
            config,
        } => OptimizeResponse::Dynamic {
            routes: partners.label(clustered_exact_tours(points, *depot, partners.count(), config)?),
        },
        OptimizeRequest::Backtracking {
            agents,
            tasks,
            config,
        } => OptimizeResponse::Backtracking {
            plan: assign_tasks_with(agents, tasks, config)?,
        },
        OptimizeRequest::Knapsack {
            items,
            capacity,
            values,
            config,
        } => {
            let cargo: Vec<CargoItem> = items
                .iter()
                .map(|line| CargoItem::with_priority(line.id, line.weight, line.priority, values))
                .collect();
            OptimizeResponse::Knapsack {
                result: pack_knapsack_with(&cargo, *capacity, config)?,
            }
        }
    };
    Ok(response)
}

/// Parses a JSON request, runs it, and encodes the response as JSON.
pub fn optimize_json(request: &str) -> Result<String> {
    let request: OptimizeRequest = serde_json::from_str(request)?;
    let response = optimize(&request)?;
    Ok(serde_json::to_string(&response)?)
}
