//! Constrained task assignment.
//!
//! Tasks are handed to agents in descending priority order, subject to each
//! agent's payload capacity and service radius.
//!
//! - backtracking: exhaustive depth-first search that places every task
//!   or proves it cannot (optionally step-bounded)
//! - greedy: best-effort fallback where the agent with the most remaining capacity wins;
//!   unplaceable tasks are dropped
//!
//! [`assign_tasks`] runs the search first and falls back to greedy only when
//! the search fails to place every task.

mod backtracking;
mod greedy;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::distance::{DistanceModel, Euclidean};
use crate::error::Result;
use crate::models::{Agent, Assignment, Task};

use backtracking::SearchOutcome;

const DEFAULT_MAX_SEARCH_STEPS: usize = 1_000_000;

/// Search bounds for the assignment solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    /// Upper bound on agent trials during backtracking; `None` searches
    /// exhaustively. Running out counts as a failed search.
    pub max_search_steps: Option<usize>,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            max_search_steps: Some(DEFAULT_MAX_SEARCH_STEPS),
        }
    }
}

impl AssignmentConfig {
    /// Configuration without a step bound.
    pub fn exhaustive() -> Self {
        Self {
            max_search_steps: None,
        }
    }
}

/// Which strategy produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStrategy {
    /// Backtracking placed every task.
    Backtracking,
    /// Backtracking failed; the greedy pass produced the plan.
    GreedyFallback,
}

/// Per-agent task lists plus the tasks nobody could take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentPlan {
    /// One entry per agent, in agent input order.
    pub assignments: Vec<Assignment>,
    /// Tasks left unassigned, in priority order. Always empty for
    /// [`AssignmentStrategy::Backtracking`].
    pub unassigned: Vec<usize>,
    /// Strategy that produced this plan.
    pub strategy: AssignmentStrategy,
}

impl AssignmentPlan {
    /// `true` when the greedy fallback was used.
    pub fn is_degraded(&self) -> bool {
        self.strategy == AssignmentStrategy::GreedyFallback
    }
}

/// Precomputed constraint data shared by both strategies.
///
/// `order` lists task positions by descending priority (stable), and
/// `in_range[a][t]` records whether task `t` lies within agent `a`'s radius.
pub(crate) struct Instance<'a> {
    pub agents: &'a [Agent],
    pub tasks: &'a [Task],
    pub order: Vec<usize>,
    pub in_range: Vec<Vec<bool>>,
}

impl<'a> Instance<'a> {
    pub fn new(agents: &'a [Agent], tasks: &'a [Task]) -> Self {
        let mut order: Vec<usize> = (0..tasks.len()).collect();
        order.sort_by(|&a, &b| tasks[b].priority().cmp(&tasks[a].priority()));
        let in_range = agents
            .iter()
            .map(|agent| {
                tasks
                    .iter()
                    .map(|task| Euclidean.distance(agent.location(), task.location()) <= agent.max_distance())
                    .collect()
            })
            .collect();
        Self {
            agents,
            tasks,
            order,
            in_range,
        }
    }

    /// Whether agent `a`, currently carrying `load`, may take task `t`.
    pub fn can_assign(&self, a: usize, t: usize, load: f64) -> bool {
        load + self.tasks[t].weight() <= self.agents[a].capacity() && self.in_range[a][t]
    }
}

/// Assigns tasks to agents with the default search bound.
///
/// # Errors
///
/// Only for malformed input (negative capacity or range, non-positive task
/// weight, non-finite coordinates). Infeasible instances degrade to a
/// greedy plan instead.
///
/// # Examples
///
/// ```
/// use u_dispatch::assignment::{assign_tasks, AssignmentStrategy};
/// use u_dispatch::models::{Agent, Point, Task};
///
/// let depot = Point::new(0, 0.0, 0.0);
/// let agents = vec![Agent::new(1, 5.0, 100.0, depot)];
/// let tasks = vec![
///     Task::new(10, Point::new(10, 1.0, 0.0), 3.0, 1),
///     Task::new(11, Point::new(11, 0.0, 1.0), 4.0, 1),
/// ];
/// let plan = assign_tasks(&agents, &tasks).unwrap();
/// assert_eq!(plan.strategy, AssignmentStrategy::GreedyFallback);
/// assert_eq!(plan.assignments[0].task_ids, vec![10]);
/// assert_eq!(plan.unassigned, vec![11]);
/// ```
pub fn assign_tasks(agents: &[Agent], tasks: &[Task]) -> Result<AssignmentPlan> {
    assign_tasks_with(agents, tasks, &AssignmentConfig::default())
}

/// Assigns tasks to agents under an explicit configuration.
pub fn assign_tasks_with(agents: &[Agent], tasks: &[Task], config: &AssignmentConfig) -> Result<AssignmentPlan> {
    for agent in agents {
        agent.validate()?;
    }
    for task in tasks {
        task.validate()?;
    }

    let instance = Instance::new(agents, tasks);
    let outcome = backtracking::search(&instance, config.max_search_steps);
    let budget_exhausted = outcome == SearchOutcome::BudgetExhausted;

    let plan = match outcome {
        SearchOutcome::Complete(task_ids) => AssignmentPlan {
            assignments: to_assignments(agents, task_ids),
            unassigned: Vec::new(),
            strategy: AssignmentStrategy::Backtracking,
        },
        SearchOutcome::Infeasible | SearchOutcome::BudgetExhausted => {
            warn!(
                agents = agents.len(),
                tasks = tasks.len(),
                budget_exhausted,
                "backtracking could not place every task, falling back to greedy"
            );
            let (task_ids, unassigned) = greedy::assign(&instance);
            if !unassigned.is_empty() {
                warn!(dropped = unassigned.len(), "greedy fallback left tasks unassigned");
            }
            AssignmentPlan {
                assignments: to_assignments(agents, task_ids),
                unassigned,
                strategy: AssignmentStrategy::GreedyFallback,
            }
        }
    };

    debug!(
        agents = agents.len(),
        tasks = tasks.len(),
        unassigned = plan.unassigned.len(),
        strategy = ?plan.strategy,
        "tasks assigned"
    );
    Ok(plan)
}

fn to_assignments(agents: &[Agent], task_ids: Vec<Vec<usize>>) -> Vec<Assignment> {
    agents
        .iter()
        .zip(task_ids)
        .map(|(agent, ids)| Assignment {
            agent_id: agent.id(),
            task_ids: ids,
        })
        .collect()
}
