//! Depth-first assignment search on an explicit stack.
//!
//! # Algorithm
//!
//! Tasks are taken in priority order. For the task at depth `d`, agents are
//! tried in input order; the first feasible one receives the task and the
//! search descends to `d + 1`. When no remaining agent can take the task,
//! the search returns to `d - 1`, undoes that placement, and resumes with
//! the next agent there. The first complete placement is returned.
//!
//! Each stack frame records the next agent to try and the placement it made
//! (agent and load before placement), so undoing restores loads exactly and
//! recursion depth never grows with the task count.
//!
//! # Complexity
//!
//! O(mⁿ) agent trials in the worst case for m agents and n tasks; bounded in
//! practice by the optional step budget.

use tracing::debug;

use super::Instance;

/// Result of the search.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SearchOutcome {
    /// Every task placed; task ids per agent, in placement order.
    Complete(Vec<Vec<usize>>),
    /// The search space was exhausted without a complete placement.
    Infeasible,
    /// The step budget ran out first.
    BudgetExhausted,
}

#[derive(Debug, Default)]
struct Frame {
    next_agent: usize,
    placed: Option<(usize, f64)>,
}

/// Runs the search, counting one step per agent trial.
pub(crate) fn search(instance: &Instance<'_>, max_steps: Option<usize>) -> SearchOutcome {
    let agent_count = instance.agents.len();
    let depth_target = instance.order.len();
    let mut loads = vec![0.0; agent_count];
    let mut assigned: Vec<Vec<usize>> = vec![Vec::new(); agent_count];
    let mut frames = vec![Frame::default()];
    let mut steps = 0usize;

    loop {
        let depth = frames.len() - 1;
        if depth == depth_target {
            debug!(steps, "backtracking placed every task");
            return SearchOutcome::Complete(assigned);
        }
        let t = instance.order[depth];

        let Some(frame) = frames.last_mut() else {
            return SearchOutcome::Infeasible;
        };
        if let Some((a, prior)) = frame.placed.take() {
            assigned[a].pop();
            loads[a] = prior;
        }

        let mut advanced = false;
        while frame.next_agent < agent_count {
            let a = frame.next_agent;
            frame.next_agent += 1;
            steps += 1;
            if max_steps.is_some_and(|limit| steps > limit) {
                debug!(steps, depth, "backtracking step budget exhausted");
                return SearchOutcome::BudgetExhausted;
            }
            if instance.can_assign(a, t, loads[a]) {
                frame.placed = Some((a, loads[a]));
                loads[a] += instance.tasks[t].weight();
                assigned[a].push(instance.tasks[t].id());
                advanced = true;
                break;
            }
        }

        if advanced {
            frames.push(Frame::default());
        } else {
            frames.pop();
            if frames.is_empty() {
                debug!(steps, "backtracking exhausted the search space");
                return SearchOutcome::Infeasible;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Agent, Point, Task};

    fn at(x: f64) -> Point {
        Point::new(0, x, 0.0)
    }

    #[test]
    fn test_empty_tasks_complete() {
        let agents = vec![Agent::new(1, 1.0, 1.0, at(0.0))];
        let instance = Instance::new(&agents, &[]);
        assert_eq!(search(&instance, None), SearchOutcome::Complete(vec![vec![]]));
    }

    #[test]
    fn test_no_agents_infeasible() {
        let tasks = vec![Task::new(1, at(0.0), 1.0, 1)];
        let instance = Instance::new(&[], &tasks);
        assert_eq!(search(&instance, None), SearchOutcome::Infeasible);
    }

    #[test]
    fn test_first_feasible_agent_in_order() {
        let agents = vec![Agent::new(1, 1.0, 10.0, at(0.0)), Agent::new(2, 5.0, 10.0, at(0.0))];
        let tasks = vec![Task::new(7, at(1.0), 2.0, 1)];
        let instance = Instance::new(&agents, &tasks);
        assert_eq!(search(&instance, None), SearchOutcome::Complete(vec![vec![], vec![7]]));
    }

    #[test]
    fn test_range_respected() {
        let agents = vec![Agent::new(1, 10.0, 1.0, at(0.0)), Agent::new(2, 10.0, 1.0, at(10.0))];
        let tasks = vec![Task::new(1, at(9.5), 1.0, 1), Task::new(2, at(0.5), 1.0, 1)];
        let instance = Instance::new(&agents, &tasks);
        assert_eq!(search(&instance, None), SearchOutcome::Complete(vec![vec![2], vec![1]]));
    }

    #[test]
    fn test_exact_capacity_fits() {
        let agents = vec![Agent::new(1, 0.75, 10.0, at(0.0))];
        let tasks = vec![Task::new(1, at(0.0), 0.25, 2), Task::new(2, at(0.0), 0.5, 1)];
        let instance = Instance::new(&agents, &tasks);
        assert_eq!(search(&instance, None), SearchOutcome::Complete(vec![vec![1, 2]]));
    }

    #[test]
    fn test_budget_counts_trials() {
        let agents = vec![Agent::new(1, 1.0, 10.0, at(0.0)), Agent::new(2, 1.0, 10.0, at(0.0))];
        let tasks = vec![Task::new(1, at(0.0), 1.0, 1), Task::new(2, at(0.0), 1.0, 1)];
        let instance = Instance::new(&agents, &tasks);
        // t1 → agent 1 (1 step), t2 → agent 1 fails, agent 2 fits (3 steps)
        assert!(matches!(search(&instance, Some(3)), SearchOutcome::Complete(_)));
        assert_eq!(search(&instance, Some(2)), SearchOutcome::BudgetExhausted);
    }

    #[test]
    fn test_deep_instance_does_not_recurse() {
        let agents = vec![Agent::new(1, 1.0e6, 1.0e6, at(0.0))];
        let tasks: Vec<Task> = (0..50_000).map(|i| Task::new(i, at(1.0), 1.0, 0)).collect();
        let instance = Instance::new(&agents, &tasks);
        match search(&instance, None) {
            SearchOutcome::Complete(ids) => assert_eq!(ids[0].len(), 50_000),
            other => panic!("expected completion, got {other:?}"),
        }
    }
}
