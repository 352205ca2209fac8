//! Greedy fallback: most remaining capacity first.
//!
//! Each task, in priority order, goes to the feasible agent with the most
//! spare capacity; the earliest agent wins ties. Tasks no agent can take
//! are dropped. O(n · m).

use super::Instance;

/// Returns task ids per agent and the ids left unassigned.
pub(crate) fn assign(instance: &Instance<'_>) -> (Vec<Vec<usize>>, Vec<usize>) {
    let agent_count = instance.agents.len();
    let mut loads = vec![0.0; agent_count];
    let mut assigned: Vec<Vec<usize>> = vec![Vec::new(); agent_count];
    let mut unassigned = Vec::new();

    for &t in &instance.order {
        let mut best: Option<(usize, f64)> = None;
        for a in 0..agent_count {
            if !instance.can_assign(a, t, loads[a]) {
                continue;
            }
            let spare = instance.agents[a].capacity() - loads[a];
            if best.map_or(true, |(_, s)| spare > s) {
                best = Some((a, spare));
            }
        }

        let task = &instance.tasks[t];
        match best {
            Some((a, _)) => {
                loads[a] += task.weight();
                assigned[a].push(task.id());
            }
            None => unassigned.push(task.id()),
        }
    }

    (assigned, unassigned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Agent, Point, Task};

    fn at(x: f64) -> Point {
        Point::new(0, x, 0.0)
    }

    #[test]
    fn test_most_spare_capacity_wins() {
        let agents = vec![Agent::new(1, 5.0, 10.0, at(0.0)), Agent::new(2, 9.0, 10.0, at(0.0))];
        let tasks = vec![Task::new(1, at(1.0), 2.0, 1)];
        let (assigned, dropped) = assign(&Instance::new(&agents, &tasks));
        assert_eq!(assigned, vec![vec![], vec![1]]);
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_tie_goes_to_first_agent() {
        let agents = vec![Agent::new(1, 5.0, 10.0, at(0.0)), Agent::new(2, 5.0, 10.0, at(0.0))];
        let tasks = vec![Task::new(1, at(1.0), 2.0, 1)];
        let (assigned, _) = assign(&Instance::new(&agents, &tasks));
        assert_eq!(assigned, vec![vec![1], vec![]]);
    }

    #[test]
    fn test_spare_capacity_shifts_between_agents() {
        let agents = vec![Agent::new(1, 10.0, 10.0, at(0.0)), Agent::new(2, 8.0, 10.0, at(0.0))];
        let tasks = vec![
            Task::new(1, at(0.0), 4.0, 3),
            Task::new(2, at(0.0), 3.0, 2),
            Task::new(3, at(0.0), 3.0, 1),
        ];
        let (assigned, dropped) = assign(&Instance::new(&agents, &tasks));
        // spare before each pick: 10 vs 8, then 6 vs 8, then 6 vs 5
        assert_eq!(assigned, vec![vec![1, 3], vec![2]]);
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_out_of_range_agent_skipped() {
        let agents = vec![Agent::new(1, 50.0, 1.0, at(0.0)), Agent::new(2, 5.0, 1.0, at(3.0))];
        let tasks = vec![Task::new(1, at(3.5), 2.0, 1)];
        let (assigned, _) = assign(&Instance::new(&agents, &tasks));
        assert_eq!(assigned, vec![vec![], vec![1]]);
    }

    #[test]
    fn test_unplaceable_dropped_in_priority_order() {
        let agents = vec![Agent::new(1, 1.0, 10.0, at(0.0))];
        let tasks = vec![
            Task::new(1, at(0.0), 2.0, 1),
            Task::new(2, at(0.0), 3.0, 5),
            Task::new(3, at(0.0), 1.0, 0),
        ];
        let (assigned, dropped) = assign(&Instance::new(&agents, &tasks));
        assert_eq!(assigned, vec![vec![3]]);
        assert_eq!(dropped, vec![2, 1]);
    }
}
