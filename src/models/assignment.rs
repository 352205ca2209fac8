//! Agent-to-task assignment record.

use serde::{Deserialize, Serialize};

/// Tasks assigned to one agent, in assignment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Agent receiving the tasks.
    pub agent_id: usize,
    /// Assigned task identifiers.
    pub task_ids: Vec<usize>,
}

impl Assignment {
    /// Creates an empty assignment for an agent.
    pub fn new(agent_id: usize) -> Self {
        Self {
            agent_id,
            task_ids: Vec::new(),
        }
    }

    /// Number of assigned tasks.
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Returns `true` if the agent received no tasks.
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }
}
