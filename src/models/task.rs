//! Workflow task model.
//!
//! A task is one node of the workflow DAG: a unit of computational work
//! with a size and the set of parent tasks that must be assigned before
//! it becomes ready.
//!
//! # Reference
//! Topcuoglu et al. (2002), "Performance-Effective and Low-Complexity
//! Task Scheduling for Heterogeneous Computing"

use serde::{Deserialize, Serialize};

/// A workflow task to be allocated.
///
/// Tasks form a directed acyclic graph via [`parents`](Task::parents).
/// The planner treats its inputs as immutable: stage-1 assignments are
/// recorded in the run's timeline, never written back onto the task.
///
/// # Units
/// Work is any positive unit consistent with worker rates — a task of
/// work `w` runs for `w / rate` time units on a worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Work size (positive).
    pub work: f64,
    /// IDs of tasks that must be assigned before this one is ready.
    pub parents: Vec<String>,
}

impl Task {
    /// Creates a task with the given ID and work size.
    pub fn new(id: impl Into<String>, work: f64) -> Self {
        Self {
            id: id.into(),
            work,
            parents: Vec::new(),
        }
    }

    /// Adds a parent dependency.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parents.push(parent_id.into());
        self
    }

    /// Replaces all parent dependencies at once.
    pub fn with_parents(mut self, parent_ids: Vec<String>) -> Self {
        self.parents = parent_ids;
        self
    }

    /// Whether this task has no dependencies (an entry node of the DAG).
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("render", 1500.0)
            .with_parent("decode")
            .with_parent("layout");

        assert_eq!(task.id, "render");
        assert!((task.work - 1500.0).abs() < 1e-10);
        assert_eq!(task.parents, vec!["decode", "layout"]);
        assert!(!task.is_root());
    }

    #[test]
    fn test_task_with_parents() {
        let task = Task::new("merge", 10.0).with_parents(vec!["a".into(), "b".into()]);
        assert_eq!(task.parents.len(), 2);
    }

    #[test]
    fn test_task_root() {
        let task = Task::new("fetch", 10.0);
        assert!(task.is_root());
        assert!(task.parents.is_empty());
    }

    #[test]
    fn test_task_serde_round_trip() {
        let task = Task::new("t1", 42.0).with_parent("t0");
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, task.id);
        assert!((back.work - task.work).abs() < 1e-10);
        assert_eq!(back.parents, task.parents);
    }
}
