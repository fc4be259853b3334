//! Ready-front computation over the dependency DAG.
//!
//! Tracks which tasks remain unassigned and yields the ready front:
//! tasks whose every parent has already been assigned. The front is
//! always produced in ascending task-index order, so a fixed seed
//! reproduces a run exactly.

use std::collections::HashMap;

use crate::models::Task;

/// Tracks assignment progress across the workflow DAG.
///
/// Construction resolves parent IDs to task indices once; after that,
/// readiness checks are pure index lookups. Inputs are expected to
/// have passed [`validate_input`](crate::validation::validate_input) —
/// the tracker performs no cycle or reference checking of its own, and
/// a cyclic graph would leave the front permanently empty.
#[derive(Debug)]
pub struct DependencyTracker {
    /// Parent indices per task, resolved from IDs at construction.
    parents: Vec<Vec<usize>>,
    /// `remaining[i]` is true while task i is unassigned.
    remaining: Vec<bool>,
    /// Count of unassigned tasks.
    remaining_count: usize,
}

impl DependencyTracker {
    /// Builds a tracker over the fixed task ordering (input order).
    pub fn new(tasks: &[Task]) -> Self {
        let index_of: HashMap<&str, usize> = tasks
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.as_str(), i))
            .collect();

        let parents = tasks
            .iter()
            .map(|task| {
                task.parents
                    .iter()
                    .filter_map(|p| index_of.get(p.as_str()).copied())
                    .collect()
            })
            .collect();

        Self {
            parents,
            remaining: vec![true; tasks.len()],
            remaining_count: tasks.len(),
        }
    }

    /// Returns the ready front: unassigned tasks whose parents are all
    /// assigned, in ascending index order.
    pub fn ready(&self) -> Vec<usize> {
        (0..self.remaining.len())
            .filter(|&i| {
                self.remaining[i] && self.parents[i].iter().all(|&p| !self.remaining[p])
            })
            .collect()
    }

    /// Marks a task as assigned, removing it from the remaining set.
    pub fn mark_assigned(&mut self, task_index: usize) {
        if self.remaining[task_index] {
            self.remaining[task_index] = false;
            self.remaining_count -= 1;
        }
    }

    /// Number of tasks still unassigned.
    pub fn remaining(&self) -> usize {
        self.remaining_count
    }

    /// Whether every task has been assigned.
    pub fn is_done(&self) -> bool {
        self.remaining_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Vec<Task> {
        // 0: fetch → 1: parse, 2: index → 3: merge
        vec![
            Task::new("fetch", 10.0),
            Task::new("parse", 20.0).with_parent("fetch"),
            Task::new("index", 5.0).with_parent("fetch"),
            Task::new("merge", 8.0).with_parents(vec!["parse".into(), "index".into()]),
        ]
    }

    #[test]
    fn test_empty_graph_is_done() {
        let tracker = DependencyTracker::new(&[]);
        assert!(tracker.is_done());
        assert!(tracker.ready().is_empty());
    }

    #[test]
    fn test_roots_are_ready_first() {
        let tracker = DependencyTracker::new(&diamond());
        assert_eq!(tracker.ready(), vec![0]);
        assert_eq!(tracker.remaining(), 4);
    }

    #[test]
    fn test_front_advances_in_rounds() {
        let mut tracker = DependencyTracker::new(&diamond());

        tracker.mark_assigned(0);
        // Both children unblock together, ascending order
        assert_eq!(tracker.ready(), vec![1, 2]);

        tracker.mark_assigned(1);
        // merge still blocked on index
        assert_eq!(tracker.ready(), vec![2]);

        tracker.mark_assigned(2);
        assert_eq!(tracker.ready(), vec![3]);

        tracker.mark_assigned(3);
        assert!(tracker.is_done());
        assert!(tracker.ready().is_empty());
    }

    #[test]
    fn test_independent_tasks_all_ready() {
        let tasks = vec![
            Task::new("a", 1.0),
            Task::new("b", 2.0),
            Task::new("c", 3.0),
        ];
        let tracker = DependencyTracker::new(&tasks);
        assert_eq!(tracker.ready(), vec![0, 1, 2]);
    }

    #[test]
    fn test_mark_assigned_is_idempotent() {
        let mut tracker = DependencyTracker::new(&diamond());
        tracker.mark_assigned(0);
        tracker.mark_assigned(0);
        assert_eq!(tracker.remaining(), 3);
    }
}
