//! Allocation (solution) model.
//!
//! An allocation maps every task to a worker index. Slot order follows
//! the fixed task ordering established at plan start (input order);
//! that ordering is the only join key between task identity and slot
//! and stays stable for the lifetime of a run.

use serde::{Deserialize, Serialize};

/// A complete task-to-worker allocation.
///
/// `slots[i]` holds the worker index chosen for the i-th task of the
/// planner's fixed task ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Worker index per task, parallel to the fixed task ordering.
    pub slots: Vec<usize>,
}

impl Allocation {
    /// Creates an allocation from raw slots.
    pub fn new(slots: Vec<usize>) -> Self {
        Self { slots }
    }

    /// Creates an allocation of `task_count` slots, all on worker 0.
    pub fn zeroed(task_count: usize) -> Self {
        Self {
            slots: vec![0; task_count],
        }
    }

    /// Number of slots (equals the task count).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the allocation has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Worker index assigned to the given task slot.
    #[inline]
    pub fn worker_of(&self, task_index: usize) -> usize {
        self.slots[task_index]
    }

    /// Validates shape: one slot per task and every slot in range.
    pub fn is_valid(&self, task_count: usize, worker_count: usize) -> bool {
        self.slots.len() == task_count && self.slots.iter().all(|&w| w < worker_count)
    }
}

/// Start/finish window recorded for one task during the initial
/// assignment pass.
///
/// Diagnostic output: downstream refinement consumes only the
/// allocation vector. `worker` records the stage-1 choice and is not
/// rewritten when refinement later moves the task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Predicted start time.
    pub start: f64,
    /// Predicted finish time.
    pub finish: f64,
    /// Worker chosen by the initial assignment pass.
    pub worker: usize,
}

impl TimelineEntry {
    /// Window length (`finish - start`).
    pub fn duration(&self) -> f64 {
        self.finish - self.start
    }
}
