//! Fitness evaluation for allocation vectors.
//!
//! Pure load simulation: tasks on one worker are assumed to run
//! back-to-back, so a worker's load is the sum of `work / rate` over
//! its tasks and the makespan is the maximum load. Precedence is
//! deliberately ignored at this level. Task orderings and idle gaps
//! belong to the initial-assignment timeline, not to refinement
//! fitness, which only rebalances load across workers.

use crate::models::{Allocation, Task, Worker};

/// Evaluates allocation quality from captured work sizes and rates.
///
/// Numeric essentials are copied out of the domain models once at
/// construction, then evaluated many times during refinement without
/// touching the models again.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    works: Vec<f64>,
    rates: Vec<f64>,
}

impl FitnessEvaluator {
    /// Captures work sizes and rates from the domain models.
    pub fn new(tasks: &[Task], workers: &[Worker]) -> Self {
        Self {
            works: tasks.iter().map(|t| t.work).collect(),
            rates: workers.iter().map(|w| w.rate).collect(),
        }
    }

    /// Runtime of one task on one worker (`work / rate`).
    #[inline]
    pub fn runtime(&self, task: usize, worker: usize) -> f64 {
        self.works[task] / self.rates[worker]
    }

    /// Total load per worker under the given allocation.
    pub fn worker_loads(&self, allocation: &Allocation) -> Vec<f64> {
        let mut loads = vec![0.0; self.rates.len()];
        for (task, &worker) in allocation.slots.iter().enumerate() {
            loads[worker] += self.runtime(task, worker);
        }
        loads
    }

    /// Simulated makespan: the maximum per-worker load.
    pub fn makespan(&self, allocation: &Allocation) -> f64 {
        self.worker_loads(allocation).into_iter().fold(0.0, f64::max)
    }

    /// Load of the worker currently holding `task_index`, summed over
    /// every task allocated to that worker.
    pub fn local_load(&self, allocation: &Allocation, task_index: usize) -> f64 {
        let worker = allocation.worker_of(task_index);
        allocation
            .slots
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w == worker)
            .map(|(t, _)| self.runtime(t, worker))
            .sum()
    }

    /// Number of tasks captured.
    pub fn task_count(&self) -> usize {
        self.works.len()
    }

    /// Number of workers captured.
    pub fn worker_count(&self) -> usize {
        self.rates.len()
    }
}
