//! Allocation quality summary.
//!
//! Aggregates the per-worker picture of a finished allocation: loads,
//! makespan, total busy time, and mean utilization. Pure data for the
//! host environment; printing and persistence stay outside the crate.

use serde::{Deserialize, Serialize};

use crate::fitness::FitnessEvaluator;
use crate::models::Allocation;

/// Per-worker load summary of an allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationReport {
    /// Total load per worker (sum of runtimes of its tasks).
    pub worker_loads: Vec<f64>,
    /// Maximum worker load, the simulated makespan.
    pub makespan: f64,
    /// Sum of all worker loads (aggregate busy time).
    pub total_busy: f64,
    /// Mean worker load divided by the makespan. 1.0 means perfectly
    /// balanced; 0.0 for an empty or loadless allocation.
    pub avg_utilization: f64,
}

impl AllocationReport {
    /// Computes the summary for an allocation.
    pub fn calculate(evaluator: &FitnessEvaluator, allocation: &Allocation) -> Self {
        let worker_loads = evaluator.worker_loads(allocation);
        let makespan = worker_loads.iter().copied().fold(0.0, f64::max);
        let total_busy: f64 = worker_loads.iter().sum();
        let avg_utilization = if makespan > 0.0 {
            (total_busy / worker_loads.len() as f64) / makespan
        } else {
            0.0
        };

        Self {
            worker_loads,
            makespan,
            total_busy,
            avg_utilization,
        }
    }
}
