//! Worker load ledger.
//!
//! Tracks each worker's predicted cumulative finish time, kept in
//! ascending load order. Updates remove and reinsert the affected
//! entry (no decrease-key), O(log n) in the worker count.

use std::collections::BTreeSet;

/// Min-ordered working set of per-worker predicted finish times.
///
/// Ordering lives in a `BTreeSet` keyed on the raw bit pattern of the
/// load: loads are non-negative finite sums of positive runtimes, and
/// for such values the IEEE-754 bit pattern orders exactly like the
/// float itself. The worker index breaks ties between equal loads.
#[derive(Debug, Clone)]
pub struct LoadLedger {
    /// (load bits, worker index), ascending.
    ordered: BTreeSet<(u64, usize)>,
    /// Current load per worker, for O(1) point lookups.
    loads: Vec<f64>,
}

impl LoadLedger {
    /// Creates a ledger with every worker at load 0.0.
    pub fn new(worker_count: usize) -> Self {
        let ordered = (0..worker_count).map(|w| (0.0f64.to_bits(), w)).collect();
        Self {
            ordered,
            loads: vec![0.0; worker_count],
        }
    }

    /// Current load of one worker.
    pub fn load(&self, worker: usize) -> f64 {
        self.loads[worker]
    }

    /// Replaces a worker's load, removing the old entry and
    /// reinserting the new one.
    pub fn update(&mut self, worker: usize, new_load: f64) {
        let removed = self.ordered.remove(&(self.loads[worker].to_bits(), worker));
        debug_assert!(removed, "ledger entry missing for worker {worker}");
        self.ordered.insert((new_load.to_bits(), worker));
        self.loads[worker] = new_load;
    }

    /// Ascending snapshot of all loads, the state the assignment
    /// policy keys on.
    pub fn snapshot(&self) -> Vec<f64> {
        self.ordered
            .iter()
            .map(|&(bits, _)| f64::from_bits(bits))
            .collect()
    }

    /// Number of workers tracked.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Whether the ledger tracks no workers.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}
