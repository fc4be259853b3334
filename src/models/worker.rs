//! Worker (compute resource) model.
//!
//! A worker is a processing resource with a throughput rate. Rates are
//! relative: doubling a rate halves every runtime on that worker.

use serde::{Deserialize, Serialize};

/// A compute worker that tasks can be allocated to.
///
/// Immutable for the lifetime of a planning run. Past the input
/// boundary workers are addressed by index (their position in the
/// input slice); the ID is carried for host-side reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Processing rate in work units per time unit (positive).
    pub rate: f64,
}

impl Worker {
    /// Creates a worker with the given ID and processing rate.
    pub fn new(id: impl Into<String>, rate: f64) -> Self {
        Self {
            id: id.into(),
            rate,
        }
    }
}
