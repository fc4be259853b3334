//! Workflow planning domain models.
//!
//! Provides the core data types for describing an allocation problem
//! and its solution. Domain-agnostic within workflow planning —
//! applicable to scientific workflows, build pipelines, batch ETL, and
//! any DAG of sizeable work units over a fixed worker pool.
//!
//! # Domain Mappings
//!
//! | u-wfplan | Scientific Workflow | Build System | Batch ETL |
//! |----------|--------------------|--------------|-----------|
//! | Task | Job | Compile Unit | Stage |
//! | Worker | VM/Node | Build Agent | Executor |
//! | Allocation | Job Placement | Agent Map | Stage Map |

mod allocation;
mod task;
mod worker;

pub use allocation::{Allocation, TimelineEntry};
pub use task::Task;
pub use worker::Worker;
