//! Workflow allocation core for the U-Engine ecosystem.
//!
//! Assigns precedence-constrained tasks (a workflow DAG) onto a fixed
//! pool of heterogeneous workers, minimizing simulated makespan.
//! Planning runs in two stages: an online ε-greedy value-learning pass
//! assigns tasks in ready-front order against a live load ledger, then
//! a population-free teaching-learning-based optimization (TLBO) pass
//! refines the completed allocation vector for a fixed number of
//! rounds.
//!
//! The crate is a pure computation core — no I/O, no execution, no
//! persistence. Hosts feed in `Task`/`Worker` descriptors and receive
//! a `PlanResult` with the allocation, the stage-1 timeline, and a
//! load report.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Worker`, `Allocation`, `TimelineEntry`
//! - **`validation`**: Input integrity checks (duplicate IDs, DAG cycles, positive sizes)
//! - **`config`**: Planner configuration with builder-style setup
//! - **`graph`**: Ready-front tracking over the dependency DAG
//! - **`ledger`**: Min-ordered per-worker load ledger
//! - **`policy`**: ε-greedy learned assignment policy
//! - **`fitness`**: Pure makespan and local-load evaluation
//! - **`tlbo`**: Teacher/learner refinement over the allocation vector
//! - **`report`**: Per-worker load summary
//! - **`planner`**: Two-stage orchestration
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem.
//! Its policy and optimizer are concrete single-variant components —
//! scheduling frameworks above it own strategy selection, and this
//! crate owns only the hybrid workflow-allocation algorithm.
//!
//! # References
//!
//! - Sutton & Barto (2018), "Reinforcement Learning: An Introduction"
//! - Rao, Savsani & Vakharia (2011), "Teaching-Learning-Based Optimization"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod fitness;
pub mod graph;
pub mod ledger;
pub mod models;
pub mod planner;
pub mod policy;
pub mod report;
pub mod tlbo;
pub mod validation;
