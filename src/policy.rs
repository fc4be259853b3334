//! Online assignment policy: ε-greedy learned worker selection.
//!
//! A value-learning policy in the Q-learning family. Each assignment
//! decision keys a table of learned estimates, explores with
//! probability ε (decayed after every assignment toward a floor), and
//! learns from the realized finish time through a Bellman-style update
//! with reward `1 / finish`.
//!
//! # State spaces
//!
//! Selection and update deliberately key two disjoint spaces:
//!
//! - decision states — work-size bucket plus the bucketed ascending
//!   load snapshot, built when choosing a worker.
//! - outcome states — work-size bucket plus the bucketed realized
//!   finish time, built when learning from a result.
//!
//! Values written under outcome keys are therefore never read back by
//! selection; with ε at zero and nothing else feeding the decision
//! space, exploitation falls through to the default estimate and the
//! lowest worker index. This split reproduces the planner's
//! established behavior, and the enum keeps the two spaces from ever
//! colliding inside the shared table.
//!
//! # Reference
//! Sutton & Barto (2018), "Reinforcement Learning: An Introduction", Ch. 6

use std::collections::HashMap;

use rand::Rng;

use crate::config::PlannerConfig;

/// Buckets per doubling when discretizing continuous state components.
const BUCKETS_PER_OCTAVE: f64 = 2.0;

/// Discretizes a non-negative magnitude onto a log scale.
///
/// Nearby magnitudes share a bucket while distant ones differ, so
/// state keys recur across decisions instead of being unique to every
/// float value.
fn bucket(value: f64) -> u32 {
    ((value + 1.0).log2() * BUCKETS_PER_OCTAVE).round() as u32
}

/// Composite state key for the value table.
///
/// The two variants are distinct state spaces; see the module docs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum StateKey {
    /// Selection state: work bucket + bucketed load snapshot.
    Decision { work: u32, loads: Vec<u32> },
    /// Update state: work bucket + bucketed realized finish time.
    Outcome { work: u32, finish: u32 },
}

impl StateKey {
    fn decision(work: f64, load_snapshot: &[f64]) -> Self {
        StateKey::Decision {
            work: bucket(work),
            loads: load_snapshot.iter().map(|&l| bucket(l)).collect(),
        }
    }

    fn outcome(work: f64, finish: f64) -> Self {
        StateKey::Outcome {
            work: bucket(work),
            finish: bucket(finish),
        }
    }
}

/// ε-greedy value-learning policy for per-task worker selection.
///
/// Owns its value table for exactly one planning run; estimates are
/// never persisted or pruned. Driven sequentially by the stage-1
/// assignment loop.
#[derive(Debug)]
pub struct AssignmentPolicy {
    worker_count: usize,
    values: HashMap<(StateKey, usize), f64>,
    epsilon: f64,
    exploration_floor: f64,
    exploration_decay: f64,
    learning_rate: f64,
    discount_factor: f64,
}

impl AssignmentPolicy {
    /// Creates a policy for `worker_count` workers from the planner
    /// configuration.
    pub fn new(worker_count: usize, config: &PlannerConfig) -> Self {
        Self {
            worker_count,
            values: HashMap::new(),
            epsilon: config.initial_exploration,
            exploration_floor: config.exploration_floor,
            exploration_decay: config.exploration_decay,
            learning_rate: config.learning_rate,
            discount_factor: config.discount_factor,
        }
    }

    /// Selects a worker for a task of the given work size.
    ///
    /// With probability ε picks uniformly at random. Otherwise picks
    /// the worker with the highest estimate for the decision state,
    /// unseen pairs defaulting to 0.0 and ties resolving to the
    /// lowest index.
    pub fn select_worker<R: Rng>(
        &self,
        work: f64,
        load_snapshot: &[f64],
        rng: &mut R,
    ) -> usize {
        if rng.random::<f64>() < self.epsilon {
            return rng.random_range(0..self.worker_count);
        }

        let state = StateKey::decision(work, load_snapshot);
        let mut best = 0;
        let mut best_value = f64::NEG_INFINITY;
        for worker in 0..self.worker_count {
            let value = self.value_of(&state, worker);
            if value > best_value {
                best_value = value;
                best = worker;
            }
        }
        best
    }

    /// Learns from a realized finish time.
    ///
    /// Reward is `1 / finish`. The Bellman target discounts the best
    /// estimate over all workers in the outcome state; the entry
    /// written is (outcome state, chosen worker), so the table grows
    /// by at most one entry per call.
    pub fn update_value(&mut self, work: f64, worker: usize, finish: f64) {
        debug_assert!(finish > 0.0, "finish time must be positive");

        let state = StateKey::outcome(work, finish);
        let reward = 1.0 / finish;
        let old = self.value_of(&state, worker);
        let best_next = (0..self.worker_count)
            .map(|w| self.value_of(&state, w))
            .fold(f64::NEG_INFINITY, f64::max);

        let target = reward + self.discount_factor * best_next;
        let new = old + self.learning_rate * (target - old);
        self.values.insert((state, worker), new);
    }

    /// Decays ε toward the configured floor. Called once per assigned
    /// task; ε never increases.
    pub fn decay(&mut self) {
        self.epsilon = self.exploration_floor.max(self.epsilon * self.exploration_decay);
    }

    /// Current exploration rate.
    pub fn exploration_rate(&self) -> f64 {
        self.epsilon
    }

    /// Number of learned entries in the value table.
    pub fn table_len(&self) -> usize {
        self.values.len()
    }

    fn value_of(&self, state: &StateKey, worker: usize) -> f64 {
        self.values
            .get(&(state.clone(), worker))
            .copied()
            .unwrap_or(0.0)
    }
}
