//! Teaching-learning-based allocation refinement.
//!
//! A population-free TLBO variant working on a single allocation
//! vector. Each round runs a teacher phase (pull assignments toward
//! the globally best worker when that strictly improves makespan over
//! the phase-start baseline) and a learner phase (pairwise local-load
//! comparisons against randomly drawn partner tasks). Rounds run to a
//! fixed count with no convergence or plateau check.
//!
//! # Reference
//! Rao, Savsani & Vakharia (2011), "Teaching-learning-based
//! optimization: A novel method for constrained mechanical design
//! optimization problems"

use rand::Rng;
use tracing::trace;

use crate::fitness::FitnessEvaluator;
use crate::models::Allocation;

/// Population-free TLBO refiner over a single allocation vector.
///
/// Borrows the evaluator and owns no allocation state. Precedence is
/// not re-examined here: stage 1 already fixed the task ordering, and
/// moving a slot between workers cannot unorder the DAG walk.
#[derive(Debug)]
pub struct TlboRefiner<'a> {
    evaluator: &'a FitnessEvaluator,
    rounds: usize,
}

impl<'a> TlboRefiner<'a> {
    /// Creates a refiner running `rounds` teacher + learner rounds.
    pub fn new(evaluator: &'a FitnessEvaluator, rounds: usize) -> Self {
        Self { evaluator, rounds }
    }

    /// Refines the allocation in place and returns its final makespan.
    pub fn refine<R: Rng>(&self, allocation: &mut Allocation, rng: &mut R) -> f64 {
        for round in 0..self.rounds {
            self.teacher_phase(allocation);
            self.learner_phase(allocation, rng);
            trace!(
                round,
                makespan = self.evaluator.makespan(allocation),
                "refinement round complete"
            );
        }
        self.evaluator.makespan(allocation)
    }

    /// The guiding worker: the one minimizing makespan if every task
    /// were hypothetically allocated to it. `None` only when there are
    /// no workers at all.
    pub fn guiding_worker(&self) -> Option<usize> {
        let mut best = None;
        let mut best_makespan = f64::INFINITY;
        let mut trial = Allocation::zeroed(self.evaluator.task_count());

        for worker in 0..self.evaluator.worker_count() {
            trial.slots.fill(worker);
            let makespan = self.evaluator.makespan(&trial);
            if makespan < best_makespan {
                best_makespan = makespan;
                best = Some(worker);
            }
        }
        best
    }

    /// Teacher phase: pull assignments toward the guiding worker.
    ///
    /// The baseline makespan is fixed once at phase start. Each task is
    /// tentatively moved to the guiding worker on the working vector
    /// (which keeps earlier accepted moves) and the move survives only
    /// when the resulting makespan is strictly below that baseline.
    pub fn teacher_phase(&self, allocation: &mut Allocation) {
        let Some(guide) = self.guiding_worker() else {
            return;
        };
        let baseline = self.evaluator.makespan(allocation);

        for task in 0..allocation.len() {
            let original = allocation.slots[task];
            allocation.slots[task] = guide;
            if self.evaluator.makespan(allocation) >= baseline {
                allocation.slots[task] = original;
            }
        }
    }

    /// Learner phase: pairwise local-load improvement.
    ///
    /// Each task draws a distinct random partner and moves to the
    /// partner's worker only when that strictly lowers the task's
    /// local load. Commits are immediate, so later pairs observe
    /// earlier moves. Skipped entirely when fewer than two tasks
    /// exist, as there is no distinct partner to draw.
    pub fn learner_phase<R: Rng>(&self, allocation: &mut Allocation, rng: &mut R) {
        let task_count = allocation.len();
        if task_count < 2 {
            return;
        }

        for task in 0..task_count {
            let mut partner = rng.random_range(0..task_count);
            while partner == task {
                partner = rng.random_range(0..task_count);
            }

            let own = allocation.slots[task];
            let other = allocation.slots[partner];

            allocation.slots[task] = other;
            let moved_load = self.evaluator.local_load(allocation, task);
            allocation.slots[task] = own;
            let current_load = self.evaluator.local_load(allocation, task);

            if moved_load < current_load {
                allocation.slots[task] = other;
            }
        }
    }
}
