//! Planner configuration.
//!
//! Builder-style configuration covering both planning stages: the
//! exploration/learning knobs of the assignment policy and the round
//! count of the refiner. Defaults match the reference
//! parameterization the planner was tuned with.

use serde::{Deserialize, Serialize};

/// Configuration for [`HybridPlanner`](crate::planner::HybridPlanner).
///
/// # Example
/// ```
/// use u_wfplan::config::PlannerConfig;
///
/// let config = PlannerConfig::default()
///     .with_refinement_rounds(50)
///     .with_seed(42);
///
/// assert_eq!(config.refinement_rounds, 50);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Refinement rounds (one teacher + one learner phase each).
    pub refinement_rounds: usize,
    /// Initial exploration rate ε of the assignment policy.
    pub initial_exploration: f64,
    /// Multiplicative ε decay applied after every assignment.
    pub exploration_decay: f64,
    /// Lower bound ε never decays below.
    pub exploration_floor: f64,
    /// Value-update learning rate α.
    pub learning_rate: f64,
    /// Value-update discount factor γ.
    pub discount_factor: f64,
    /// RNG seed. `None` draws entropy from the OS; a fixed seed makes
    /// the whole run (both stages) reproducible.
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            refinement_rounds: 100,
            initial_exploration: 0.3,
            exploration_decay: 0.95,
            exploration_floor: 0.01,
            learning_rate: 0.1,
            discount_factor: 0.9,
            seed: None,
        }
    }
}

impl PlannerConfig {
    /// Sets the number of refinement rounds. Zero disables refinement
    /// and returns the stage-1 allocation as-is.
    pub fn with_refinement_rounds(mut self, rounds: usize) -> Self {
        self.refinement_rounds = rounds;
        self
    }

    /// Sets the initial exploration rate (clamped to [0, 1]).
    pub fn with_initial_exploration(mut self, epsilon: f64) -> Self {
        self.initial_exploration = epsilon.clamp(0.0, 1.0);
        self
    }

    /// Sets the exploration decay factor (clamped to [0, 1]).
    pub fn with_exploration_decay(mut self, decay: f64) -> Self {
        self.exploration_decay = decay.clamp(0.0, 1.0);
        self
    }

    /// Sets the exploration floor (clamped to [0, 1]).
    pub fn with_exploration_floor(mut self, floor: f64) -> Self {
        self.exploration_floor = floor.clamp(0.0, 1.0);
        self
    }

    /// Sets the learning rate (clamped to [0, 1]).
    pub fn with_learning_rate(mut self, alpha: f64) -> Self {
        self.learning_rate = alpha.clamp(0.0, 1.0);
        self
    }

    /// Sets the discount factor (clamped to [0, 1]).
    pub fn with_discount_factor(mut self, gamma: f64) -> Self {
        self.discount_factor = gamma.clamp(0.0, 1.0);
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.refinement_rounds, 100);
        assert!((config.initial_exploration - 0.3).abs() < 1e-10);
        assert!((config.exploration_decay - 0.95).abs() < 1e-10);
        assert!((config.exploration_floor - 0.01).abs() < 1e-10);
        assert!((config.learning_rate - 0.1).abs() < 1e-10);
        assert!((config.discount_factor - 0.9).abs() < 1e-10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_chain() {
        let config = PlannerConfig::default()
            .with_refinement_rounds(10)
            .with_initial_exploration(0.5)
            .with_learning_rate(0.2)
            .with_seed(7);

        assert_eq!(config.refinement_rounds, 10);
        assert!((config.initial_exploration - 0.5).abs() < 1e-10);
        assert!((config.learning_rate - 0.2).abs() < 1e-10);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_rates_are_clamped() {
        let config = PlannerConfig::default()
            .with_initial_exploration(1.5)
            .with_exploration_decay(-0.2)
            .with_discount_factor(2.0);

        assert!((config.initial_exploration - 1.0).abs() < 1e-10);
        assert!(config.exploration_decay.abs() < 1e-10);
        assert!((config.discount_factor - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = PlannerConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let back: PlannerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
