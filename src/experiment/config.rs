//! Experiment configuration.

use crate::cost::CostWeights;
use crate::error::{Result, RouteError};
use crate::ga::GaConfig;
use crate::sa::SaConfig;

/// Configuration of a comparison sweep.
///
/// `weights` overrides the weights inside `ga` and `sa` so every algorithm
/// is scored identically; their `seed` fields are replaced per trial.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Seed of the demand sampler and base of every trial seed.
    pub seed: u64,

    /// Number of distinct `(source, target, demand)` samples.
    pub sample_count: usize,

    /// Trials per algorithm per sample.
    pub repeats: usize,

    pub weights: CostWeights,

    /// Inclusive range of the demanded bandwidth. Recorded, not enforced.
    pub demand_min_mbps: u32,
    pub demand_max_mbps: u32,

    pub ga: GaConfig,
    pub sa: SaConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            sample_count: 20,
            repeats: 5,
            weights: CostWeights::default(),
            demand_min_mbps: 100,
            demand_max_mbps: 1000,
            ga: GaConfig::default(),
            sa: SaConfig::default(),
        }
    }
}

impl ExperimentConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_sample_count(mut self, n: usize) -> Self {
        self.sample_count = n;
        self
    }

    pub fn with_repeats(mut self, n: usize) -> Self {
        self.repeats = n;
        self
    }

    pub fn with_weights(mut self, weights: CostWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_demand_range(mut self, min_mbps: u32, max_mbps: u32) -> Self {
        self.demand_min_mbps = min_mbps;
        self.demand_max_mbps = max_mbps;
        self
    }

    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    /// Validates the sweep and both optimizer configurations.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(RouteError::InvalidConfig(
                "sample_count must be at least 1".into(),
            ));
        }
        if self.repeats == 0 {
            return Err(RouteError::InvalidConfig("repeats must be at least 1".into()));
        }
        if self.demand_min_mbps > self.demand_max_mbps {
            return Err(RouteError::InvalidConfig(format!(
                "demand range is empty: {}..={}",
                self.demand_min_mbps, self.demand_max_mbps
            )));
        }
        self.weights.validate()?;
        self.ga.validate()?;
        self.sa.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExperimentConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.sample_count, 20);
        assert_eq!(config.repeats, 5);
        assert_eq!((config.demand_min_mbps, config.demand_max_mbps), (100, 1000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid() {
        assert!(ExperimentConfig::default()
            .with_sample_count(0)
            .validate()
            .is_err());
        assert!(ExperimentConfig::default().with_repeats(0).validate().is_err());
        assert!(ExperimentConfig::default()
            .with_demand_range(500, 100)
            .validate()
            .is_err());
        assert!(ExperimentConfig::default()
            .with_sa(SaConfig::default().with_alpha(2.0))
            .validate()
            .is_err());
        assert!(ExperimentConfig::default()
            .with_ga(GaConfig::default().with_population_size(1))
            .validate()
            .is_err());
    }
}
