//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::cost::CostWeights;
use crate::error::{Result, RouteError};

/// Configuration for the path-search Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use qos_route::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.generations, 25);
/// assert_eq!(config.elite_count, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use qos_route::cost::CostWeights;
/// use qos_route::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_elite_count(8)
///     .with_mutation_rate(0.3)
///     .with_weights(CostWeights::new(1.0, 5.0, 0.2))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of paths in the population. Constant across generations.
    pub population_size: usize,

    /// Number of generations to run. There is no early stop.
    pub generations: usize,

    /// Number of lowest-cost paths kept unchanged each generation.
    ///
    /// Parents are drawn only from the elites, so at least 2 are required.
    pub elite_count: usize,

    /// Probability that an offspring attempts mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Maximum number of paths drawn from the shortest-simple-paths
    /// generator while seeding the population.
    pub seed_path_cap: usize,

    /// Random-intermediate-node attempts allowed when the generator cap
    /// runs out before the population is full.
    pub fill_attempts: usize,

    /// Cost component weights.
    pub weights: CostWeights,

    /// Whether to evaluate offspring in parallel (requires the `parallel`
    /// feature; ignored otherwise). Evaluation is pure, so results match
    /// the sequential run.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            generations: 25,
            elite_count: 10,
            mutation_rate: 0.25,
            seed_path_cap: 60,
            fill_attempts: 1000,
            weights: CostWeights::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, k: usize) -> Self {
        self.elite_count = k;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the generator cap used while seeding.
    pub fn with_seed_path_cap(mut self, cap: usize) -> Self {
        self.seed_path_cap = cap;
        self
    }

    /// Sets the random-fill attempt budget.
    pub fn with_fill_attempts(mut self, n: usize) -> Self {
        self.fill_attempts = n;
        self
    }

    /// Sets the cost weights.
    pub fn with_weights(mut self, weights: CostWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(RouteError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.generations == 0 {
            return Err(RouteError::InvalidConfig(
                "generations must be at least 1".into(),
            ));
        }
        if self.elite_count < 2 {
            return Err(RouteError::InvalidConfig(
                "elite_count must be at least 2 (crossover needs two parents)".into(),
            ));
        }
        if self.elite_count > self.population_size {
            return Err(RouteError::InvalidConfig(format!(
                "elite_count {} exceeds population_size {}",
                self.elite_count, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(RouteError::InvalidConfig(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.seed_path_cap == 0 {
            return Err(RouteError::InvalidConfig(
                "seed_path_cap must be at least 1".into(),
            ));
        }
        self.weights.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 30);
        assert_eq!(config.generations, 25);
        assert_eq!(config.elite_count, 10);
        assert!((config.mutation_rate - 0.25).abs() < 1e-10);
        assert_eq!(config.seed_path_cap, 60);
        assert_eq!(config.weights, CostWeights::default());
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(40)
            .with_generations(100)
            .with_elite_count(4)
            .with_mutation_rate(0.5)
            .with_seed_path_cap(10)
            .with_fill_attempts(50)
            .with_weights(CostWeights::new(0.2, 0.2, 20.0))
            .with_parallel(true)
            .with_seed(7);

        assert_eq!(config.population_size, 40);
        assert_eq!(config.generations, 100);
        assert_eq!(config.elite_count, 4);
        assert!((config.mutation_rate - 0.5).abs() < 1e-10);
        assert_eq!(config.seed_path_cap, 10);
        assert_eq!(config.fill_attempts, 50);
        assert!((config.weights.resource - 20.0).abs() < 1e-10);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default()
            .with_population_size(1)
            .with_elite_count(2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(GaConfig::default().with_generations(0).validate().is_err());
    }

    #[test]
    fn test_validate_elite_bounds() {
        assert!(GaConfig::default().with_elite_count(1).validate().is_err());
        assert!(GaConfig::default()
            .with_population_size(5)
            .with_elite_count(6)
            .validate()
            .is_err());
        assert!(GaConfig::default()
            .with_population_size(5)
            .with_elite_count(5)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_weights() {
        let config = GaConfig::default().with_weights(CostWeights::new(1.0, -0.1, 1.0));
        assert!(matches!(
            config.validate(),
            Err(RouteError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_clamp_mutation_rate() {
        let config = GaConfig::default().with_mutation_rate(2.0);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
        let config = GaConfig::default().with_mutation_rate(-1.0);
        assert!(config.mutation_rate.abs() < 1e-10);
    }
}
