//! SA configuration.

use crate::cost::CostWeights;
use crate::error::{Result, RouteError};

/// Configuration for path-search Simulated Annealing.
///
/// Cooling is geometric, `T_{k+1} = alpha * T_k`, applied after every
/// iteration. Temperature is never clamped; `temperature_floor` only guards
/// the Metropolis division.
///
/// # Examples
///
/// ```
/// use qos_route::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(10.0)
///     .with_alpha(0.99)
///     .with_max_iterations(1000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Fixed iteration budget. There is no early stop.
    pub max_iterations: usize,

    /// Initial temperature. Higher values allow more uphill moves.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub alpha: f64,

    /// Lower bound on the temperature used in `exp(-delta / T)`.
    pub temperature_floor: f64,

    /// Cost component weights.
    pub weights: CostWeights,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 400,
            initial_temperature: 5.0,
            alpha: 0.995,
            temperature_floor: 1e-9,
            weights: CostWeights::default(),
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_temperature_floor(mut self, floor: f64) -> Self {
        self.temperature_floor = floor;
        self
    }

    pub fn with_weights(mut self, weights: CostWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature > 0.0) || !self.initial_temperature.is_finite() {
            return Err(RouteError::InvalidConfig(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(RouteError::InvalidConfig(format!(
                "alpha must be in (0, 1), got {}",
                self.alpha
            )));
        }
        if !(self.temperature_floor > 0.0) {
            return Err(RouteError::InvalidConfig(format!(
                "temperature_floor must be positive, got {}",
                self.temperature_floor
            )));
        }
        self.weights.validate()
    }
}
