//! SA configuration.

use crate::candidate::DEFAULT_PACK_THRESHOLD;
use crate::objective::Objective;

/// Configuration for the annealing engine.
///
/// The defaults give a fixed, size-independent budget: geometric cooling
/// from `1.0` by `0.9` per level down to `1e-5`, with 1000 neighbor trials
/// per level (110 levels, 110 000 trials).
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::sa::SaConfig;
/// use knapsack_metaheur::Objective;
///
/// let config = SaConfig::default()
///     .with_objective(Objective::Combined)
///     .with_initial_temperature(50.0)
///     .with_alpha(0.95)
///     .with_iterations_per_temperature(200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Score maximized by the search.
    pub objective: Objective,

    /// Starting temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// The algorithm stops once the temperature is no longer above this.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1): `T_{k+1} = alpha * T_k`.
    pub alpha: f64,

    /// Number of neighbor trials at each temperature level.
    pub iterations_per_temperature: usize,

    /// Maximum total trials (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Optional wall-clock limit in milliseconds, checked between
    /// temperature levels. `None` keeps the fixed-iteration schedule.
    pub time_limit_ms: Option<u64>,

    /// Draws allowed when sampling a replacement item for a neighbor.
    pub max_replacement_attempts: usize,

    /// Remaining-capacity threshold for the packing phase of initial fill.
    pub pack_threshold: u64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            objective: Objective::default(),
            initial_temperature: 1.0,
            min_temperature: 1e-5,
            alpha: 0.9,
            iterations_per_temperature: 1000,
            max_iterations: 0,
            time_limit_ms: None,
            max_replacement_attempts: 1000,
            pack_threshold: DEFAULT_PACK_THRESHOLD,
            seed: None,
        }
    }
}

impl SaConfig {
    /// Sets the objective the annealing score is computed from.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the temperature at which cooling stops.
    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Sets the geometric cooling factor.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the number of trials per temperature level.
    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    /// Sets the total trial budget (0 to disable).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the draw limit for neighbor replacement sampling.
    pub fn with_max_replacement_attempts(mut self, n: usize) -> Self {
        self.max_replacement_attempts = n;
        self
    }

    /// Sets the remaining-capacity threshold of the initial packing phase.
    pub fn with_pack_threshold(mut self, threshold: u64) -> Self {
        self.pack_threshold = threshold;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of temperature levels the cooling schedule runs.
    pub fn temperature_levels(&self) -> usize {
        let mut temperature = self.initial_temperature;
        let mut levels = 0;
        while temperature > self.min_temperature {
            temperature *= self.alpha;
            levels += 1;
        }
        levels
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(format!("alpha must be in (0, 1), got {}", self.alpha));
        }
        if self.iterations_per_temperature == 0 {
            return Err("iterations_per_temperature must be at least 1".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        if self.max_replacement_attempts == 0 {
            return Err("max_replacement_attempts must be at least 1".into());
        }
        Ok(())
    }
}
