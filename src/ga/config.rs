//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::candidate::DEFAULT_PACK_THRESHOLD;
use crate::objective::Objective;

/// Configuration for the genetic engine.
///
/// # Defaults
///
/// ```
/// use knapsack_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.time_limit_ms, Some(10_000));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_metaheur::ga::GaConfig;
/// use knapsack_metaheur::Objective;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_objective(Objective::Combined)
///     .with_stagnation_limit(50)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of candidates in the population.
    pub population_size: usize,

    /// Score used to build the parent selection distribution.
    pub objective: Objective,

    /// Probability of mutating an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Generations without a strictly better best before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub stagnation_limit: usize,

    /// Hard cap on generations. 0 = no cap.
    pub max_generations: usize,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation, so the run may overshoot
    /// by one generation's worth of work.
    pub time_limit_ms: Option<u64>,

    /// Draws allowed when sampling a replacement item for a mutation.
    pub max_replacement_attempts: usize,

    /// Remaining-capacity threshold for the packing phase of initial fill.
    pub pack_threshold: u64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            objective: Objective::default(),
            mutation_rate: 0.1,
            stagnation_limit: 100,
            max_generations: 0,
            time_limit_ms: Some(10_000),
            max_replacement_attempts: 1000,
            pack_threshold: DEFAULT_PACK_THRESHOLD,
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

    /// Sets the selection objective.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the hard generation cap (0 to disable).
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Disables the wall-clock time limit.
    ///
    /// Needed for reproducible runs: with a time budget the number of
    /// generations depends on machine speed.
    pub fn without_time_limit(mut self) -> Self {
        self.time_limit_ms = None;
        self
    }

    /// Sets the draw limit for mutation replacement sampling.
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

    /// Preset for quick answers: small population, short budget.
    ///
    /// - Population: 50, Stagnation limit: 30, Time limit: 1s
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            stagnation_limit: 30,
            time_limit_ms: Some(1_000),
            ..Self::default()
        }
    }

    /// Preset balancing quality and time.
    ///
    /// - Population: 100, Stagnation limit: 100, Time limit: 10s
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for better packings at the cost of longer runs.
    ///
    /// - Population: 200, Stagnation limit: 300, Time limit: 60s
    pub fn quality() -> Self {
        Self {
            population_size: 200,
            stagnation_limit: 300,
            time_limit_ms: Some(60_000),
            ..Self::default()
        }
    }

    /// Selects a preset from the catalog size.
    ///
    /// - `item_count < 50` → [`fast()`](Self::fast)
    /// - `50 ≤ item_count < 500` → [`balanced()`](Self::balanced)
    /// - `item_count ≥ 500` → [`quality()`](Self::quality)
    pub fn auto_select(item_count: usize) -> Self {
        if item_count < 50 {
            Self::fast()
        } else if item_count < 500 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        if self.time_limit_ms.is_none() && self.stagnation_limit == 0 && self.max_generations == 0 {
            return Err("at least one of time_limit_ms, stagnation_limit, max_generations must be set".into());
        }
        if self.max_replacement_attempts == 0 {
            return Err("max_replacement_attempts must be at least 1".into());
        }
        Ok(())
    }
}
