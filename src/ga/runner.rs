//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::operators::{crossover, mutate};
use super::selection::roulette;
use crate::candidate::Candidate;
use crate::error::{KnapsackError, Result};
use crate::item::Item;
use crate::termination::{StopReason, Termination};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Highest-value candidate seen during the whole run.
    ///
    /// A copy; it never aliases a member of the final population.
    pub best: Candidate,

    /// Value of `best`.
    pub best_value: u64,

    /// Number of generations executed.
    pub generations: usize,

    /// Why the run stopped.
    pub stop_reason: StopReason,

    /// Wall-clock time spent.
    pub elapsed: Duration,

    /// Best value after initialization and after each generation.
    pub value_history: Vec<u64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use knapsack_metaheur::ga::{GaConfig, GaRunner};
/// use knapsack_metaheur::Item;
///
/// let catalog = vec![Item::new(5, 10), Item::new(4, 40), Item::new(6, 30)];
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_stagnation_limit(20)
///     .with_seed(42);
///
/// let result = GaRunner::run(&catalog, 10, &config).unwrap();
/// assert!(result.best.weight() <= 10);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    pub fn run(catalog: &[Item], capacity: u64, config: &GaConfig) -> Result<GaResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(catalog, capacity, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        catalog: &[Item],
        capacity: u64,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate().map_err(KnapsackError::InvalidConfig)?;

        let mut termination = Termination::new(
            config.time_limit_ms,
            config.stagnation_limit,
            config.max_generations,
        );

        // 1. Initialize population
        let mut population: Vec<Candidate> = (0..config.population_size)
            .map(|_| {
                let mut candidate = Candidate::new(capacity);
                candidate.fill_with_threshold(catalog, config.pack_threshold, true, rng);
                candidate
            })
            .collect();

        // 2. Track best
        let mut best = find_best(&population)?.clone();
        let mut value_history = vec![best.value()];

        // 3. Evolutionary loop
        let stop_reason = loop {
            if let Some(reason) = termination.check() {
                break reason;
            }

            let distribution = config.objective.distribution(&population);

            let mut next_gen = Vec::with_capacity(config.population_size);
            while next_gen.len() < config.population_size {
                let a = roulette(&distribution, rng);
                let b = roulette(&distribution, rng);

                let mut child = crossover(&population[a], &population[b], rng);
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    mutate(&mut child, catalog, config.max_replacement_attempts, rng);
                }
                next_gen.push(child);
            }
            population = next_gen;

            let gen_best = find_best(&population)?;
            let improved = gen_best.value() > best.value();
            if improved {
                best = gen_best.clone();
            }
            termination.record(improved);
            value_history.push(best.value());

            log::debug!(
                "GA generation {}: best_value={}, stagnation={}",
                termination.generations(),
                best.value(),
                termination.stagnation()
            );
        };

        log::info!(
            "GA stopped after {} generations ({}): value={}, weight={}/{}",
            termination.generations(),
            stop_reason,
            best.value(),
            best.weight(),
            best.capacity()
        );

        Ok(GaResult {
            best_value: best.value(),
            best,
            generations: termination.generations(),
            stop_reason,
            elapsed: termination.elapsed(),
            value_history,
        })
    }
}

/// Find the candidate with the highest value (first one on ties).
fn find_best(population: &[Candidate]) -> Result<&Candidate> {
    population
        .iter()
        .reduce(|best, c| if c.value() > best.value() { c } else { best })
        .ok_or_else(|| KnapsackError::InvalidConfig("population must not be empty".into()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::Objective;

    fn scenario_catalog() -> Vec<Item> {
        vec![Item::new(5, 10), Item::new(4, 40), Item::new(6, 30)]
    }

    fn seeded(seed: u64) -> GaConfig {
        GaConfig::default()
            .with_population_size(30)
            .with_stagnation_limit(25)
            .without_time_limit()
            .with_seed(seed)
    }

    #[test]
    fn test_small_instance_finds_optimum() {
        // Optimum with repetition: two (4, 40) items, weight 8, value 80.
        let result = GaRunner::run(&scenario_catalog(), 10, &seeded(42)).unwrap();
        assert_eq!(result.best_value, 80);
        assert_eq!(result.best.weight(), 8);
    }

    #[test]
    fn test_stagnation_termination() {
        let config = seeded(7).with_stagnation_limit(10);
        let result = GaRunner::run(&scenario_catalog(), 10, &config).unwrap();
        assert_eq!(result.stop_reason, StopReason::Stagnation);
        assert!(result.generations >= 10);
    }

    #[test]
    fn test_time_limit_termination() {
        let catalog: Vec<Item> = (1..=40).map(|i| Item::new(i, (i * 7) % 23 + 1)).collect();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_stagnation_limit(0)
            .with_time_limit_ms(30)
            .with_seed(3);
        let result = GaRunner::run(&catalog, 200, &config).unwrap();
        assert_eq!(result.stop_reason, StopReason::TimeLimit);
        assert!(result.elapsed >= Duration::from_millis(30));
    }

    #[test]
    fn test_max_generations() {
        let config = seeded(1).with_stagnation_limit(0).with_max_generations(12);
        let result = GaRunner::run(&scenario_catalog(), 10, &config).unwrap();
        assert_eq!(result.stop_reason, StopReason::MaxGenerations);
        assert_eq!(result.generations, 12);
        assert_eq!(result.value_history.len(), 13);
    }

    #[test]
    fn test_best_value_history_non_decreasing() {
        let catalog: Vec<Item> = (1..=25).map(|i| Item::new(i * 3, i * 5 % 17 + 2)).collect();
        let result = GaRunner::run(&catalog, 150, &seeded(5)).unwrap();
        for window in result.value_history.windows(2) {
            assert!(window[1] >= window[0], "{} < {}", window[1], window[0]);
        }
        assert_eq!(*result.value_history.last().unwrap(), result.best_value);
    }

    #[test]
    fn test_same_seed_same_result() {
        let catalog: Vec<Item> = (1..=25).map(|i| Item::new(i * 3, i * 5 % 17 + 2)).collect();
        let a = GaRunner::run(&catalog, 150, &seeded(99)).unwrap();
        let b = GaRunner::run(&catalog, 150, &seeded(99)).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.generations, b.generations);
        assert_eq!(a.value_history, b.value_history);
    }

    #[test]
    fn test_zero_value_population_uses_uniform_selection() {
        let catalog = vec![Item::new(3, 0), Item::new(4, 0)];
        let result = GaRunner::run(&catalog, 10, &seeded(2)).unwrap();
        assert_eq!(result.best_value, 0);
        assert_eq!(result.stop_reason, StopReason::Stagnation);
    }

    #[test]
    fn test_nothing_fits() {
        let catalog = vec![Item::new(30, 5)];
        let result = GaRunner::run(&catalog, 10, &seeded(2)).unwrap();
        assert!(result.best.is_empty());
    }

    #[test]
    fn test_all_objectives_respect_capacity() {
        let catalog: Vec<Item> = (1..=15).map(|i| Item::new(i + 2, 3 * i % 11 + 1)).collect();
        for objective in [Objective::Value, Objective::Weight, Objective::Combined] {
            let config = seeded(8).with_objective(objective).with_mutation_rate(0.5);
            let result = GaRunner::run(&catalog, 60, &config).unwrap();
            assert!(result.best.weight() <= 60, "{objective:?}");
            assert!(result.best_value > 0, "{objective:?}");
        }
    }

    #[test]
    fn test_invalid_config_is_error() {
        let config = GaConfig::default().with_population_size(1);
        let err = GaRunner::run(&scenario_catalog(), 10, &config).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidConfig(_)));
    }
}
