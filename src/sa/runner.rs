//! SA execution loop.

use super::config::SaConfig;
use super::moves::{accept, neighbor};
use crate::candidate::Candidate;
use crate::error::{KnapsackError, Result};
use crate::item::Item;
use crate::termination::{StopReason, Termination};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The candidate held when the schedule ended.
    ///
    /// Not necessarily the best one visited: worsening moves may have been
    /// accepted along the way.
    pub current: Candidate,

    /// Score of `current`.
    pub current_score: f64,

    /// Highest score observed at any point of the run.
    pub best_score: f64,

    /// Total number of neighbor trials.
    pub iterations: usize,

    /// Number of temperature levels completed.
    pub temperature_levels: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Why the run stopped.
    pub stop_reason: StopReason,

    /// Wall-clock time spent.
    pub elapsed: Duration,

    /// Current score after initialization and after each temperature level.
    pub score_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
///
/// # Usage
///
/// ```
/// use knapsack_metaheur::sa::{SaConfig, SaRunner};
/// use knapsack_metaheur::Item;
///
/// let catalog = vec![Item::new(5, 10), Item::new(4, 40), Item::new(6, 30)];
/// let config = SaConfig::default()
///     .with_iterations_per_temperature(50)
///     .with_seed(42);
///
/// let result = SaRunner::run(&catalog, 10, &config).unwrap();
/// assert!(result.current.weight() <= 10);
/// ```
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    pub fn run(catalog: &[Item], capacity: u64, config: &SaConfig) -> Result<SaResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(catalog, capacity, config, &mut rng)
    }

    /// Runs SA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        catalog: &[Item],
        capacity: u64,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult> {
        config.validate().map_err(KnapsackError::InvalidConfig)?;

        let termination = Termination::time_only(config.time_limit_ms);
        let objective = config.objective;

        // Initialize
        let mut current = Candidate::new(capacity);
        current.fill_with_threshold(catalog, config.pack_threshold, true, rng);
        let mut current_score = objective.annealing_score(&current);
        let mut best_score = current_score;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut levels = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut score_history = Vec::with_capacity(config.temperature_levels() + 1);
        score_history.push(current_score);

        let budget_spent =
            |iterations: usize| config.max_iterations > 0 && iterations >= config.max_iterations;

        let stop_reason = loop {
            if temperature <= config.min_temperature {
                break StopReason::Cooled;
            }
            if termination.time_exceeded() {
                break StopReason::TimeLimit;
            }

            for _ in 0..config.iterations_per_temperature {
                if budget_spent(iterations) {
                    break;
                }

                let candidate = neighbor(&current, catalog, config.max_replacement_attempts, rng);
                let candidate_score = objective.annealing_score(&candidate);
                let u = rng.random_range(0.0..1.0);

                if accept(current_score, candidate_score, temperature, u) {
                    if candidate_score > current_score {
                        improving_moves += 1;
                    }
                    current = candidate;
                    current_score = candidate_score;
                    accepted_moves += 1;
                    best_score = best_score.max(current_score);
                }

                iterations += 1;
            }

            if budget_spent(iterations) {
                break StopReason::IterationLimit;
            }

            // Cool down
            temperature *= config.alpha;
            levels += 1;
            score_history.push(current_score);

            log::debug!(
                "SA level {}: temp={:.6}, score={}, best={}",
                levels,
                temperature,
                current_score,
                best_score
            );
        };

        log::info!(
            "SA stopped after {} iterations ({}): value={}, weight={}/{}",
            iterations,
            stop_reason,
            current.value(),
            current.weight(),
            current.capacity()
        );

        Ok(SaResult {
            current,
            current_score,
            best_score,
            iterations,
            temperature_levels: levels,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            stop_reason,
            elapsed: termination.elapsed(),
            score_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::Objective;

    fn catalog() -> Vec<Item> {
        (1..=20).map(|i| Item::new(i * 2 + 1, (i * 13) % 29 + 1)).collect()
    }

    #[test]
    fn test_default_schedule_budget() {
        let config = SaConfig::default().with_seed(42);
        let result = SaRunner::run(&catalog(), 100, &config).unwrap();
        assert_eq!(result.stop_reason, StopReason::Cooled);
        assert_eq!(result.temperature_levels, 110);
        assert_eq!(result.iterations, 110_000);
        assert!(result.final_temperature <= 1e-5);
        assert_eq!(result.score_history.len(), 111);
        assert_eq!(result.temperature_levels, config.temperature_levels());
    }

    #[test]
    fn test_history_matches_schedule_length() {
        let config = SaConfig::default()
            .with_alpha(0.5)
            .with_iterations_per_temperature(10)
            .with_seed(8);
        let result = SaRunner::run(&catalog(), 100, &config).unwrap();
        assert_eq!(result.score_history.len(), config.temperature_levels() + 1);
    }

    #[test]
    fn test_max_iterations_limit() {
        let config = SaConfig::default()
            .with_iterations_per_temperature(10)
            .with_max_iterations(95)
            .with_seed(42);
        let result = SaRunner::run(&catalog(), 100, &config).unwrap();
        assert_eq!(result.iterations, 95);
        assert_eq!(result.stop_reason, StopReason::IterationLimit);
    }

    #[test]
    fn test_time_limit_override() {
        let config = SaConfig::default()
            .with_initial_temperature(1e12)
            .with_alpha(0.999_999)
            .with_iterations_per_temperature(10)
            .with_time_limit_ms(20)
            .with_seed(42);
        let result = SaRunner::run(&catalog(), 100, &config).unwrap();
        assert_eq!(result.stop_reason, StopReason::TimeLimit);
    }

    #[test]
    fn test_capacity_respected_all_objectives() {
        for objective in [Objective::Value, Objective::Weight, Objective::Combined] {
            let config = SaConfig::default()
                .with_objective(objective)
                .with_iterations_per_temperature(100)
                .with_seed(3);
            let result = SaRunner::run(&catalog(), 60, &config).unwrap();
            assert!(result.current.weight() <= 60, "{objective:?}");
            assert_eq!(result.current_score, objective.annealing_score(&result.current));
            assert!(result.best_score >= result.current_score);
        }
    }

    #[test]
    fn test_high_temperature_accepts_worsening() {
        let config = SaConfig::default()
            .with_initial_temperature(1e8)
            .with_min_temperature(1e7)
            .with_alpha(0.99)
            .with_iterations_per_temperature(200)
            .with_seed(42);
        let result = SaRunner::run(&catalog(), 100, &config).unwrap();
        let ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(ratio > 0.99, "expected near-total acceptance, got {ratio}");
        assert!(result.accepted_moves > result.improving_moves);
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = SaConfig::default()
            .with_iterations_per_temperature(200)
            .with_objective(Objective::Combined)
            .with_seed(77);
        let a = SaRunner::run(&catalog(), 80, &config).unwrap();
        let b = SaRunner::run(&catalog(), 80, &config).unwrap();
        assert_eq!(a.current, b.current);
        assert_eq!(a.score_history, b.score_history);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn test_improves_on_initial_fill() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_iterations_per_temperature(300)
            .with_seed(5);
        let result = SaRunner::run(&catalog(), 100, &config).unwrap();
        assert!(result.improving_moves > 0);
        assert!(result.best_score >= result.score_history[0]);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let config = SaConfig::default().with_alpha(1.0);
        let err = SaRunner::run(&catalog(), 10, &config).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidConfig(_)));
    }
}
