//! Engine selection.
//!
//! [`solve`] runs one engine, chosen by [`Engine`], on a parsed
//! [`Problem`] and reduces its result to a [`Solution`].

use crate::candidate::Candidate;
use crate::error::Result;
use crate::ga::{GaConfig, GaRunner};
use crate::parse::Problem;
use crate::sa::{SaConfig, SaRunner};
use crate::termination::StopReason;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Which search engine to run, with its configuration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Engine {
    Genetic(GaConfig),
    Annealing(SaConfig),
}

impl Engine {
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Genetic(_) => "genetic",
            Engine::Annealing(_) => "annealing",
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::Genetic(GaConfig::default())
    }
}

/// Engine-independent summary of a run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Best packing for the genetic engine, final packing for annealing.
    pub candidate: Candidate,
    pub engine: &'static str,
    pub stop_reason: StopReason,
    pub elapsed: Duration,
}

/// Solves `problem` with the selected engine, seeded from its config.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::{solve, Engine, Item, Problem};
/// use knapsack_metaheur::sa::SaConfig;
///
/// let problem = Problem::new(10, vec![Item::new(5, 10), Item::new(4, 40)]);
/// let engine = Engine::Annealing(SaConfig::default().with_iterations_per_temperature(20).with_seed(1));
///
/// let solution = solve(&problem, &engine).unwrap();
/// assert!(solution.candidate.weight() <= 10);
/// println!("{}", solution.candidate);
/// ```
pub fn solve(problem: &Problem, engine: &Engine) -> Result<Solution> {
    let seed = match engine {
        Engine::Genetic(config) => config.seed,
        Engine::Annealing(config) => config.seed,
    };
    let mut rng = StdRng::seed_from_u64(seed.unwrap_or_else(rand::random));
    solve_with_rng(problem, engine, &mut rng)
}

/// Like [`solve`], drawing all randomness from `rng`.
pub fn solve_with_rng<R: Rng>(problem: &Problem, engine: &Engine, rng: &mut R) -> Result<Solution> {
    log::info!(
        "solving {} items, capacity {} with the {} engine",
        problem.items.len(),
        problem.capacity,
        engine.name()
    );
    match engine {
        Engine::Genetic(config) => {
            let result = GaRunner::run_with_rng(&problem.items, problem.capacity, config, rng)?;
            Ok(Solution {
                candidate: result.best,
                engine: engine.name(),
                stop_reason: result.stop_reason,
                elapsed: result.elapsed,
            })
        }
        Engine::Annealing(config) => {
            let result = SaRunner::run_with_rng(&problem.items, problem.capacity, config, rng)?;
            Ok(Solution {
                candidate: result.current,
                engine: engine.name(),
                stop_reason: result.stop_reason,
                elapsed: result.elapsed,
            })
        }
    }
}
