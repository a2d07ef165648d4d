//! Genetic Algorithm engine.
//!
//! Evolves a fixed-size population of knapsack [`Candidate`](crate::Candidate)s:
//!
//! 1. **Init**: every member is built by a packing fill of the catalog
//! 2. **Evaluate**: the configured [`Objective`](crate::Objective) turns the
//!    population into a selection distribution
//! 3. **Select + Reproduce**: each offspring slot draws two parents by
//!    roulette wheel, crosses them at a random cut and mutates the child
//!    with a fixed probability
//! 4. **Terminate** on time budget, stagnation or generation cap
//!
//! The best-valued candidate ever seen is kept as an independent copy.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, objective, stopping rules)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::roulette;
