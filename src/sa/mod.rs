//! Simulated Annealing (SA).
//!
//! A single-solution trajectory search over knapsack candidates. Each trial
//! swaps one packed item for a random catalog item that fits; the Metropolis
//! criterion accepts worsening swaps with a probability that shrinks as the
//! temperature cools geometrically.
//!
//! The objective score is maximized: the acceptance test treats `-score`
//! as the cost.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod moves;
mod runner;

pub use config::SaConfig;
pub use moves::{accept, neighbor};
pub use runner::{SaResult, SaRunner};
