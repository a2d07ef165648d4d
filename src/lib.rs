//! Metaheuristic solvers for the knapsack problem.
//!
//! Approximates the best packing of catalog items (each may be packed
//! more than once) under a weight capacity, maximizing total value:
//!
//! - **Genetic Algorithm (GA)**: a population of packings evolved by
//!   fitness-proportionate selection, cut-point crossover with capacity
//!   truncation, and point mutation.
//! - **Simulated Annealing (SA)**: one packing walked through
//!   single-item replacements, accepted by the Metropolis criterion under
//!   a geometric cooling schedule.
//!
//! Both engines share one [`Candidate`] type whose weight and value always
//! match its contents and never exceed its capacity, and one [`Objective`]
//! chosen in the engine configuration. Neither engine guarantees the
//! optimum.
//!
//! # Architecture
//!
//! - [`candidate`], [`item`]: the packing model
//! - [`objective`]: value, weight and combined scoring
//! - [`ga`], [`sa`]: the two engines, each with config, runner and result
//! - [`termination`]: stopping rules and [`StopReason`]
//! - [`parse`]: the two text input formats
//! - [`solve`](mod@solve): one entry point selecting an engine
//!
//! All randomness comes from a caller-supplied or seeded generator, so a
//! fixed seed reproduces a run exactly (unless a wall-clock limit cuts it
//! short).

pub mod candidate;
pub mod error;
pub mod ga;
pub mod item;
pub mod objective;
pub mod parse;
pub mod sa;
pub mod solve;
pub mod termination;

pub use candidate::Candidate;
pub use error::{KnapsackError, Result};
pub use item::Item;
pub use objective::Objective;
pub use parse::{parse_file, parse_str, InputFormat, Problem};
pub use solve::{solve, solve_with_rng, Engine, Solution};
pub use termination::StopReason;
