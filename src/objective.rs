//! Scoring strategies shared by both engines.
//!
//! An [`Objective`] is chosen once, in the engine configuration, and used
//! for every candidate the engine scores. The genetic engine turns scores
//! into a selection distribution; the annealing engine uses them in the
//! acceptance test.

use crate::candidate::Candidate;

/// What a candidate is scored by.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::{Candidate, Item, Objective};
///
/// let mut c = Candidate::new(10);
/// c.add(Item::new(5, 10)).unwrap();
///
/// assert_eq!(Objective::Value.fitness_weight(&c), 10.0);
/// assert_eq!(Objective::Combined.fitness_weight(&c), 15.0);
/// assert_eq!(Objective::Combined.annealing_score(&c), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// Total value.
    #[default]
    Value,

    /// Total weight, i.e. how full the knapsack is.
    Weight,

    /// Weight and value together.
    ///
    /// Genetic fitness uses `weight + value`; annealing uses
    /// `floor(2 * weight / capacity * value)`, which rewards value more
    /// the fuller the knapsack is.
    Combined,
}

impl Objective {
    /// Un-normalized genetic fitness of a candidate. Never negative.
    pub fn fitness_weight(&self, candidate: &Candidate) -> f64 {
        match self {
            Objective::Value => candidate.value() as f64,
            Objective::Weight => candidate.weight() as f64,
            Objective::Combined => candidate.weight() as f64 + candidate.value() as f64,
        }
    }

    /// Annealing score of a candidate. Higher is better.
    pub fn annealing_score(&self, candidate: &Candidate) -> f64 {
        match self {
            Objective::Value => candidate.value() as f64,
            Objective::Weight => candidate.weight() as f64,
            Objective::Combined => {
                if candidate.capacity() == 0 {
                    return 0.0;
                }
                let fill = 2.0 * candidate.weight() as f64 / candidate.capacity() as f64;
                (fill * candidate.value() as f64).floor()
            }
        }
    }

    /// Normalized fitness of each candidate: `score_i / Σ score`.
    ///
    /// When the scores sum to zero every candidate gets the same share,
    /// so sampling falls back to uniform selection. An empty population
    /// yields an empty distribution.
    pub fn distribution(&self, population: &[Candidate]) -> Vec<f64> {
        let scores: Vec<f64> = population.iter().map(|c| self.fitness_weight(c)).collect();
        let total: f64 = scores.iter().sum();
        if total > 0.0 {
            scores.iter().map(|s| s / total).collect()
        } else if population.is_empty() {
            Vec::new()
        } else {
            vec![1.0 / population.len() as f64; population.len()]
        }
    }
}
