//! Fitness-proportionate parent selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, roulette wheel selection

use rand::Rng;

/// Samples an index from a probability distribution (roulette wheel).
///
/// `distribution` is expected to sum to 1, as produced by
/// [`Objective::distribution`](crate::Objective::distribution). Sampling is
/// with replacement; calling this twice gives two independent parents.
/// If the weights do not add up to a positive total the draw is uniform.
///
/// # Panics
/// Panics if `distribution` is empty.
pub fn roulette<R: Rng>(distribution: &[f64], rng: &mut R) -> usize {
    assert!(
        !distribution.is_empty(),
        "cannot select from empty population"
    );

    let n = distribution.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = distribution.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &p) in distribution.iter().enumerate() {
        cumulative += p;
        if cumulative > threshold {
            return i;
        }
    }

    // Rounding can leave the threshold past the last partial sum; pick the
    // last index that has any mass.
    distribution
        .iter()
        .rposition(|&p| p > 0.0)
        .unwrap_or(n - 1)
}
