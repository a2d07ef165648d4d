//! Neighbor proposal and Metropolis acceptance.

use crate::candidate::Candidate;
use crate::item::Item;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Metropolis acceptance test for a maximized score.
///
/// Accepts when `exp((new_score - old_score) / temperature) > u`, where
/// `u` is a uniform draw from `[0, 1)`. Equivalently the cost being
/// minimized is `-score`. Moves that do not worsen the score are always
/// accepted; a worsening move is accepted with a probability that goes to
/// zero as the temperature does. At a non-positive temperature only
/// non-worsening moves pass.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::sa::accept;
///
/// assert!(accept(10.0, 12.0, 1e-9, 0.99));
/// assert!(!accept(10.0, 9.0, 1e-9, 0.0001));
/// assert!(accept(10.0, 9.0, 1e6, 0.5));
/// ```
pub fn accept(old_score: f64, new_score: f64, temperature: f64, u: f64) -> bool {
    if temperature <= 0.0 {
        return new_score >= old_score;
    }
    ((new_score - old_score) / temperature).exp() > u
}

/// Proposes a neighbor of `current`.
///
/// The copy has one random item replaced by a random catalog item that
/// fits (rejection sampling, at most `max_attempts` draws; unchanged if
/// nothing fits). An empty candidate instead gets one random item that
/// fits, if any.
pub fn neighbor<R: Rng>(
    current: &Candidate,
    catalog: &[Item],
    max_attempts: usize,
    rng: &mut R,
) -> Candidate {
    let mut next = current.clone();
    if !next.is_empty() {
        next.replace_random(catalog, max_attempts, rng);
        return next;
    }

    let remaining = next.remaining();
    if catalog.iter().any(|item| item.weight <= remaining) {
        for _ in 0..max_attempts {
            let Some(&item) = catalog.choose(rng) else {
                break;
            };
            if next.add(item).is_ok() {
                break;
            }
        }
    }
    next
}
