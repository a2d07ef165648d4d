//! Knapsack crossover and mutation.
//!
//! Both operators keep the capacity invariant: crossover truncates the
//! child at the first item that would overflow, and mutation only swaps
//! in items that fit.

use crate::candidate::Candidate;
use crate::item::Item;
use rand::Rng;

/// Exclusive upper bound of the crossover cut: `ceil(1.5 × min(len_a, len_b))`.
///
/// Cuts are drawn from the integers below `1.5 × min`, so a 3-item and a
/// 5-item parent give cuts in `0..=4`. Cuts past the end of a parent take
/// all of it (for the head) or none of it (for the tail).
pub fn cut_bound(len_a: usize, len_b: usize) -> usize {
    (3 * len_a.min(len_b)).div_ceil(2)
}

/// Single-cut crossover with capacity truncation.
///
/// The child is `a[..cut] ++ b[cut..]`, scanned left to right and cut off
/// at the first item that would exceed the capacity of `a`.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::ga::operators::crossover;
/// use knapsack_metaheur::{Candidate, Item};
/// use rand::SeedableRng;
///
/// let a = Candidate::from_items([Item::new(4, 40), Item::new(5, 10)], 10);
/// let b = Candidate::from_items([Item::new(6, 30)], 10);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
///
/// let child = crossover(&a, &b, &mut rng);
/// assert!(child.weight() <= 10);
/// ```
pub fn crossover<R: Rng>(a: &Candidate, b: &Candidate, rng: &mut R) -> Candidate {
    let bound = cut_bound(a.len(), b.len());
    let cut = if bound == 0 {
        0
    } else {
        rng.random_range(0..bound)
    };
    crossover_at(a, b, cut)
}

/// Crossover at a fixed cut position.
pub fn crossover_at(a: &Candidate, b: &Candidate, cut: usize) -> Candidate {
    let head = &a.contents()[..cut.min(a.len())];
    let tail = &b.contents()[cut.min(b.len())..];
    Candidate::from_items(head.iter().chain(tail).copied(), a.capacity())
}

/// Point mutation: one random position gets a random catalog item that fits.
///
/// A no-op when nothing in the catalog fits at that position, or when
/// `max_attempts` draws all miss. Returns whether the candidate changed
/// its contents.
pub fn mutate<R: Rng>(
    candidate: &mut Candidate,
    catalog: &[Item],
    max_attempts: usize,
    rng: &mut R,
) -> bool {
    candidate.replace_random(catalog, max_attempts, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn items(pairs: &[(u64, u64)]) -> Vec<Item> {
        pairs.iter().map(|&p| Item::from(p)).collect()
    }

    #[test]
    fn test_cut_bound() {
        assert_eq!(cut_bound(3, 5), 5); // cuts 0..=4
        assert_eq!(cut_bound(5, 3), 5);
        assert_eq!(cut_bound(2, 2), 3);
        assert_eq!(cut_bound(1, 4), 2);
        assert_eq!(cut_bound(0, 4), 0);
    }

    #[test]
    fn test_crossover_three_and_five_items() {
        let a = Candidate::from_items(items(&[(1, 1), (1, 2), (1, 3)]), 100);
        let b = Candidate::from_items(items(&[(2, 1), (2, 2), (2, 3), (2, 4), (2, 5)]), 100);
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = [false; 5];
        for _ in 0..2000 {
            let child = crossover(&a, &b, &mut rng);
            // Recover the cut: the head is the leading run of weight-1 items.
            let head = child.contents().iter().take_while(|i| i.weight == 1).count();
            let cut = if head == 3 { 5 - (child.len() - 3) } else { head };
            assert!(cut <= 4, "cut {cut} out of range");
            seen[cut] = true;
            assert!(child.weight() <= child.capacity());
        }
        // Cuts 3 and 4 keep all of `a` and differ only in the tail length.
        assert!(seen.iter().all(|&s| s), "not every cut drawn: {seen:?}");
    }

    #[test]
    fn test_crossover_at_concatenates() {
        let a = Candidate::from_items(items(&[(1, 10), (2, 20), (3, 30)]), 100);
        let b = Candidate::from_items(items(&[(4, 40), (5, 50), (6, 60)]), 100);
        let child = crossover_at(&a, &b, 1);
        assert_eq!(child.contents(), items(&[(1, 10), (5, 50), (6, 60)]).as_slice());
        assert_eq!(child.weight(), 12);
        assert_eq!(child.value(), 120);
    }

    #[test]
    fn test_crossover_at_past_both_ends() {
        let a = Candidate::from_items(items(&[(1, 10), (2, 20)]), 100);
        let b = Candidate::from_items(items(&[(4, 40)]), 100);
        let child = crossover_at(&a, &b, 2);
        assert_eq!(child.contents(), a.contents());
    }

    #[test]
    fn test_crossover_truncates_at_capacity() {
        let a = Candidate::from_items(items(&[(6, 30), (4, 40)]), 10);
        let b = Candidate::from_items(items(&[(5, 10), (5, 10), (1, 1)]), 10);
        let child = crossover_at(&a, &b, 1);
        // 6 + 5 overflows: everything after the head is dropped.
        assert_eq!(child.contents(), items(&[(6, 30)]).as_slice());
        assert_eq!(child.weight(), 6);
        assert_eq!(child.value(), 30);
    }

    #[test]
    fn test_crossover_empty_parent() {
        let a = Candidate::new(10);
        let b = Candidate::from_items(items(&[(4, 40)]), 10);
        let mut rng = StdRng::seed_from_u64(3);
        let child = crossover(&a, &b, &mut rng);
        assert_eq!(child.contents(), b.contents());
    }

    #[test]
    fn test_mutate_respects_capacity() {
        let catalog = items(&[(5, 10), (4, 40), (6, 30)]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut c = Candidate::from_items(items(&[(4, 40), (6, 30)]), 10);
        for _ in 0..200 {
            mutate(&mut c, &catalog, 100, &mut rng);
            assert!(c.weight() <= 10);
            assert_eq!(c.len(), 2);
        }
    }

    #[test]
    fn test_mutate_infeasible_is_noop() {
        let catalog = items(&[(20, 1)]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut c = Candidate::from_items(items(&[(4, 40), (6, 30)]), 10);
        let before = c.clone();
        assert!(!mutate(&mut c, &catalog, 1_000_000, &mut rng));
        assert_eq!(c, before);
    }
}
