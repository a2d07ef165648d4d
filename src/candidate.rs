//! Capacity-bounded knapsack candidate.
//!
//! A [`Candidate`] is one trial packing: an ordered multiset of [`Item`]s
//! with cached aggregate weight and value. Every mutating operation is
//! validated so that, at every observable point,
//!
//! - `weight == Σ contents[i].weight`
//! - `value == Σ contents[i].value`
//! - `weight <= capacity`

use crate::error::{KnapsackError, Result};
use crate::item::Item;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;

/// Default remaining-capacity threshold for the packing phase of [`Candidate::fill`].
pub const DEFAULT_PACK_THRESHOLD: u64 = 10;

/// A single knapsack packing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate {
    contents: Vec<Item>,
    weight: u64,
    value: u64,
    capacity: u64,
}

impl Candidate {
    /// Creates an empty candidate with the given capacity.
    pub fn new(capacity: u64) -> Self {
        Self {
            contents: Vec::new(),
            weight: 0,
            value: 0,
            capacity,
        }
    }

    /// Rebuilds a candidate whose aggregates are already known.
    ///
    /// The aggregates are checked against `contents`; a mismatch or a weight
    /// over capacity is rejected.
    pub fn from_parts(contents: Vec<Item>, weight: u64, value: u64, capacity: u64) -> Result<Self> {
        let (sum_weight, sum_value) = totals(&contents)?;
        if sum_weight != weight || sum_value != value {
            return Err(KnapsackError::InvalidCandidate(format!(
                "aggregates ({weight}, {value}) do not match contents ({sum_weight}, {sum_value})"
            )));
        }
        if weight > capacity {
            return Err(KnapsackError::CapacityExceeded { weight, capacity });
        }
        Ok(Self {
            contents,
            weight,
            value,
            capacity,
        })
    }

    /// Builds a candidate from the longest prefix of `items` that fits.
    ///
    /// Items are scanned left to right; the scan stops at the first item
    /// that would exceed the capacity and the remainder is discarded.
    pub fn from_items<I>(items: I, capacity: u64) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        let mut candidate = Self::new(capacity);
        for item in items {
            if candidate.add(item).is_err() {
                break;
            }
        }
        candidate
    }

    pub fn contents(&self) -> &[Item] {
        &self.contents
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Capacity not yet used.
    pub fn remaining(&self) -> u64 {
        self.capacity - self.weight
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Number of occurrences of each distinct item, ordered by `(weight, value)`.
    pub fn counts(&self) -> BTreeMap<Item, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.contents {
            *counts.entry(*item).or_insert(0) += 1;
        }
        counts
    }

    /// Appends `item` if it fits.
    ///
    /// On failure the candidate is left unchanged.
    pub fn add(&mut self, item: Item) -> Result<()> {
        let weight = self.weight.checked_add(item.weight).ok_or(KnapsackError::CapacityExceeded {
            weight: u64::MAX,
            capacity: self.capacity,
        })?;
        if weight > self.capacity {
            return Err(KnapsackError::CapacityExceeded {
                weight,
                capacity: self.capacity,
            });
        }
        let value = self
            .value
            .checked_add(item.value)
            .ok_or_else(|| KnapsackError::InvalidCandidate("value overflow".into()))?;
        self.contents.push(item);
        self.weight = weight;
        self.value = value;
        Ok(())
    }

    /// Removes the first occurrence of `item`.
    pub fn remove(&mut self, item: &Item) -> Result<()> {
        let index = self
            .contents
            .iter()
            .position(|it| it == item)
            .ok_or(KnapsackError::NotFound)?;
        self.remove_at(index);
        Ok(())
    }

    /// Swaps the item at `index` for `item`, returning the displaced one.
    ///
    /// Fails with [`KnapsackError::NotFound`] for an out-of-range index and
    /// with [`KnapsackError::CapacityExceeded`] when the swap does not fit.
    /// A swap whose total value would overflow is an
    /// [`KnapsackError::InvalidCandidate`]. The candidate is unchanged on error.
    pub fn replace_at(&mut self, index: usize, item: Item) -> Result<Item> {
        let old = *self.contents.get(index).ok_or(KnapsackError::NotFound)?;
        let slack = self.remaining() + old.weight;
        if item.weight > slack {
            return Err(KnapsackError::CapacityExceeded {
                weight: (self.weight - old.weight).saturating_add(item.weight),
                capacity: self.capacity,
            });
        }
        let value = (self.value - old.value)
            .checked_add(item.value)
            .ok_or_else(|| KnapsackError::InvalidCandidate("value overflow".into()))?;
        self.contents[index] = item;
        self.weight = self.weight - old.weight + item.weight;
        self.value = value;
        Ok(old)
    }

    /// Replaces a uniformly chosen item with a random catalog item that fits.
    ///
    /// The replacement is drawn by rejection sampling. If no catalog item can
    /// fit at the chosen position the call is a no-op, and sampling gives up
    /// after `max_attempts` draws. Returns whether a swap happened.
    pub fn replace_random<R: Rng>(&mut self, catalog: &[Item], max_attempts: usize, rng: &mut R) -> bool {
        if self.contents.is_empty() || catalog.is_empty() {
            return false;
        }
        let index = rng.random_range(0..self.contents.len());
        let slack = self.remaining() + self.contents[index].weight;
        if !catalog.iter().any(|item| item.weight <= slack) {
            return false;
        }

        for _ in 0..max_attempts {
            let Some(&item) = catalog.choose(rng) else {
                return false;
            };
            if item.weight <= slack {
                return self.replace_at(index, item).is_ok();
            }
        }
        false
    }

    /// Fills the candidate with random catalog items.
    ///
    /// Equivalent to [`fill_with_threshold`](Self::fill_with_threshold) with
    /// [`DEFAULT_PACK_THRESHOLD`].
    pub fn fill<R: Rng>(&mut self, catalog: &[Item], pack: bool, rng: &mut R) {
        self.fill_with_threshold(catalog, DEFAULT_PACK_THRESHOLD, pack, rng);
    }

    /// Fills the candidate with random catalog items.
    ///
    /// Draws uniformly random items and adds them until the first one does
    /// not fit. With `pack`, a greedy phase follows: while at least
    /// `threshold` capacity remains, the first catalog item that fits is
    /// added, and when none fits a random current item is evicted to make
    /// room. The greedy phase stops early when nothing in the catalog could
    /// ever fit, or once the eviction budget (current length plus catalog
    /// length) is spent.
    pub fn fill_with_threshold<R: Rng>(&mut self, catalog: &[Item], threshold: u64, pack: bool, rng: &mut R) {
        if catalog.is_empty() {
            return;
        }

        // Zero-weight items never fail to fit; cap the number of draws.
        let max_adds = (self.capacity as usize).saturating_add(catalog.len());
        let mut adds = 0usize;
        while adds < max_adds {
            let Some(&item) = catalog.choose(rng) else {
                break;
            };
            if self.add(item).is_err() {
                break;
            }
            adds += 1;
        }

        if !pack {
            return;
        }

        // Zero-weight items are skipped in this phase so every add shrinks
        // the remaining capacity.
        let packable = |item: &&Item| item.weight > 0;
        let lightest = catalog.iter().filter(packable).map(|item| item.weight).min();
        match lightest {
            Some(weight) if weight <= self.capacity => {}
            _ => return,
        }

        let max_evictions = self.contents.len() + catalog.len();
        let mut evictions = 0usize;
        while self.remaining() >= threshold {
            let remaining = self.remaining();
            match catalog.iter().filter(packable).find(|item| item.weight <= remaining) {
                Some(&item) => {
                    if self.add(item).is_err() {
                        break;
                    }
                }
                None => {
                    if self.contents.is_empty() || evictions >= max_evictions {
                        break;
                    }
                    let index = rng.random_range(0..self.contents.len());
                    self.remove_at(index);
                    evictions += 1;
                }
            }
        }
    }

    fn remove_at(&mut self, index: usize) -> Item {
        let item = self.contents.remove(index);
        self.weight -= item.weight;
        self.value -= item.value;
        item
    }
}

fn totals(items: &[Item]) -> Result<(u64, u64)> {
    let mut weight = 0u64;
    let mut value = 0u64;
    for item in items {
        weight = weight
            .checked_add(item.weight)
            .ok_or_else(|| KnapsackError::InvalidCandidate("weight overflow".into()))?;
        value = value
            .checked_add(item.value)
            .ok_or_else(|| KnapsackError::InvalidCandidate("value overflow".into()))?;
    }
    Ok((weight, value))
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------- KNAPSACK CONTENTS ------------")?;
        writeln!(
            f,
            "Weight: {}/{}\t\tValue: {}",
            self.weight, self.capacity, self.value
        )?;
        writeln!(f, "Object\t\t\tCount")?;
        for (item, count) in self.counts() {
            writeln!(f, "{item}\t\t\t{count}")?;
        }
        Ok(())
    }
}
