//! Catalog item.

use std::fmt;

/// An immutable `(weight, value)` pair.
///
/// Items are plain values: two items with the same weight and value are
/// the same item. Candidates copy them out of the caller's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight consumed from the knapsack capacity.
    pub weight: u64,
    /// Value contributed to the knapsack.
    pub value: u64,
}

impl Item {
    pub const fn new(weight: u64, value: u64) -> Self {
        Self { weight, value }
    }
}

impl From<(u64, u64)> for Item {
    fn from((weight, value): (u64, u64)) -> Self {
        Self::new(weight, value)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} . {})", self.weight, self.value)
    }
}
