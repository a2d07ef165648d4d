//! Error taxonomy for knapsack operations, engines and input parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum KnapsackError {
    /// Adding or swapping in an item would push the weight over capacity.
    #[error("capacity exceeded: weight {weight} > capacity {capacity}")]
    CapacityExceeded {
        /// Weight the candidate would have had after the operation.
        weight: u64,
        /// Capacity of the candidate.
        capacity: u64,
    },

    /// The item (or position) is not present in the candidate.
    #[error("item not found in candidate")]
    NotFound,

    /// Contents and cached aggregates disagree.
    #[error("invalid candidate: {0}")]
    InvalidCandidate(String),

    /// An input line that cannot be interpreted where one is required.
    #[error("malformed input at line {line}: {content:?}")]
    MalformedInput {
        /// 1-based line number (0 when the input is empty).
        line: usize,
        /// Offending line content.
        content: String,
    },

    /// The input file does not exist.
    #[error("file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Engine configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, KnapsackError>;
