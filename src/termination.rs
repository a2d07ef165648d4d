//! Stopping rules for the search engines.
//!
//! The genetic engine stops at the first of: wall-clock budget spent,
//! too many generations without a strictly better best, or a hard
//! generation cap. The annealing engine stops when it has cooled down,
//! with an optional time budget and iteration cap layered on top.

use std::fmt;
use std::time::{Duration, Instant};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The wall-clock budget elapsed.
    TimeLimit,
    /// No strictly better best for the configured number of generations.
    Stagnation,
    /// The hard generation cap was reached.
    MaxGenerations,
    /// The temperature dropped to the minimum.
    Cooled,
    /// The hard iteration cap was reached.
    IterationLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::TimeLimit => "time limit",
            StopReason::Stagnation => "stagnation",
            StopReason::MaxGenerations => "max generations",
            StopReason::Cooled => "cooled",
            StopReason::IterationLimit => "iteration limit",
        };
        f.write_str(s)
    }
}

/// Tracks elapsed time, stagnation and generation count for one run.
#[derive(Debug, Clone)]
pub struct Termination {
    started: Instant,
    time_limit: Option<Duration>,
    stagnation_limit: usize,
    max_generations: usize,
    stagnation: usize,
    generations: usize,
}

impl Termination {
    /// Starts the clock.
    ///
    /// `stagnation_limit` and `max_generations` of 0 disable that rule.
    pub fn new(time_limit_ms: Option<u64>, stagnation_limit: usize, max_generations: usize) -> Self {
        Self {
            started: Instant::now(),
            time_limit: time_limit_ms.map(Duration::from_millis),
            stagnation_limit,
            max_generations,
            stagnation: 0,
            generations: 0,
        }
    }

    /// A policy with only a wall-clock budget.
    pub fn time_only(time_limit_ms: Option<u64>) -> Self {
        Self::new(time_limit_ms, 0, 0)
    }

    /// Records one finished generation.
    ///
    /// A strict improvement resets the stagnation counter.
    pub fn record(&mut self, improved: bool) {
        self.generations += 1;
        if improved {
            self.stagnation = 0;
        } else {
            self.stagnation += 1;
        }
    }

    pub fn time_exceeded(&self) -> bool {
        self.time_limit.is_some_and(|limit| self.started.elapsed() >= limit)
    }

    /// Returns the reason to stop now, if any.
    pub fn check(&self) -> Option<StopReason> {
        if self.time_exceeded() {
            return Some(StopReason::TimeLimit);
        }
        if self.stagnation_limit > 0 && self.stagnation >= self.stagnation_limit {
            return Some(StopReason::Stagnation);
        }
        if self.max_generations > 0 && self.generations >= self.max_generations {
            return Some(StopReason::MaxGenerations);
        }
        None
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    pub fn generations(&self) -> usize {
        self.generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rules_never_stops() {
        let mut t = Termination::new(None, 0, 0);
        for _ in 0..1000 {
            t.record(false);
        }
        assert_eq!(t.check(), None);
    }

    #[test]
    fn test_stagnation_resets_on_improvement() {
        let mut t = Termination::new(None, 3, 0);
        t.record(false);
        t.record(false);
        t.record(true);
        assert_eq!(t.stagnation(), 0);
        t.record(false);
        t.record(false);
        assert_eq!(t.check(), None);
        t.record(false);
        assert_eq!(t.check(), Some(StopReason::Stagnation));
    }

    #[test]
    fn test_max_generations() {
        let mut t = Termination::new(None, 0, 2);
        t.record(true);
        assert_eq!(t.check(), None);
        t.record(true);
        assert_eq!(t.check(), Some(StopReason::MaxGenerations));
        assert_eq!(t.generations(), 2);
    }

    #[test]
    fn test_time_limit() {
        let t = Termination::time_only(Some(1));
        std::thread::sleep(Duration::from_millis(5));
        assert!(t.time_exceeded());
        assert_eq!(t.check(), Some(StopReason::TimeLimit));
    }

    #[test]
    fn test_time_limit_takes_precedence() {
        let mut t = Termination::new(Some(1), 1, 1);
        t.record(false);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(t.check(), Some(StopReason::TimeLimit));
    }
}
