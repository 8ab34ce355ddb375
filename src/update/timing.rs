//! Sources of the pseudo-random "seconds elapsed" seed.
//!
//! The value is cosmetic and non-cryptographic. Tests inject [`FixedTiming`]
//! or [`ScriptedTiming`] instead of asserting on real randomness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::ops::RangeInclusive;

/// Produces a fresh elapsed value each time one is needed.
pub trait TimingSource: Send {
    fn next_elapsed(&mut self) -> u32;
}

/// Uniformly random values from an inclusive range.
#[derive(Debug, Clone)]
pub struct RandomTiming {
    rng: StdRng,
    range: RangeInclusive<u32>,
}

impl RandomTiming {
    /// Random values seeded from the operating system.
    pub fn new(range: RangeInclusive<u32>) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            range,
        }
    }

    /// Reproducible values for a given seed.
    pub fn seeded(range: RangeInclusive<u32>, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range,
        }
    }
}

impl TimingSource for RandomTiming {
    fn next_elapsed(&mut self) -> u32 {
        self.rng.random_range(self.range.clone())
    }
}

/// Always the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTiming(pub u32);

impl TimingSource for FixedTiming {
    fn next_elapsed(&mut self) -> u32 {
        self.0
    }
}

/// Values from a script, repeating the last one once the script runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedTiming {
    values: VecDeque<u32>,
    last: u32,
}

impl ScriptedTiming {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            last: 1,
        }
    }
}

impl TimingSource for ScriptedTiming {
    fn next_elapsed(&mut self) -> u32 {
        if let Some(value) = self.values.pop_front() {
            self.last = value;
        }
        self.last
    }
}
