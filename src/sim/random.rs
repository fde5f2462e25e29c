//! Injectable random source
//!
//! Every random draw a level makes (placement, trash roll, catalog pick,
//! scenery) goes through [`RandomSource`], so a run can be seeded for
//! reproducibility or scripted outright in tests.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of the handful of draws a level session needs
pub trait RandomSource {
    /// Integer roll in `1..=100`
    fn percent(&mut self) -> u32;
    /// Index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
    /// Float in `[min, max)`; returns `min` for an empty or inverted range
    fn float_between(&mut self, min: f32, max: f32) -> f32;
    /// Integer in `min..=max`; returns `min` for an inverted range
    fn int_between(&mut self, min: i32, max: i32) -> i32;
}

/// PCG-backed source, reproducible from its seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn percent(&mut self) -> u32 {
        self.rng.random_range(1..=100)
    }

    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index drawn from an empty range");
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    fn float_between(&mut self, min: f32, max: f32) -> f32 {
        if !(max > min) {
            return min;
        }
        self.rng.random_range(min..max)
    }

    fn int_between(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Pre-recorded draws, replayed in order
///
/// Floats are stored as unit fractions and mapped onto the requested range.
/// When a queue runs dry the source falls back to: percent 100 (critter),
/// index 0, the range midpoint, and `min` for integers.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    percents: VecDeque<u32>,
    indices: VecDeque<usize>,
    fractions: VecDeque<f32>,
    ints: VecDeque<i32>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next flip reveals the critter at `index`
    pub fn critter(mut self, index: usize) -> Self {
        self.percents.push_back(100);
        self.indices.push_back(index);
        self
    }

    /// Next flip reveals the trash entry at `index`
    pub fn trash(mut self, index: usize) -> Self {
        self.percents.push_back(1);
        self.indices.push_back(index);
        self
    }

    /// Queue raw percent rolls
    pub fn percents(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.percents.extend(rolls);
        self
    }

    /// Queue unit fractions (0-1) for float draws
    pub fn fractions(mut self, fractions: impl IntoIterator<Item = f32>) -> Self {
        self.fractions.extend(fractions);
        self
    }

    /// Queue integer draws
    pub fn ints(mut self, ints: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(ints);
        self
    }

    /// Draws still queued (percent, index, fraction, int)
    pub fn remaining(&self) -> (usize, usize, usize, usize) {
        (
            self.percents.len(),
            self.indices.len(),
            self.fractions.len(),
            self.ints.len(),
        )
    }
}

impl RandomSource for ScriptedRandom {
    fn percent(&mut self) -> u32 {
        self.percents.pop_front().unwrap_or(100).clamp(1, 100)
    }

    fn index(&mut self, len: usize) -> usize {
        let index = self.indices.pop_front().unwrap_or(0);
        index.min(len.saturating_sub(1))
    }

    fn float_between(&mut self, min: f32, max: f32) -> f32 {
        let t = self.fractions.pop_front().unwrap_or(0.5).clamp(0.0, 1.0);
        if !(max > min) {
            return min;
        }
        min + (max - min) * t
    }

    fn int_between(&mut self, min: i32, max: i32) -> i32 {
        let value = self.ints.pop_front().unwrap_or(min);
        if max <= min {
            return min;
        }
        value.clamp(min, max)
    }
}
