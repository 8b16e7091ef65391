//! Uniform identifier draws.

use rand::Rng;
use std::ops::RangeInclusive;

/// Draws identifiers uniformly from an inclusive range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSampler {
    range: RangeInclusive<u32>,
}

impl IdSampler {
    /// Creates a sampler over `[min, max]`. Bounds are swapped if reversed.
    pub fn new(min: u32, max: u32) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        Self { range: lo..=hi }
    }

    /// The inclusive range this sampler draws from.
    pub fn range(&self) -> &RangeInclusive<u32> {
        &self.range
    }

    /// Draws one identifier from `rng`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.range.clone())
    }

    /// Draws one identifier from the thread-local generator.
    pub fn draw(&self) -> u32 {
        self.sample(&mut rand::rng())
    }
}

impl Default for IdSampler {
    fn default() -> Self {
        Self::new(super::DEFAULT_MIN_ID, super::DEFAULT_MAX_ID)
    }
}
