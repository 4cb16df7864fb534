//! Weighted outcome sampling.
//!
//! Outcomes are laid out in ascending order with a cumulative weight table;
//! a uniform draw in `[0, total)` is mapped back to an outcome by binary search
//! (`partition_point`). Zero-weight outcomes occupy an empty range and are
//! never drawn.

use std::fmt::Debug;

use rand::Rng;

use crate::error::Result;
use crate::types::SampleSpace;

/// Precomputed cumulative weights for repeated draws from one sample space.
pub struct WeightedSampler<'a, T> {
    outcomes: Vec<&'a T>,
    /// `cumulative[i]` = sum of weights of outcomes `0..=i`.
    cumulative: Vec<u64>,
    total: u64,
}

impl<'a, T: Ord + Debug> WeightedSampler<'a, T> {
    pub fn new(sample_space: &'a SampleSpace<T>) -> Result<Self> {
        // total_weight() rejects negative weights and overflow, so the
        // running sums below stay in range.
        let total = sample_space.total_weight()?;
        let mut outcomes = Vec::with_capacity(sample_space.len());
        let mut cumulative = Vec::with_capacity(sample_space.len());
        let mut running = 0u64;
        for (outcome, weight) in sample_space.iter() {
            running += weight as u64;
            outcomes.push(outcome);
            cumulative.push(running);
        }
        Ok(WeightedSampler {
            outcomes,
            cumulative,
            total,
        })
    }
}

impl<'a, T> WeightedSampler<'a, T> {
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn outcomes(&self) -> &[&'a T] {
        &self.outcomes
    }

    /// Map a draw in `[0, total)` to the index of its outcome.
    #[inline(always)]
    pub fn index_for(&self, draw: u64) -> usize {
        debug_assert!(draw < self.total);
        self.cumulative.partition_point(|&c| c <= draw)
    }

    /// Draw one outcome index in proportion to its weight.
    #[inline]
    pub fn sample_index<R: Rng>(&self, rng: &mut R) -> usize {
        self.index_for(rng.random_range(0..self.total))
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> &'a T {
        self.outcomes[self.sample_index(rng)]
    }
}

/// Draw a single outcome from `sample_space`.
///
/// For many draws build a [`WeightedSampler`] once instead.
pub fn sample_outcome<'a, T, R>(sample_space: &'a SampleSpace<T>, rng: &mut R) -> Result<&'a T>
where
    T: Ord + Debug,
    R: Rng,
{
    Ok(WeightedSampler::new(sample_space)?.sample(rng))
}
