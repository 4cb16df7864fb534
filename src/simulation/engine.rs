//! Simulation engine: Monte Carlo estimates in parallel.
//!
//! Trials are split into fixed-size chunks. Chunk `c` draws from its own
//! `SmallRng` seeded with `seed.wrapping_add(c)`, so results depend only on
//! `(seed, num_trials)` and not on the rayon thread count.

use std::fmt::Debug;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::coin_mechanics::{checked_num_flips, heads_in_mask, num_sequences};
use crate::error::{ProbabilityError, Result};
use crate::simulation::sampler::WeightedSampler;
use crate::types::SampleSpace;

/// Trials drawn from one RNG stream.
const TRIALS_PER_CHUNK: usize = 4096;

/// Outcome of a Monte Carlo probability estimate.
#[derive(Clone, Debug, Serialize)]
pub struct SimulationResult {
    pub trials: usize,
    pub hits: u64,
    pub estimate: f64,
    /// Binomial standard error sqrt(p(1-p)/n) of `estimate`.
    pub std_error: f64,
    pub elapsed_ms: f64,
}

impl SimulationResult {
    fn from_counts(trials: usize, hits: u64, elapsed_ms: f64) -> Self {
        let estimate = hits as f64 / trials as f64;
        let std_error = (estimate * (1.0 - estimate) / trials as f64).sqrt();
        SimulationResult {
            trials,
            hits,
            estimate,
            std_error,
            elapsed_ms,
        }
    }
}

fn chunk_bounds(chunk: usize, num_trials: usize) -> (usize, usize) {
    let begin = chunk * TRIALS_PER_CHUNK;
    (begin, (begin + TRIALS_PER_CHUNK).min(num_trials))
}

/// Estimate P(condition) by drawing `num_trials` outcomes in proportion to their weight.
///
/// The condition is evaluated once per distinct outcome before sampling starts.
/// Fails with [`ProbabilityError::InvalidTrialCount`] for zero trials and with
/// the sample-space errors of [`SampleSpace::total_weight`].
pub fn estimate_event_probability<T, F>(
    condition: F,
    sample_space: &SampleSpace<T>,
    num_trials: usize,
    seed: u64,
) -> Result<SimulationResult>
where
    T: Ord + Debug + Sync,
    F: Fn(&T) -> bool,
{
    if num_trials == 0 {
        return Err(ProbabilityError::InvalidTrialCount);
    }
    let sampler = WeightedSampler::new(sample_space)?;
    let matched: Vec<bool> = sampler
        .outcomes()
        .iter()
        .map(|outcome| condition(outcome))
        .collect();

    let start = Instant::now();
    let num_chunks = num_trials.div_ceil(TRIALS_PER_CHUNK);

    let hits: u64 = (0..num_chunks)
        .into_par_iter()
        .map(|chunk| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(chunk as u64));
            let (begin, end) = chunk_bounds(chunk, num_trials);
            let mut hits = 0u64;
            for _ in begin..end {
                if matched[sampler.sample_index(&mut rng)] {
                    hits += 1;
                }
            }
            hits
        })
        .sum();

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(num_trials, hits, seed, elapsed_ms, "estimated event probability");

    Ok(SimulationResult::from_counts(num_trials, hits, elapsed_ms))
}

/// Flip `num_flips` fair coins `num_trials` times and count Heads per run.
///
/// Returns the empirical `{heads_count: runs}` sample space; counts never
/// observed are kept with weight 0 so the keys match
/// [`crate::generate_coin_sample_space`].
pub fn simulate_coin_flips(
    num_flips: i32,
    num_trials: usize,
    seed: u64,
) -> Result<SampleSpace<u32>> {
    let n = checked_num_flips(num_flips)?;
    if num_trials == 0 {
        return Err(ProbabilityError::InvalidTrialCount);
    }

    let start = Instant::now();
    let low_bits = num_sequences(n) - 1;
    let num_chunks = num_trials.div_ceil(TRIALS_PER_CHUNK);

    let counts: Vec<i64> = (0..num_chunks)
        .into_par_iter()
        .map(|chunk| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(chunk as u64));
            let (begin, end) = chunk_bounds(chunk, num_trials);
            let mut counts = vec![0i64; n as usize + 1];
            for _ in begin..end {
                let mask = rng.random::<u64>() & low_bits;
                counts[heads_in_mask(mask, n) as usize] += 1;
            }
            counts
        })
        .reduce(
            || vec![0i64; n as usize + 1],
            |mut acc, chunk_counts| {
                for (a, c) in acc.iter_mut().zip(chunk_counts) {
                    *a += c;
                }
                acc
            },
        );

    debug!(
        num_flips = n,
        num_trials,
        seed,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "simulated coin flips"
    );

    SampleSpace::weighted(
        counts
            .into_iter()
            .enumerate()
            .map(|(heads, runs)| (heads as u32, runs)),
    )
}
