//! Exact event probabilities over uniform and weighted sample spaces.
//!
//! - Uniform: P(E) = |E| / |Ω|
//! - Weighted: P(E) = Σ_{o ∈ E} w(o) / Σ_{o ∈ Ω} w(o)
//!
//! The branch is chosen once per call from the [`SampleSpace`] tag.

use std::fmt::Debug;

use tracing::trace;

use crate::error::Result;
use crate::event::event_weight;
use crate::types::SampleSpace;

/// Inclusive bounds check: `minimum <= number <= maximum`.
#[inline]
pub fn is_in_interval<N: PartialOrd>(number: N, minimum: N, maximum: N) -> bool {
    minimum <= number && number <= maximum
}

/// Probability of the event defined by `condition`, in `[0, 1]`.
///
/// Errors: [`crate::ProbabilityError::EmptySampleSpace`] for an empty space,
/// [`crate::ProbabilityError::ZeroTotalWeight`] when every weight is zero,
/// [`crate::ProbabilityError::NegativeWeight`] for any negative weight,
/// [`crate::ProbabilityError::WeightOverflow`] when the total exceeds `u64::MAX`.
pub fn compute_event_probability<T, F>(condition: F, sample_space: &SampleSpace<T>) -> Result<f64>
where
    T: Ord + Debug,
    F: Fn(&T) -> bool,
{
    let total = sample_space.total_weight()?;

    let probability = match sample_space {
        SampleSpace::Uniform(outcomes) => {
            let matched = event_weight(condition, sample_space)?;
            trace!(matched, size = outcomes.len(), "uniform event probability");
            matched as f64 / outcomes.len() as f64
        }
        SampleSpace::Weighted(_) => {
            let matched = event_weight(condition, sample_space)?;
            trace!(matched, total, "weighted event probability");
            matched as f64 / total as f64
        }
    };

    debug_assert!((0.0..=1.0).contains(&probability));
    Ok(probability)
}

/// Probability that the outcome falls in `[minimum, maximum]` (inclusive).
pub fn compute_interval_probability<T>(
    sample_space: &SampleSpace<T>,
    minimum: T,
    maximum: T,
) -> Result<f64>
where
    T: Ord + Debug,
{
    compute_event_probability(
        |outcome| is_in_interval(outcome, &minimum, &maximum),
        sample_space,
    )
}
