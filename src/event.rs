//! Event matching: select the outcomes of a sample space that satisfy a condition.

use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::error::{ProbabilityError, Result};
use crate::types::{checked_weight, SampleSpace};

/// The event defined by `condition`: every outcome for which it holds.
///
/// The condition runs exactly once per outcome, in ascending outcome order.
/// An empty set is a valid result when nothing matches.
pub fn get_matching_event<T, F>(condition: F, sample_space: &SampleSpace<T>) -> BTreeSet<T>
where
    T: Ord + Clone,
    F: Fn(&T) -> bool,
{
    sample_space
        .outcomes()
        .filter(|outcome| condition(outcome))
        .cloned()
        .collect()
}

/// Summed weight of the outcomes matching `condition` (the matched count for
/// a uniform space), evaluating the condition once per outcome.
///
/// Fails like [`SampleSpace::total_weight`] on a negative weight or an
/// overflowing sum.
pub fn event_weight<T, F>(condition: F, sample_space: &SampleSpace<T>) -> Result<u64>
where
    T: Ord + Debug,
    F: Fn(&T) -> bool,
{
    let mut matched: u64 = 0;
    for (outcome, weight) in sample_space.iter() {
        if condition(outcome) {
            matched = matched
                .checked_add(checked_weight(outcome, weight)?)
                .ok_or(ProbabilityError::WeightOverflow)?;
        }
    }
    Ok(matched)
}
