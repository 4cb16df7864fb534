//! Core data structures: coin symbols and the tagged sample space.
//!
//! A [`SampleSpace`] is either a set of equally likely outcomes or a mapping
//! from outcome to occurrence count. It is built once (by
//! [`crate::sample_space::generate_coin_sample_space`] or directly by the
//! caller) and then only read by the matcher, the calculator and the
//! simulation engine.

use std::collections::{btree_map, btree_set, BTreeMap, BTreeSet};
use std::fmt::{self, Debug};

use serde::Serialize;

use crate::error::{ProbabilityError, Result};

/// One binary trial result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Coin {
    Heads,
    Tails,
}

impl Coin {
    pub const BOTH: [Coin; 2] = [Coin::Heads, Coin::Tails];
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coin::Heads => write!(f, "Heads"),
            Coin::Tails => write!(f, "Tails"),
        }
    }
}

/// Sample space over outcomes of type `T`.
///
/// - `Uniform`: every outcome in the set has the same probability.
/// - `Weighted`: outcome → occurrence count. Weights must be non-negative and
///   sum to a positive total. [`SampleSpace::weighted`] checks each entry, and
///   [`SampleSpace::total_weight`] checks again when a probability is computed,
///   since the variants are plain data a caller can build directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SampleSpace<T: Ord> {
    Uniform(BTreeSet<T>),
    Weighted(BTreeMap<T, i64>),
}

impl<T: Ord> SampleSpace<T> {
    /// Equally likely outcomes. Duplicates collapse into one outcome.
    pub fn uniform<I: IntoIterator<Item = T>>(outcomes: I) -> Self {
        SampleSpace::Uniform(outcomes.into_iter().collect())
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        match self {
            SampleSpace::Uniform(set) => set.len(),
            SampleSpace::Weighted(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self, SampleSpace::Uniform(_))
    }

    /// Weight of `outcome`: 1 for members of a uniform space, the stored count
    /// for a weighted one, `None` if the outcome is absent.
    pub fn weight_of(&self, outcome: &T) -> Option<i64> {
        match self {
            SampleSpace::Uniform(set) => set.contains(outcome).then_some(1),
            SampleSpace::Weighted(map) => map.get(outcome).copied(),
        }
    }

    /// Iterate `(outcome, weight)` pairs in ascending outcome order.
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            SampleSpace::Uniform(set) => Iter::Uniform(set.iter()),
            SampleSpace::Weighted(map) => Iter::Weighted(map.iter()),
        }
    }

    /// Iterate outcomes only, in ascending order.
    pub fn outcomes(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(|(outcome, _)| outcome)
    }
}

/// `weight` as an unsigned mass, or [`ProbabilityError::NegativeWeight`].
pub fn checked_weight<T: Debug>(outcome: &T, weight: i64) -> Result<u64> {
    u64::try_from(weight).map_err(|_| ProbabilityError::NegativeWeight {
        outcome: format!("{:?}", outcome),
        weight,
    })
}

impl<T: Ord + Debug> SampleSpace<T> {
    /// Weighted outcomes. Repeated outcomes accumulate their weights.
    ///
    /// Every entry is checked on its own, so a negative weight is rejected even
    /// when a repeat of the same outcome would cancel it. A per-outcome sum
    /// beyond `i64::MAX` fails with [`ProbabilityError::WeightOverflow`].
    pub fn weighted<I: IntoIterator<Item = (T, i64)>>(entries: I) -> Result<Self> {
        let mut weights: BTreeMap<T, i64> = BTreeMap::new();
        for (outcome, weight) in entries {
            checked_weight(&outcome, weight)?;
            let slot = weights.entry(outcome).or_insert(0);
            *slot = slot
                .checked_add(weight)
                .ok_or(ProbabilityError::WeightOverflow)?;
        }
        Ok(SampleSpace::Weighted(weights))
    }

    /// Total probability mass, validating the weighted-space invariants.
    ///
    /// Errors: [`ProbabilityError::EmptySampleSpace`] for no outcomes,
    /// [`ProbabilityError::NegativeWeight`] for the first negative weight,
    /// [`ProbabilityError::WeightOverflow`] if the sum exceeds `u64::MAX`,
    /// [`ProbabilityError::ZeroTotalWeight`] if every weight is zero.
    pub fn total_weight(&self) -> Result<u64> {
        if self.is_empty() {
            return Err(ProbabilityError::EmptySampleSpace);
        }
        let mut total: u64 = 0;
        for (outcome, weight) in self.iter() {
            total = total
                .checked_add(checked_weight(outcome, weight)?)
                .ok_or(ProbabilityError::WeightOverflow)?;
        }
        if total == 0 {
            return Err(ProbabilityError::ZeroTotalWeight);
        }
        Ok(total)
    }
}

/// Iterator over `(outcome, weight)` pairs of a [`SampleSpace`].
pub enum Iter<'a, T> {
    Uniform(btree_set::Iter<'a, T>),
    Weighted(btree_map::Iter<'a, T, i64>),
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, i64);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Iter::Uniform(it) => it.next().map(|outcome| (outcome, 1)),
            Iter::Weighted(it) => it.next().map(|(outcome, &weight)| (outcome, weight)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Iter::Uniform(it) => it.size_hint(),
            Iter::Weighted(it) => it.size_hint(),
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a SampleSpace<T> {
    type Item = (&'a T, i64);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_accumulates_duplicates() {
        let space = SampleSpace::weighted([(1u32, 2), (0, 1), (1, 3)]).unwrap();
        assert_eq!(space.len(), 2);
        assert_eq!(space.weight_of(&1), Some(5));
        assert_eq!(space.weight_of(&0), Some(1));
        assert_eq!(space.weight_of(&7), None);
    }

    #[test]
    fn test_uniform_weights_are_one() {
        let space = SampleSpace::uniform(["a", "b", "b", "c"]);
        assert_eq!(space.len(), 3);
        assert!(space.is_uniform());
        assert_eq!(space.weight_of(&"b"), Some(1));
        let pairs: Vec<_> = space.iter().collect();
        assert_eq!(pairs, vec![(&"a", 1), (&"b", 1), (&"c", 1)]);
    }

    #[test]
    fn test_total_weight() {
        let space = SampleSpace::weighted([(0u32, 1), (1, 2), (2, 1)]).unwrap();
        assert_eq!(space.total_weight(), Ok(4));

        let uniform = SampleSpace::uniform(1..=6);
        assert_eq!(uniform.total_weight(), Ok(6));
    }

    #[test]
    fn test_total_weight_errors() {
        let empty: SampleSpace<u32> = SampleSpace::uniform(Vec::new());
        assert_eq!(empty.total_weight(), Err(ProbabilityError::EmptySampleSpace));

        let empty_weighted: SampleSpace<u32> = SampleSpace::Weighted(BTreeMap::new());
        assert_eq!(
            empty_weighted.total_weight(),
            Err(ProbabilityError::EmptySampleSpace)
        );

        let zeros = SampleSpace::weighted([(0u32, 0), (1, 0)]).unwrap();
        assert_eq!(zeros.total_weight(), Err(ProbabilityError::ZeroTotalWeight));

        let negative = SampleSpace::Weighted(BTreeMap::from([(0u32, 3), (1, -1)]));
        assert_eq!(
            negative.total_weight(),
            Err(ProbabilityError::NegativeWeight {
                outcome: "1".to_string(),
                weight: -1
            })
        );
    }

    #[test]
    fn test_weighted_rejects_negative_entry_before_merging() {
        assert_eq!(
            SampleSpace::weighted([(1u32, 5), (1, -3), (2, 2)]),
            Err(ProbabilityError::NegativeWeight {
                outcome: "1".to_string(),
                weight: -3
            })
        );
    }

    #[test]
    fn test_weighted_rejects_per_outcome_overflow() {
        assert_eq!(
            SampleSpace::weighted([(1u32, i64::MAX), (1, 1)]),
            Err(ProbabilityError::WeightOverflow)
        );
    }

    #[test]
    fn test_total_weight_near_i64_max() {
        let two = SampleSpace::Weighted(BTreeMap::from([(0u32, i64::MAX), (1, i64::MAX)]));
        assert_eq!(two.total_weight(), Ok(2 * i64::MAX as u64));

        let three = SampleSpace::Weighted(BTreeMap::from([
            (0u32, i64::MAX),
            (1, i64::MAX),
            (2, i64::MAX),
        ]));
        assert_eq!(three.total_weight(), Err(ProbabilityError::WeightOverflow));
    }

    #[test]
    fn test_coin_display() {
        assert_eq!(Coin::Heads.to_string(), "Heads");
        assert_eq!(Coin::Tails.to_string(), "Tails");
    }
}
