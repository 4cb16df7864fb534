//! Coin-flip sequences and their encoding as bitmasks.
//!
//! A run of `n` flips is stored as a `u64` mask: bit `n-1-j` is set when flip
//! `j` landed Tails. Counting masks upward therefore visits sequences in the
//! same lexicographic order as a Heads-before-Tails cartesian product
//! (`HH..H`, `HH..T`, ..., `TT..T`).

use crate::constants::{ENUMERATION_WARN_FLIPS, MAX_ENUMERABLE_FLIPS};
use crate::error::{ProbabilityError, Result};
use crate::types::Coin;

/// Validate a flip count and convert it to the unsigned width used internally.
pub fn checked_num_flips(num_flips: i32) -> Result<u32> {
    if num_flips < 0 {
        return Err(ProbabilityError::NegativeFlipCount(num_flips));
    }
    if num_flips > MAX_ENUMERABLE_FLIPS {
        return Err(ProbabilityError::TooManyFlips {
            num_flips,
            max: MAX_ENUMERABLE_FLIPS,
        });
    }
    Ok(num_flips as u32)
}

/// Log a warning when enumerating `num_flips` flips will visit at least
/// 2^[`ENUMERATION_WARN_FLIPS`] sequences. Returns whether it warned.
///
/// Counts that [`checked_num_flips`] rejects are left to that error.
pub fn warn_if_slow_enumeration(num_flips: i32) -> bool {
    if !(ENUMERATION_WARN_FLIPS..=MAX_ENUMERABLE_FLIPS).contains(&num_flips) {
        return false;
    }
    tracing::warn!(
        num_flips,
        sequences = num_sequences(num_flips as u32),
        "enumerating every sequence; this may take a long time"
    );
    true
}

/// Number of sequences for `num_flips` flips: 2^num_flips.
#[inline(always)]
pub fn num_sequences(num_flips: u32) -> u64 {
    1u64 << num_flips
}

/// Number of Heads in a sequence mask of `num_flips` flips.
#[inline(always)]
pub fn heads_in_mask(mask: u64, num_flips: u32) -> u32 {
    num_flips - mask.count_ones()
}

/// Decode a mask into its flip sequence.
pub fn decode_sequence(mask: u64, num_flips: u32) -> Vec<Coin> {
    (0..num_flips)
        .map(|j| {
            if (mask >> (num_flips - 1 - j)) & 1 == 1 {
                Coin::Tails
            } else {
                Coin::Heads
            }
        })
        .collect()
}

/// Count Heads in a decoded sequence.
pub fn count_heads(flips: &[Coin]) -> u32 {
    flips.iter().filter(|&&c| c == Coin::Heads).count() as u32
}

/// Iterator over every Heads/Tails sequence of a fixed length.
pub struct CoinSequences {
    num_flips: u32,
    next: u64,
    end: u64,
}

impl CoinSequences {
    pub fn new(num_flips: i32) -> Result<Self> {
        let num_flips = checked_num_flips(num_flips)?;
        Ok(CoinSequences {
            num_flips,
            next: 0,
            end: num_sequences(num_flips),
        })
    }
}

impl Iterator for CoinSequences {
    type Item = Vec<Coin>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let seq = decode_sequence(self.next, self.num_flips);
        self.next += 1;
        Some(seq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
