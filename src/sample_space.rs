//! Weighted sample spaces for repeated coin flips.
//!
//! [`generate_coin_sample_space`] enumerates all 2^n equally likely sequences
//! and groups them by Heads count, so the weight of key `k` is the binomial
//! coefficient C(n, k). Enumeration is exponential in `n`; keep `n` small
//! (tens of flips, not hundreds).

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::debug;

use crate::coin_mechanics::{checked_num_flips, heads_in_mask, num_sequences};
use crate::error::Result;
use crate::types::SampleSpace;

/// Build `{heads_count: number_of_sequences}` for `num_flips` flips.
///
/// `num_flips = 0` yields `{0: 1}` (the single empty sequence). Negative counts
/// fail with [`crate::ProbabilityError::NegativeFlipCount`], counts above
/// [`crate::constants::MAX_ENUMERABLE_FLIPS`] with
/// [`crate::ProbabilityError::TooManyFlips`].
pub fn generate_coin_sample_space(num_flips: i32) -> Result<SampleSpace<u32>> {
    let n = checked_num_flips(num_flips)?;
    let start = Instant::now();

    let mut counts = vec![0i64; n as usize + 1];
    for mask in 0..num_sequences(n) {
        counts[heads_in_mask(mask, n) as usize] += 1;
    }

    let weights: BTreeMap<u32, i64> = counts
        .into_iter()
        .enumerate()
        .map(|(heads, count)| (heads as u32, count))
        .collect();

    debug!(
        num_flips = n,
        sequences = num_sequences(n),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "enumerated coin sample space"
    );

    Ok(SampleSpace::Weighted(weights))
}

/// C(n, k) by the multiplicative formula, exact for every `n` this crate can enumerate.
pub fn binomial(n: u32, k: u32) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbabilityError;

    #[test]
    fn test_two_flips() {
        let space = generate_coin_sample_space(2).unwrap();
        assert_eq!(space, SampleSpace::weighted([(0, 1), (1, 2), (2, 1)]).unwrap());
    }

    #[test]
    fn test_zero_flips() {
        let space = generate_coin_sample_space(0).unwrap();
        assert_eq!(space, SampleSpace::weighted([(0, 1)]).unwrap());
    }

    #[test]
    fn test_ten_flips_match_binomial() {
        let space = generate_coin_sample_space(10).unwrap();
        assert_eq!(space.len(), 11);
        for k in 0..=10u32 {
            assert_eq!(space.weight_of(&k), Some(binomial(10, k) as i64), "k={k}");
        }
        assert_eq!(space.total_weight(), Ok(1024));
    }

    #[test]
    fn test_negative_flips_rejected() {
        assert_eq!(
            generate_coin_sample_space(-4),
            Err(ProbabilityError::NegativeFlipCount(-4))
        );
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(10, 5), 252);
        assert_eq!(binomial(3, 4), 0);
        assert_eq!(binomial(63, 31), 916_312_070_471_295_267);
    }
}
