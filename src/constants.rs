//! Shared constants for sample-space generation, simulation and the binaries.
//!
//! The enumeration limit follows from the sequence encoding used by
//! [`crate::coin_mechanics::CoinSequences`]: a run of `n` flips is one `u64`
//! mask with one bit per flip, set when that flip landed Tails.

/// Number of flips used when nothing else is configured (`PROB_NUM_FLIPS`).
pub const DEFAULT_NUM_FLIPS: i32 = 10;

/// Largest flip count whose 2^n sequences fit a 64-bit mask.
///
/// Enumeration is exponential: 30 flips already visit ~1.07e9 sequences, so
/// callers should stay far below this bound in practice.
pub const MAX_ENUMERABLE_FLIPS: i32 = 63;

/// Flip count from which exhaustive enumeration is slow enough (2^28 ≈ 2.7e8
/// sequences) that the binaries warn before starting.
pub const ENUMERATION_WARN_FLIPS: i32 = 28;

/// Default RNG seed for Monte Carlo estimates (`PROB_SEED`).
pub const DEFAULT_SEED: u64 = 42;

/// Default number of Monte Carlo trials in the binaries.
pub const DEFAULT_NUM_TRIALS: usize = 1_000_000;

/// Default rayon thread count when neither `RAYON_NUM_THREADS` nor
/// `OMP_NUM_THREADS` is set.
pub const DEFAULT_NUM_THREADS: usize = 8;

/// Interval used by the classic "8 to 10 heads out of 10 flips" exercise.
pub const DEFAULT_INTERVAL_MIN: u32 = 8;
pub const DEFAULT_INTERVAL_MAX: u32 = 10;
