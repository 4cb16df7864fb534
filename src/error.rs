//! Error taxonomy for sample-space construction and probability computation.
//!
//! Every variant belongs to one [`ErrorKind`]: either the caller passed an
//! argument outside the function's domain, or the probability would require
//! dividing by a zero total mass.

use serde::Serialize;
use thiserror::Error;

/// Coarse category of a [`ProbabilityError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Input outside the accepted domain (negative flips, negative weights, ...).
    InvalidArgument,
    /// Total probability mass is zero, so no ratio can be formed.
    DivisionByZero,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbabilityError {
    #[error("flip count must be non-negative, got {0}")]
    NegativeFlipCount(i32),

    #[error("cannot enumerate {num_flips} flips (max {max})")]
    TooManyFlips { num_flips: i32, max: i32 },

    #[error("outcome {outcome} has negative weight {weight}")]
    NegativeWeight { outcome: String, weight: i64 },

    #[error("total weight overflows a 64-bit count")]
    WeightOverflow,

    #[error("sample space has no outcomes")]
    EmptySampleSpace,

    #[error("sample space has zero total weight")]
    ZeroTotalWeight,

    #[error("trial count must be positive")]
    InvalidTrialCount,
}

impl ProbabilityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProbabilityError::NegativeFlipCount(_)
            | ProbabilityError::TooManyFlips { .. }
            | ProbabilityError::NegativeWeight { .. }
            | ProbabilityError::WeightOverflow
            | ProbabilityError::InvalidTrialCount => ErrorKind::InvalidArgument,
            ProbabilityError::EmptySampleSpace | ProbabilityError::ZeroTotalWeight => {
                ErrorKind::DivisionByZero
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbabilityError>;
