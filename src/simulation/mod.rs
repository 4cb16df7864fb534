//! Monte Carlo counterparts of the exact computations.
//!
//! - [`sampler`]: weighted outcome sampling from a [`crate::SampleSpace`]
//! - [`engine`]: parallel, seed-deterministic estimation of event probabilities
//!   and empirical coin-flip sample spaces

pub mod engine;
pub mod sampler;

pub use engine::{estimate_event_probability, simulate_coin_flips, SimulationResult};
pub use sampler::{sample_outcome, WeightedSampler};
