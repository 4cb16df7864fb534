//! # event_probability — exact event probabilities over discrete sample spaces
//!
//! Computes P(E) for an event E defined by a predicate over a finite sample
//! space Ω, where Ω is either a set of equally likely outcomes or a mapping from
//! outcome to occurrence count.
//!
//! ## Pipeline
//!
//! | Step | Module | Description |
//! |------|--------|-------------|
//! | 1 | [`sample_space`] | Enumerate 2^n coin-flip sequences, group by Heads count: `{k: C(n, k)}` |
//! | 2 | [`event`] | Select the outcomes satisfying a condition (each outcome tested once) |
//! | 3 | [`probability`] | P(E) = \|E\| / \|Ω\| (uniform) or Σ w(E) / Σ w(Ω) (weighted) |
//!
//! [`simulation`] cross-checks step 3 by Monte Carlo sampling, and [`report`]
//! packages results for the `coin-probability` and `coin-sweep` binaries.
//!
//! ## Example
//!
//! ```
//! use event_probability::{compute_event_probability, generate_coin_sample_space};
//!
//! let space = generate_coin_sample_space(2).unwrap();
//! let p = compute_event_probability(|&heads| heads == 1, &space).unwrap();
//! assert_eq!(p, 0.5);
//! ```
//!
//! ## Sample-space shape
//!
//! [`SampleSpace`] is an explicit tagged variant (`Uniform` / `Weighted`); the
//! calculator branches on the tag once per call. Weighted spaces must have
//! non-negative weights and a positive total, checked when a probability is
//! computed ([`ProbabilityError`]).
//!
//! All functions are pure and safe to call from several threads. Enumeration
//! cost is exponential in the flip count; keep it in the tens.

pub mod coin_mechanics;
pub mod constants;
pub mod env_config;
pub mod error;
pub mod event;
pub mod probability;
pub mod report;
pub mod sample_space;
pub mod simulation;
pub mod types;

pub use error::{ErrorKind, ProbabilityError, Result};
pub use event::get_matching_event;
pub use probability::{compute_event_probability, compute_interval_probability, is_in_interval};
pub use sample_space::generate_coin_sample_space;
pub use types::{Coin, SampleSpace};
