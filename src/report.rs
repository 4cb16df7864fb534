//! Serializable summaries printed by the binaries.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::event::event_weight;
use crate::probability::{compute_event_probability, compute_interval_probability, is_in_interval};
use crate::sample_space::generate_coin_sample_space;
use crate::simulation::{estimate_event_probability, SimulationResult};
use crate::types::SampleSpace;

/// Exact (and optionally simulated) probability of a Heads-count interval.
#[derive(Clone, Debug, Serialize)]
pub struct IntervalReport {
    pub num_flips: i32,
    pub min_heads: u32,
    pub max_heads: u32,
    pub sample_space: BTreeMap<u32, i64>,
    pub total_weight: u64,
    pub event_weight: u64,
    pub probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationResult>,
}

impl IntervalReport {
    /// Build the report for `min_heads..=max_heads` Heads in `num_flips` flips.
    ///
    /// `num_trials = Some(n)` adds a Monte Carlo cross-check seeded with `seed`.
    pub fn build(
        num_flips: i32,
        min_heads: u32,
        max_heads: u32,
        num_trials: Option<usize>,
        seed: u64,
    ) -> Result<Self> {
        let space = generate_coin_sample_space(num_flips)?;
        let total_weight = space.total_weight()?;
        let probability = compute_interval_probability(&space, min_heads, max_heads)?;
        let matched_weight = event_weight(
            |&heads| is_in_interval(heads, min_heads, max_heads),
            &space,
        )?;

        let simulation = match num_trials {
            Some(trials) => Some(estimate_event_probability(
                |&heads| is_in_interval(heads, min_heads, max_heads),
                &space,
                trials,
                seed,
            )?),
            None => None,
        };

        let sample_space = match space {
            SampleSpace::Weighted(weights) => weights,
            SampleSpace::Uniform(outcomes) => outcomes.into_iter().map(|o| (o, 1)).collect(),
        };

        Ok(IntervalReport {
            num_flips,
            min_heads,
            max_heads,
            sample_space,
            total_weight,
            event_weight: matched_weight,
            probability,
            simulation,
        })
    }

    /// Plain-text rendering: the weight table followed by the probabilities.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Coin sample space for {} flips", self.num_flips);
        let _ = writeln!(out, "  {:>6}  {:>20}  {:>5}", "heads", "sequences", "event");
        for (&heads, &weight) in &self.sample_space {
            let marker = if is_in_interval(heads, self.min_heads, self.max_heads) {
                "*"
            } else {
                ""
            };
            let _ = writeln!(out, "  {:>6}  {:>20}  {:>5}", heads, weight, marker);
        }
        let _ = writeln!(
            out,
            "P({} <= heads <= {}) = {}/{} = {:.6}",
            self.min_heads, self.max_heads, self.event_weight, self.total_weight, self.probability
        );
        if let Some(sim) = &self.simulation {
            let _ = writeln!(
                out,
                "Monte Carlo: {:.6} ± {:.6} ({} trials, {:.1} ms)",
                sim.estimate, sim.std_error, sim.trials, sim.elapsed_ms
            );
        }
        out
    }
}

/// One row of a flip-count sweep.
#[derive(Clone, Debug, Serialize)]
pub struct SweepRow {
    pub num_flips: i32,
    /// Inclusive lower bound on the Heads fraction.
    pub lo: f64,
    /// Inclusive upper bound on the Heads fraction.
    pub hi: f64,
    pub probability: f64,
}

/// For each flip count in `1..=max_flips`, the probability that the fraction of
/// Heads lies in `[lo, hi]`. Flip counts are evaluated in parallel.
pub fn sweep_heads_fraction(max_flips: i32, lo: f64, hi: f64) -> Result<Vec<SweepRow>> {
    (1..=max_flips)
        .into_par_iter()
        .map(|num_flips| {
            let space = generate_coin_sample_space(num_flips)?;
            let probability = compute_event_probability(
                |&heads| is_in_interval(heads as f64 / num_flips as f64, lo, hi),
                &space,
            )?;
            Ok(SweepRow {
                num_flips,
                lo,
                hi,
                probability,
            })
        })
        .collect()
}

/// Plain-text rendering of sweep rows.
pub fn format_sweep_table(rows: &[SweepRow]) -> String {
    let mut out = String::new();
    if let Some(first) = rows.first() {
        let _ = writeln!(
            out,
            "P({:.3} <= heads/flips <= {:.3})",
            first.lo, first.hi
        );
    }
    let _ = writeln!(out, "  {:>6}  {:>12}", "flips", "probability");
    for row in rows {
        let _ = writeln!(out, "  {:>6}  {:>12.6}", row.num_flips, row.probability);
    }
    out
}
