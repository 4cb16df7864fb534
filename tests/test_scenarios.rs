//! End-to-end scenarios: generator → matcher → calculator.

use std::collections::{BTreeMap, BTreeSet};

use event_probability::coin_mechanics::{count_heads, CoinSequences};
use event_probability::simulation::{estimate_event_probability, simulate_coin_flips};
use event_probability::{
    compute_event_probability, compute_interval_probability, generate_coin_sample_space,
    get_matching_event, is_in_interval, Coin, ErrorKind, ProbabilityError, SampleSpace,
};

// ── Coin sample space ────────────────────────────────────────────────

#[test]
fn two_flips_sample_space() {
    let space = generate_coin_sample_space(2).unwrap();
    assert_eq!(
        space,
        SampleSpace::Weighted(BTreeMap::from([(0, 1), (1, 2), (2, 1)]))
    );
}

#[test]
fn exactly_one_head_in_two_flips() {
    let space = generate_coin_sample_space(2).unwrap();
    let event = get_matching_event(|&heads| heads == 1, &space);
    assert_eq!(event, BTreeSet::from([1]));
    let p = compute_event_probability(|&heads| heads == 1, &space).unwrap();
    assert_eq!(p, 0.5);
}

#[test]
fn zero_flips_single_outcome() {
    let space = generate_coin_sample_space(0).unwrap();
    assert_eq!(space, SampleSpace::Weighted(BTreeMap::from([(0, 1)])));
    assert_eq!(compute_event_probability(|&h| h == 0, &space).unwrap(), 1.0);
}

#[test]
fn generator_agrees_with_explicit_sequences() {
    for n in 0..=8 {
        let mut grouped: BTreeMap<u32, i64> = BTreeMap::new();
        for seq in CoinSequences::new(n).unwrap() {
            *grouped.entry(count_heads(&seq)).or_insert(0) += 1;
        }
        assert_eq!(
            generate_coin_sample_space(n).unwrap(),
            SampleSpace::Weighted(grouped),
            "n={n}"
        );
    }
}

#[test]
fn negative_flip_count_is_invalid_argument() {
    let err = generate_coin_sample_space(-1).unwrap_err();
    assert_eq!(err, ProbabilityError::NegativeFlipCount(-1));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

// ── Weighted and uniform probabilities ───────────────────────────────

#[test]
fn weighted_at_least_one_head() {
    let space = SampleSpace::weighted([(0u32, 1), (1, 2), (2, 1)]).unwrap();
    let event = get_matching_event(|&heads| heads >= 1, &space);
    assert_eq!(event, BTreeSet::from([1, 2]));
    let p = compute_event_probability(|&heads| heads >= 1, &space).unwrap();
    assert_eq!(p, 0.75);
}

#[test]
fn eight_to_ten_heads_in_ten_flips() {
    let space = generate_coin_sample_space(10).unwrap();
    let p = compute_event_probability(|&heads| is_in_interval(heads, 8, 10), &space).unwrap();
    assert!((p - 0.0546875).abs() < 1e-12, "p={p}");
    assert_eq!(compute_interval_probability(&space, 8, 10).unwrap(), p);
}

#[test]
fn uniform_symbol_space() {
    let space = SampleSpace::uniform(Coin::BOTH);
    let p = compute_event_probability(|&c| c == Coin::Heads, &space).unwrap();
    assert_eq!(p, 0.5);

    let sequences = SampleSpace::uniform(CoinSequences::new(3).unwrap());
    assert_eq!(sequences.len(), 8);
    let p = compute_event_probability(|seq| count_heads(seq) == 3, &sequences).unwrap();
    assert_eq!(p, 0.125);
}

#[test]
fn uniform_and_weighted_agree() {
    // four equally likely sequences of two flips, keyed by the sequence itself
    let uniform = SampleSpace::uniform(CoinSequences::new(2).unwrap());
    let weighted = generate_coin_sample_space(2).unwrap();
    let pu = compute_event_probability(|seq| count_heads(seq) >= 1, &uniform).unwrap();
    let pw = compute_event_probability(|&heads| heads >= 1, &weighted).unwrap();
    assert_eq!(pu, pw);
}

#[test]
fn empty_and_zero_mass_are_division_by_zero() {
    let empty: SampleSpace<u32> = SampleSpace::Uniform(BTreeSet::new());
    let err = compute_event_probability(|_| true, &empty).unwrap_err();
    assert_eq!(err, ProbabilityError::EmptySampleSpace);
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);

    let zero = SampleSpace::weighted([(0u32, 0), (1, 0)]).unwrap();
    let err = compute_event_probability(|_| true, &zero).unwrap_err();
    assert_eq!(err, ProbabilityError::ZeroTotalWeight);
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
}

#[test]
fn negative_weight_is_invalid_argument() {
    let err = SampleSpace::weighted([("a", 2), ("b", -1)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "outcome \"b\" has negative weight -1");

    // built directly, the same space is rejected at computation time
    let space = SampleSpace::Weighted(BTreeMap::from([("a", 2), ("b", -1)]));
    let err = compute_event_probability(|_| true, &space).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "outcome \"b\" has negative weight -1");
}

#[test]
fn repeated_outcome_cannot_cancel_negative_weight() {
    let err = SampleSpace::weighted([(1u32, 5), (1, -3)]).unwrap_err();
    assert_eq!(
        err,
        ProbabilityError::NegativeWeight {
            outcome: "1".to_string(),
            weight: -3
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn overflowing_total_weight_is_invalid_argument() {
    let space = SampleSpace::Weighted(BTreeMap::from([
        (0u32, i64::MAX),
        (1, i64::MAX),
        (2, i64::MAX),
    ]));
    let err = compute_interval_probability(&space, 0, 0).unwrap_err();
    assert_eq!(err, ProbabilityError::WeightOverflow);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

// ── Monte Carlo cross-checks ─────────────────────────────────────────

#[test]
fn simulation_tracks_exact_value() {
    let space = generate_coin_sample_space(10).unwrap();
    let exact = compute_interval_probability(&space, 8, 10).unwrap();
    let sim = estimate_event_probability(|&h| is_in_interval(h, 8, 10), &space, 400_000, 42)
        .unwrap();
    assert!((sim.estimate - exact).abs() < 10.0 * sim.std_error.max(1e-4));
}

#[test]
fn simulated_flips_approach_binomial() {
    let empirical = simulate_coin_flips(4, 160_000, 11).unwrap();
    let exact = generate_coin_sample_space(4).unwrap();
    for k in 0..=4u32 {
        let pe = compute_event_probability(|&h| h == k, &empirical).unwrap();
        let px = compute_event_probability(|&h| h == k, &exact).unwrap();
        assert!((pe - px).abs() < 0.01, "k={k} empirical={pe} exact={px}");
    }
}
