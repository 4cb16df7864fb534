//! coin-probability: exact probability that the Heads count of `n` fair coin
//! flips lands in an inclusive interval, with an optional Monte Carlo check.
//!
//! Defaults reproduce the classic exercise: P(8 <= heads <= 10) for 10 flips
//! = 56/1024 ≈ 0.0547.

use event_probability::coin_mechanics::warn_if_slow_enumeration;
use event_probability::constants::{
    DEFAULT_INTERVAL_MAX, DEFAULT_INTERVAL_MIN, DEFAULT_NUM_TRIALS,
};
use event_probability::env_config;
use event_probability::report::IntervalReport;

fn main() {
    env_config::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let mut num_flips = env_config::num_flips();
    let mut min_heads = DEFAULT_INTERVAL_MIN;
    let mut max_heads = DEFAULT_INTERVAL_MAX;
    let mut trials: Option<usize> = None;
    let mut seed = env_config::seed();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--flips" => {
                i += 1;
                num_flips = parse_arg(&args, i, "--flips");
            }
            "--min" => {
                i += 1;
                min_heads = parse_arg(&args, i, "--min");
            }
            "--max" => {
                i += 1;
                max_heads = parse_arg(&args, i, "--max");
            }
            "--trials" => {
                i += 1;
                trials = Some(parse_arg(&args, i, "--trials"));
            }
            "--seed" => {
                i += 1;
                seed = parse_arg(&args, i, "--seed");
            }
            "--simulate" => {
                trials.get_or_insert(DEFAULT_NUM_TRIALS);
            }
            "--json" => {
                json = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    warn_if_slow_enumeration(num_flips);
    if trials.is_some() {
        env_config::init_rayon_threads();
    }

    tracing::info!(
        num_flips,
        min_heads,
        max_heads,
        ?trials,
        seed,
        "computing interval probability"
    );

    let report = match IntervalReport::build(num_flips, min_heads, max_heads, trials, seed) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(kind = ?e.kind(), "{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", report.to_table());
    }
}

fn parse_arg<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|s| s.parse().ok()) {
        Some(v) => v,
        None => {
            eprintln!("Invalid or missing value for {}", flag);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        "coin-probability: P(min <= heads <= max) for n fair coin flips.

USAGE:
    coin-probability [OPTIONS]

OPTIONS:
    --flips <N>     Number of flips [default: $PROB_NUM_FLIPS or 10]
    --min <K>       Inclusive lower bound on heads [default: 8]
    --max <K>       Inclusive upper bound on heads [default: 10]
    --trials <N>    Also estimate by Monte Carlo with N trials
    --simulate      Same as --trials 1000000
    --seed <S>      Base RNG seed [default: $PROB_SEED or 42]
    --json          Print the report as JSON
    -h, --help      Print this help"
    );
}
