//! coin-sweep: how concentrated is the Heads fraction as the flip count grows?
//!
//! For every n in 1..=max_flips computes, exactly and in parallel,
//! P(lo <= heads/n <= hi).

use std::time::Instant;

use event_probability::coin_mechanics::warn_if_slow_enumeration;
use event_probability::env_config;
use event_probability::report::{format_sweep_table, sweep_heads_fraction};

fn main() {
    env_config::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let mut max_flips = env_config::num_flips();
    let mut lo: f64 = 0.4;
    let mut hi: f64 = 0.6;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--flips" => {
                i += 1;
                max_flips = parse_arg(&args, i, "--flips");
            }
            "--lo" => {
                i += 1;
                lo = parse_arg(&args, i, "--lo");
            }
            "--hi" => {
                i += 1;
                hi = parse_arg(&args, i, "--hi");
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

    if lo > hi {
        eprintln!("--lo ({}) must not exceed --hi ({})", lo, hi);
        std::process::exit(1);
    }

    warn_if_slow_enumeration(max_flips);
    env_config::init_rayon_threads();

    let start = Instant::now();
    let rows = match sweep_heads_fraction(max_flips, lo, hi) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(kind = ?e.kind(), "{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        max_flips,
        rows = rows.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "sweep complete"
    );

    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize sweep: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", format_sweep_table(&rows));
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
        "coin-sweep: P(lo <= heads/flips <= hi) for every flip count up to --flips.

USAGE:
    coin-sweep [OPTIONS]

OPTIONS:
    --flips <N>     Largest flip count [default: $PROB_NUM_FLIPS or 10]
    --lo <F>        Inclusive lower bound on the heads fraction [default: 0.4]
    --hi <F>        Inclusive upper bound on the heads fraction [default: 0.6]
    --json          Print rows as JSON
    -h, --help      Print this help

Enumeration is exponential in the flip count; values above ~30 get slow."
    );
}
