//! Shared environment configuration for the binaries.
//!
//! Consolidates `PROB_NUM_FLIPS`, `PROB_SEED`, `PROB_LOG_JSON`,
//! `RAYON_NUM_THREADS` and `RUST_LOG` reads. Command-line flags override the
//! values returned here.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::{DEFAULT_NUM_FLIPS, DEFAULT_NUM_THREADS, DEFAULT_SEED};

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

/// Read `PROB_NUM_FLIPS` (default [`DEFAULT_NUM_FLIPS`]).
pub fn num_flips() -> i32 {
    env_parse("PROB_NUM_FLIPS").unwrap_or(DEFAULT_NUM_FLIPS)
}

/// Read `PROB_SEED` (default [`DEFAULT_SEED`]).
pub fn seed() -> u64 {
    env_parse("PROB_SEED").unwrap_or(DEFAULT_SEED)
}

/// `PROB_LOG_JSON=1` (or `true`) switches log output to JSON lines.
pub fn log_json() -> bool {
    matches!(
        std::env::var("PROB_LOG_JSON").as_deref(),
        Ok("1") | Ok("true")
    )
}

/// Initialize the global tracing subscriber.
///
/// Filter comes from `RUST_LOG`, default `event_probability=info`. Logs go to
/// stderr so stdout stays reserved for tables and JSON.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "event_probability=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if log_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    if result.is_err() {
        eprintln!("tracing subscriber already initialized");
    }
}

/// Read `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`, default
/// [`DEFAULT_NUM_THREADS`]) and build the rayon global pool.
///
/// Tolerates an already-initialized pool. Returns the thread count.
pub fn init_rayon_threads() -> usize {
    let num_threads = env_parse("RAYON_NUM_THREADS")
        .or_else(|| env_parse("OMP_NUM_THREADS"))
        .unwrap_or(DEFAULT_NUM_THREADS);
    if rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .is_err()
    {
        tracing::debug!("rayon global pool already initialized");
    }
    tracing::info!(num_threads, "rayon threads");
    num_threads
}
