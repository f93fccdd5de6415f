//! Application-level configuration.
//!
//! - [`BenchParams`]: run loop control (runs, prompt cap, re-ask bound, mode)

pub mod bench_params;

pub use bench_params::{
    BenchParams, DEFAULT_DEBUG_RUNS, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_PROMPTS, DEFAULT_RUNS,
};
