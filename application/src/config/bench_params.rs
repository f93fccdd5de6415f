//! Benchmark parameters: run loop control.
//!
//! [`BenchParams`] groups the static parameters that control the loops in
//! [`RunBenchmarkUseCase`](crate::use_cases::run_benchmark::RunBenchmarkUseCase).

use mmlu_bench_domain::PromptTemplate;
use serde::{Deserialize, Serialize};

/// Runs used in single-run mode
pub const DEFAULT_RUNS: usize = 1;
/// Runs used in debug mode when none are requested explicitly
pub const DEFAULT_DEBUG_RUNS: usize = 5;
/// Re-ask bound for the single-character validator
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;
/// Number of questions benchmarked when no cap is configured
pub const DEFAULT_MAX_PROMPTS: usize = 57;

/// Run loop control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchParams {
    /// Requested repetitions over the prompt set (0 = mode default)
    pub runs: usize,
    /// Cap on the number of prompts (None = every question)
    pub max_prompts: Option<usize>,
    /// Maximum calls per prompt before giving up on a single-character answer
    pub max_attempts: usize,
    /// Multi-run debug reporting
    pub debug: bool,
    /// Instruction placed before every question
    pub instruction: String,
}

impl Default for BenchParams {
    fn default() -> Self {
        Self {
            runs: 0,
            max_prompts: Some(DEFAULT_MAX_PROMPTS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            debug: false,
            instruction: PromptTemplate::default_instruction().to_string(),
        }
    }
}

impl BenchParams {
    // ==================== Builder Methods ====================

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_max_prompts(mut self, max: Option<usize>) -> Self {
        self.max_prompts = max;
        self
    }

    pub fn with_max_attempts(mut self, max: usize) -> Self {
        self.max_attempts = max;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Runs actually performed: the requested count, or the mode default.
    pub fn effective_runs(&self) -> usize {
        match (self.runs, self.debug) {
            (0, true) => DEFAULT_DEBUG_RUNS,
            (0, false) => DEFAULT_RUNS,
            (n, _) => n,
        }
    }
}
