//! Benchmark configuration from TOML (`[benchmark]` section)

use mmlu_bench_application::BenchParams;
use mmlu_bench_application::config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_PROMPTS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw benchmark configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBenchmarkConfig {
    /// Question set file (`.json` array or `.jsonl`)
    pub questions: PathBuf,
    /// Number of questions to benchmark (0 = all)
    pub max_prompts: usize,
    /// Runs over the prompt set (0 = 1, or 5 in debug mode)
    pub runs: usize,
    /// Multi-run debug report
    pub debug: bool,
    /// Calls per prompt before giving up on a single-character answer
    pub max_attempts: usize,
    /// Replacement for the built-in instruction
    pub instruction: Option<String>,
}

impl Default for FileBenchmarkConfig {
    fn default() -> Self {
        Self {
            questions: PathBuf::from("MMLU_QandA.json"),
            max_prompts: DEFAULT_MAX_PROMPTS,
            runs: 0,
            debug: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            instruction: None,
        }
    }
}

impl FileBenchmarkConfig {
    /// Convert to application run parameters
    pub fn to_bench_params(&self) -> BenchParams {
        let mut params = BenchParams::default()
            .with_runs(self.runs)
            .with_max_prompts((self.max_prompts > 0).then_some(self.max_prompts))
            .with_max_attempts(self.max_attempts)
            .with_debug(self.debug);
        if let Some(instruction) = &self.instruction {
            params = params.with_instruction(instruction.clone());
        }
        params
    }
}
