//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for mmlu-bench
#[derive(Parser, Debug)]
#[command(name = "mmlu-bench")]
#[command(author, version, about = "Benchmark an LLM inference endpoint on multiple-choice questions")]
#[command(long_about = r#"
mmlu-bench sends every question of an MMLU-style question set to an
Ollama-compatible /api/generate endpoint, asks again until the model answers
with a single letter, and reports accuracy plus latency and token throughput.

Modes:
  default   one run, table of expected vs. obtained answers and accuracy
  --debug   several runs (5 unless --runs is given), per-question variance

Configuration files are loaded from (in priority order):
1. MMLU_BENCH_* environment variables (e.g. MMLU_BENCH_ENDPOINT__PASSWORD)
2. --config <path>     Explicit config file
3. ./mmlu-bench.toml   Project-level config
4. ~/.config/mmlu-bench/config.toml   Global config

Example:
  mmlu-bench --host 10.0.0.1:8443 --user user -m llama3:70b-instruct-q4_K_M
  mmlu-bench -f MMLU_QandA.json -n 10 --debug --runs 3
"#)]
pub struct Cli {
    /// Question set file (JSON array or .jsonl)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub questions: Option<PathBuf>,

    /// Inference endpoint as host:port (or a full base URL)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Basic-auth user name
    #[arg(short, long)]
    pub user: Option<String>,

    /// Basic-auth password
    #[arg(long)]
    pub password: Option<String>,

    /// Model identifier sent to the endpoint
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Number of questions to benchmark (0 = all)
    #[arg(short = 'n', long, value_name = "N")]
    pub max_prompts: Option<usize>,

    /// Runs over the question set (default: 1, or 5 with --debug)
    #[arg(short, long, value_name = "N")]
    pub runs: Option<usize>,

    /// Multi-run report showing per-question variance
    #[arg(short, long)]
    pub debug: bool,

    /// Calls per question before giving up on a single-letter answer
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<usize>,

    /// Skip TLS certificate verification
    #[arg(long, conflicts_with = "verify_tls")]
    pub insecure: bool,

    /// Enforce TLS certificate verification
    #[arg(long)]
    pub verify_tls: bool,

    /// Per-request timeout in seconds (0 = none)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files and environment
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// TLS verification override: `Some(true)` to skip checks, `Some(false)` to enforce
    pub fn accept_invalid_certs(&self) -> Option<bool> {
        match (self.insecure, self.verify_tls) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
