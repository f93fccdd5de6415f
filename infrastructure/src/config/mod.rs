//! Configuration file loading for mmlu-bench
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MMLU_BENCH_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./mmlu-bench.toml` or `./.mmlu-bench.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mmlu-bench/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileBenchmarkConfig, FileConfig, FileEndpointConfig, FileOutputConfig, Severity,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
