//! Infrastructure layer for mmlu-bench
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod ollama;
pub mod questions;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileBenchmarkConfig, FileConfig, FileEndpointConfig,
    FileOutputConfig, Severity,
};
pub use ollama::{OllamaConfig, OllamaError, OllamaGateway};
pub use questions::JsonQuestionSource;
