//! Application layer for mmlu-bench
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BenchParams;
pub use ports::{
    inference_gateway::{GatewayError, InferenceGateway},
    progress::{NoProgress, ProgressNotifier},
    question_source::{QuestionSource, QuestionSourceError},
};
pub use use_cases::run_benchmark::{
    BenchmarkOutput, RunBenchmarkError, RunBenchmarkInput, RunBenchmarkUseCase,
};
