//! Ollama-compatible HTTP adapter
//!
//! Implements [`InferenceGateway`](mmlu_bench_application::InferenceGateway)
//! over `POST /api/generate`.

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::OllamaError;
pub use gateway::{OllamaConfig, OllamaGateway};
