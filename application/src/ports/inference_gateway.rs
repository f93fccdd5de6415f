//! Inference Gateway port
//!
//! Defines the interface for sending one prompt to an inference endpoint.

use async_trait::async_trait;
use mmlu_bench_domain::InferenceResponse;
use thiserror::Error;

/// Errors that can occur during a single inference call
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM inference
///
/// One call sends one prompt and waits for the complete (non-streamed) reply.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Identifier of the model the gateway targets
    fn model(&self) -> &str;

    /// Send a prompt and return the parsed reply
    async fn generate(&self, prompt: &str) -> Result<InferenceResponse, GatewayError>;
}
