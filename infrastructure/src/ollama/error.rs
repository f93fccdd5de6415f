//! Error types for the Ollama adapter

use mmlu_bench_application::GatewayError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to an Ollama-compatible endpoint
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl From<OllamaError> for GatewayError {
    fn from(e: OllamaError) -> Self {
        match e {
            OllamaError::Transport(e) if e.is_timeout() => GatewayError::Timeout,
            OllamaError::Transport(e) => GatewayError::ConnectionError(e.to_string()),
            OllamaError::Status { status, body } => GatewayError::HttpStatus { status, body },
            OllamaError::ParseError { error, .. } => GatewayError::ParseError(error),
            other => GatewayError::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_gateway_status() {
        let err: GatewayError = OllamaError::Status {
            status: 401,
            body: "unauthorized".to_string(),
        }
        .into();
        assert!(matches!(err, GatewayError::HttpStatus { status: 401, .. }));
    }

    #[test]
    fn test_parse_error_keeps_message() {
        let err: GatewayError = OllamaError::ParseError {
            error: "expected value".to_string(),
            raw: "<html>".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Failed to parse response: expected value");
    }
}
