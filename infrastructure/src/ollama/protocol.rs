//! Wire types for `POST /api/generate`

use mmlu_bench_domain::InferenceResponse;
use serde::Serialize;

use super::error::{OllamaError, Result};

/// Path of the non-streaming generate endpoint
pub const GENERATE_PATH: &str = "/api/generate";

/// Sampling options sent with every request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOptions {
    pub temperature: f32,
}

impl Default for GenerateOptions {
    /// Greedy decoding
    fn default() -> Self {
        Self { temperature: 0.0 }
    }
}

/// Request body for a single completion
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    pub options: GenerateOptions,
}

impl<'a> GenerateRequest<'a> {
    /// A non-streaming, greedy request
    pub fn new(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            prompt,
            stream: false,
            options: GenerateOptions::default(),
        }
    }
}

/// Parse a response body into an [`InferenceResponse`].
///
/// Missing numeric fields default to zero; a body that is not a JSON object
/// is a parse error.
pub fn parse_generate_body(raw: &str) -> Result<InferenceResponse> {
    serde_json::from_str(raw).map_err(|e| OllamaError::ParseError {
        error: e.to_string(),
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = GenerateRequest::new("llama3:8b", "2+2?");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "model": "llama3:8b",
                "prompt": "2+2?",
                "stream": false,
                "options": { "temperature": 0.0 }
            })
        );
    }

    #[test]
    fn test_parse_body() {
        let reply = parse_generate_body(
            r#"{"response":"B","created_at":"2024-05-14T09:21:43.1Z","eval_count":1}"#,
        )
        .unwrap();
        assert_eq!(reply.text(), "B");
        assert_eq!(reply.eval_count, 1);
    }

    #[test]
    fn test_parse_body_rejects_non_json() {
        let err = parse_generate_body("502 Bad Gateway").unwrap_err();
        match err {
            OllamaError::ParseError { raw, .. } => assert_eq!(raw, "502 Bad Gateway"),
            other => panic!("Expected ParseError, got {other:?}"),
        }
    }
}
