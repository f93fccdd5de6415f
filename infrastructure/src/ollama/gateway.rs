//! Ollama-compatible inference gateway
//!
//! Sends one non-streaming `POST /api/generate` per prompt using HTTP basic
//! authentication. TLS certificate verification can be switched off for
//! endpoints that sit behind a self-signed reverse proxy.

use super::error::{OllamaError, Result};
use super::protocol::{GENERATE_PATH, GenerateRequest, parse_generate_body};
use async_trait::async_trait;
use mmlu_bench_application::{GatewayError, InferenceGateway};
use mmlu_bench_domain::InferenceResponse;
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for an Ollama-compatible endpoint
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// `host:port`, or a full base URL including the scheme
    pub host: String,
    /// Scheme used when `host` carries none
    pub scheme: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub model: String,
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
    /// Per-request timeout (None = wait indefinitely)
    pub timeout: Option<Duration>,
    /// Honour `HTTP(S)_PROXY` / `NO_PROXY` from the environment
    pub system_proxy: bool,
}

impl OllamaConfig {
    pub fn new(host: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            scheme: "https".to_string(),
            user: None,
            password: None,
            model: model.into(),
            accept_invalid_certs: false,
            timeout: None,
            system_proxy: true,
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.system_proxy = enabled;
        self
    }

    /// Full URL of the generate endpoint
    pub fn generate_url(&self) -> Result<String> {
        let host = self.host.trim().trim_end_matches('/');
        if host.is_empty() {
            return Err(OllamaError::InvalidEndpoint("host is empty".to_string()));
        }
        if host.contains("://") {
            Ok(format!("{}{}", host, GENERATE_PATH))
        } else {
            Ok(format!("{}://{}{}", self.scheme, host, GENERATE_PATH))
        }
    }
}

/// Gateway adapter that talks to an Ollama-compatible HTTP API
pub struct OllamaGateway {
    client: reqwest::Client,
    url: String,
    config: OllamaConfig,
}

impl OllamaGateway {
    /// Build the HTTP client for the given endpoint
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let url = config.generate_url()?;

        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(OllamaError::ClientBuild)?;

        info!(
            "Inference endpoint {} (model {}, certificate checks {})",
            url,
            config.model,
            if config.accept_invalid_certs { "off" } else { "on" }
        );

        Ok(Self {
            client,
            url,
            config,
        })
    }

    async fn send_generate(&self, prompt: &str) -> Result<InferenceResponse> {
        let body = GenerateRequest::new(&self.config.model, prompt);
        debug!("Sending request to {} ({} prompt bytes)", self.url, prompt.len());

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(user) = &self.config.user {
            request = request.basic_auth(user, self.config.password.as_deref());
        }

        let response = request.send().await?;
        let status = response.status();
        let raw = response.text().await?;
        debug!("Response received ({}): {}", status.as_u16(), raw);

        if !status.is_success() {
            return Err(OllamaError::Status {
                status: status.as_u16(),
                body: raw,
            });
        }

        parse_generate_body(&raw)
    }
}

#[async_trait]
impl InferenceGateway for OllamaGateway {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, prompt: &str) -> std::result::Result<InferenceResponse, GatewayError> {
        self.send_generate(prompt).await.map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one HTTP response and hand back the raw request.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if request_complete(&buf) {
                    break;
                }
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&buf).to_string()
        });

        (addr.to_string(), handle)
    }

    fn request_complete(buf: &[u8]) -> bool {
        let text = String::from_utf8_lossy(buf);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        buf.len() >= header_end + 4 + content_length
    }

    fn plain_http(host: &str) -> OllamaConfig {
        OllamaConfig::new(host, "llama3:8b")
            .with_scheme("http")
            .with_credentials("user", "pw")
            .with_system_proxy(false)
    }

    #[test]
    fn test_generate_url() {
        let config = OllamaConfig::new("10.0.0.1:8443", "m");
        assert_eq!(
            config.generate_url().unwrap(),
            "https://10.0.0.1:8443/api/generate"
        );

        let config = OllamaConfig::new("http://localhost:11434/", "m");
        assert_eq!(
            config.generate_url().unwrap(),
            "http://localhost:11434/api/generate"
        );

        let config = OllamaConfig::new("  ", "m");
        assert!(matches!(
            config.generate_url(),
            Err(OllamaError::InvalidEndpoint(_))
        ));
    }

    #[tokio::test]
    async fn test_generate_sends_auth_and_body() {
        let (host, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"response":" D ","eval_count":3,"eval_duration":3000000}"#,
        )
        .await;
        let gateway = OllamaGateway::new(plain_http(&host)).unwrap();

        let reply = gateway.generate("Which one?").await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(reply.text(), "D");
        assert_eq!(reply.eval_count, 3);
        assert!(request.starts_with("POST /api/generate HTTP/1.1"));
        // base64("user:pw")
        assert!(request.contains("dXNlcjpwdw=="));
        assert!(request.contains(r#""stream":false"#));
        assert!(request.contains(r#""prompt":"Which one?""#));
        assert!(request.contains(r#""model":"llama3:8b""#));
    }

    #[tokio::test]
    async fn test_generate_maps_http_error() {
        let (host, server) =
            serve_once("HTTP/1.1 404 Not Found", r#"{"error":"model not found"}"#).await;
        let gateway = OllamaGateway::new(plain_http(&host)).unwrap();

        let err = gateway.generate("x").await.unwrap_err();
        server.await.unwrap();

        match err {
            GatewayError::HttpStatus { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("model not found"));
            }
            other => panic!("Expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_maps_parse_error() {
        let (host, server) = serve_once("HTTP/1.1 200 OK", "not json").await;
        let gateway = OllamaGateway::new(plain_http(&host)).unwrap();

        let err = gateway.generate("x").await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, GatewayError::ParseError(_)));
    }

    #[test]
    fn test_model_accessor() {
        let gateway = OllamaGateway::new(OllamaConfig::new("localhost:1", "phi3")).unwrap();
        assert_eq!(gateway.model(), "phi3");
    }
}
