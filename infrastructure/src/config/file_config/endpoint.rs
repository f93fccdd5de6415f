//! Endpoint configuration from TOML (`[endpoint]` section)

use crate::ollama::OllamaConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// `host:port` of the inference server (or a full base URL)
    pub host: String,
    /// Scheme used when `host` has none
    pub scheme: String,
    /// Basic-auth user name
    pub user: Option<String>,
    /// Basic-auth password (prefer `MMLU_BENCH_ENDPOINT__PASSWORD`)
    pub password: Option<String>,
    /// Model identifier sent with every request
    pub model: String,
    /// Skip TLS certificate verification (self-signed endpoints)
    pub accept_invalid_certs: bool,
    /// Per-request timeout in seconds (0 = no timeout)
    pub timeout_secs: u64,
    /// Route requests through the proxy named in the environment
    pub system_proxy: bool,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            host: "localhost:8443".to_string(),
            scheme: "https".to_string(),
            user: None,
            password: None,
            model: "llama3:70b-instruct-q4_K_M".to_string(),
            accept_invalid_certs: true,
            timeout_secs: 0,
            system_proxy: true,
        }
    }
}

impl FileEndpointConfig {
    /// Convert to the adapter's connection settings
    pub fn to_ollama_config(&self) -> OllamaConfig {
        let timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));
        let mut config = OllamaConfig::new(&self.host, &self.model)
            .with_scheme(&self.scheme)
            .with_accept_invalid_certs(self.accept_invalid_certs)
            .with_timeout(timeout)
            .with_system_proxy(self.system_proxy);
        config.user = self.user.clone();
        config.password = self.password.clone();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_deserialize() {
        let toml_str = r#"
[endpoint]
host = "10.0.0.1:8443"
user = "user"
password = "pw"
model = "llama3:8b"
timeout_secs = 30
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.host, "10.0.0.1:8443");
        assert_eq!(config.endpoint.user.as_deref(), Some("user"));
        assert_eq!(config.endpoint.scheme, "https");
        assert!(config.endpoint.accept_invalid_certs);
    }

    #[test]
    fn test_to_ollama_config() {
        let file = FileEndpointConfig {
            timeout_secs: 5,
            user: Some("u".to_string()),
            password: Some("p".to_string()),
            ..Default::default()
        };
        let config = file.to_ollama_config();
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user.as_deref(), Some("u"));
        assert_eq!(
            config.generate_url().unwrap(),
            "https://localhost:8443/api/generate"
        );
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = FileEndpointConfig::default().to_ollama_config();
        assert!(config.timeout.is_none());
    }
}
