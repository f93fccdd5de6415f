//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into adapter and
//! application types where needed.

mod benchmark;
mod endpoint;
mod output;

pub use benchmark::FileBenchmarkConfig;
pub use endpoint::FileEndpointConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the benchmark cannot run with this configuration.
    Error,
    /// Non-fatal: the benchmark runs but may not behave as expected.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub message: String,
}

impl ConfigIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Inference endpoint and credentials
    pub endpoint: FileEndpointConfig,
    /// Question set and run loop settings
    pub benchmark: FileBenchmarkConfig,
    /// Console output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.endpoint.host.trim().is_empty() {
            issues.push(ConfigIssue::error("endpoint.host is empty"));
        }
        if self.endpoint.model.trim().is_empty() {
            issues.push(ConfigIssue::error("endpoint.model is empty"));
        }
        if !matches!(self.endpoint.scheme.as_str(), "http" | "https") {
            issues.push(ConfigIssue::error(format!(
                "endpoint.scheme: unknown value '{}', expected 'http' or 'https'",
                self.endpoint.scheme
            )));
        }
        if self.endpoint.user.is_some() && self.endpoint.password.is_none() {
            issues.push(ConfigIssue::warning(
                "endpoint.user is set without endpoint.password; sending an empty password",
            ));
        }
        if self.benchmark.max_attempts == 0 {
            issues.push(ConfigIssue::error("benchmark.max_attempts must be at least 1"));
        }
        if self.benchmark.runs > 1 && !self.benchmark.debug {
            issues.push(ConfigIssue::warning(format!(
                "benchmark.runs = {} without debug: only the first run is reported",
                self.benchmark.runs
            )));
        }

        issues
    }

    /// Whether any issue prevents a run
    pub fn has_errors(&self) -> bool {
        self.validate()
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[endpoint]
host = "10.0.0.1:8443"
user = "user"
password = "pw"
model = "llama3:70b-instruct-q4_K_M"
accept_invalid_certs = true

[benchmark]
questions = "MMLU_QandA.json"
max_prompts = 57
runs = 5
debug = true
max_attempts = 20

[output]
color = false
progress = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.password.as_deref(), Some("pw"));
        assert_eq!(config.benchmark.max_attempts, 20);
        assert!(!config.output.progress);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(!config.has_errors());
    }

    #[test]
    fn test_validate_errors() {
        let mut config = FileConfig::default();
        config.endpoint.model = " ".to_string();
        config.benchmark.max_attempts = 0;

        let issues = config.validate();
        assert_eq!(
            issues
                .iter()
                .filter(|i| i.severity == Severity::Error)
                .count(),
            2
        );
        assert!(config.has_errors());
    }

    #[test]
    fn test_validate_unknown_scheme() {
        let mut config = FileConfig::default();
        config.endpoint.scheme = "ftp".to_string();
        assert!(config.validate()[0].message.contains("ftp"));
    }

    #[test]
    fn test_validate_warnings() {
        let mut config = FileConfig::default();
        config.endpoint.user = Some("user".to_string());
        config.benchmark.runs = 3;

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(!config.has_errors());
    }
}
