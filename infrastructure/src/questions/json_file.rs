//! Question set loaded from a JSON (or JSON Lines) file
//!
//! `*.jsonl` files hold one record per line; anything else is read as a
//! single JSON array of records.

use mmlu_bench_application::{QuestionSource, QuestionSourceError};
use mmlu_bench_domain::QuestionRecord;
use std::path::PathBuf;
use tracing::info;

/// Loads question records from a file on disk
#[derive(Debug, Clone)]
pub struct JsonQuestionSource {
    path: PathBuf,
}

impl JsonQuestionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_json_lines(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"))
    }

    fn parse_error(&self, message: impl Into<String>) -> QuestionSourceError {
        QuestionSourceError::Parse {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    fn parse_array(&self, content: &str) -> Result<Vec<QuestionRecord>, QuestionSourceError> {
        serde_json::from_str(content).map_err(|e| self.parse_error(e.to_string()))
    }

    fn parse_lines(&self, content: &str) -> Result<Vec<QuestionRecord>, QuestionSourceError> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line)
                    .map_err(|e| self.parse_error(format!("line {}: {}", i + 1, e)))
            })
            .collect()
    }
}

impl QuestionSource for JsonQuestionSource {
    fn load(&self) -> Result<Vec<QuestionRecord>, QuestionSourceError> {
        if !self.path.exists() {
            return Err(QuestionSourceError::NotFound(self.path.clone()));
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|source| QuestionSourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        let records = if self.is_json_lines() {
            self.parse_lines(&content)?
        } else {
            self.parse_array(&content)?
        };

        info!(
            "Loaded {} questions from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmlu_bench_domain::MISSING_ANSWER;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "MMLU_QandA.json",
            r#"[
                {"question": "What is 2+2?\n(A) 3\n(B) 4", "answer": "B"},
                {"question": "Capital of France?\n(A) Paris\n(B) Rome"}
            ]"#,
        );

        let records = JsonQuestionSource::new(&path).load().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].answer(), "B");
        assert_eq!(records[1].answer(), MISSING_ANSWER);
    }

    #[test]
    fn test_load_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "mmlu.jsonl",
            "{\"question\": \"Q1\", \"answer\": \"A\"}\n\n{\"question\": \"Q2\", \"answer\": \"C\"}\n",
        );

        let records = JsonQuestionSource::new(&path).load().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].question(), "Q2");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = JsonQuestionSource::new(&path).load().unwrap_err();

        assert!(matches!(err, QuestionSourceError::NotFound(p) if p == path));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "bad.json", r#"{"question": "not an array"}"#);

        let err = JsonQuestionSource::new(&path).load().unwrap_err();
        assert!(matches!(err, QuestionSourceError::Parse { .. }));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "bad.jsonl", "{\"question\": \"ok\"}\n{oops\n");

        let err = JsonQuestionSource::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
