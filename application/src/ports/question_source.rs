//! Question source port
//!
//! Defines how the question set is loaded before a benchmark starts.

use mmlu_bench_domain::QuestionRecord;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the question set
#[derive(Error, Debug)]
pub enum QuestionSourceError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Source of question records, in file order
pub trait QuestionSource: Send + Sync {
    /// Load every record. The result is never partially filled.
    fn load(&self) -> Result<Vec<QuestionRecord>, QuestionSourceError>;
}
