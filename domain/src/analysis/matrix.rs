//! Response matrix: one row per prompt, one column per run

use crate::core::error::DomainError;
use serde::Serialize;

/// Single-character answers collected per prompt across runs.
///
/// `rows()[prompt][run]` is the answer obtained for `prompt` in `run`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResponseMatrix {
    rows: Vec<Vec<String>>,
}

impl ResponseMatrix {
    /// Create an empty matrix for `prompt_count` prompts
    pub fn new(prompt_count: usize) -> Self {
        Self {
            rows: vec![Vec::new(); prompt_count],
        }
    }

    /// Append an answer to a prompt's row.
    ///
    /// Rejects answers that are not exactly one character.
    pub fn push(&mut self, prompt_index: usize, answer: impl Into<String>) -> Result<(), DomainError> {
        let answer = answer.into();
        if answer.chars().count() != 1 {
            return Err(DomainError::MalformedAnswer {
                prompt_index,
                answer,
            });
        }
        let prompt_count = self.rows.len();
        let row = self
            .rows
            .get_mut(prompt_index)
            .ok_or(DomainError::PromptOutOfRange {
                prompt_index,
                prompt_count,
            })?;
        row.push(answer);
        Ok(())
    }

    pub fn prompt_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of completed runs (the shortest row length)
    pub fn run_count(&self) -> usize {
        self.rows.iter().map(Vec::len).min().unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The answer of the first run for every prompt
    pub fn first_run(&self) -> Option<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.first().map(String::as_str))
            .collect()
    }
}

impl From<Vec<Vec<String>>> for ResponseMatrix {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}
