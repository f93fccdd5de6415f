//! Per-prompt variance across runs (debug mode)

use super::matrix::ResponseMatrix;
use crate::core::error::DomainError;
use serde::Serialize;
use std::collections::HashSet;

/// How one prompt's answers varied over the runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptVariance {
    pub predefined_answer: String,
    pub responses: Vec<String>,
    /// Responses that differ from the predefined answer
    pub wrong_count: usize,
    /// Distinct response values seen
    pub distinct_count: usize,
}

impl PromptVariance {
    pub fn new(predefined_answer: impl Into<String>, responses: Vec<String>) -> Self {
        let predefined_answer = predefined_answer.into();
        let wrong_count = responses
            .iter()
            .filter(|r| **r != predefined_answer)
            .count();
        let distinct_count = responses.iter().collect::<HashSet<_>>().len();
        Self {
            predefined_answer,
            responses,
            wrong_count,
            distinct_count,
        }
    }
}

/// Variance for every prompt, in prompt order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarianceReport {
    pub prompts: Vec<PromptVariance>,
    pub run_count: usize,
}

/// Analyze every run of every prompt against its predefined answer.
pub fn analyze_variance(
    predefined_answers: &[String],
    matrix: &ResponseMatrix,
) -> Result<VarianceReport, DomainError> {
    if predefined_answers.len() != matrix.prompt_count() {
        return Err(DomainError::LengthMismatch {
            answers: predefined_answers.len(),
            responses: matrix.prompt_count(),
        });
    }

    let prompts = predefined_answers
        .iter()
        .zip(matrix.rows())
        .map(|(answer, runs)| PromptVariance::new(answer.clone(), runs.clone()))
        .collect();

    Ok(VarianceReport {
        prompts,
        run_count: matrix.run_count(),
    })
}
