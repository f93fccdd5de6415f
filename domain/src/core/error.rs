//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Response matrix has {responses} prompt rows but {answers} predefined answers")]
    LengthMismatch { answers: usize, responses: usize },

    #[error("Response matrix contains no runs")]
    NoRuns,

    #[error("Answer for prompt {prompt_index} is not a single character: {answer:?}")]
    MalformedAnswer { prompt_index: usize, answer: String },

    #[error("Prompt index {prompt_index} out of range ({prompt_count} prompts)")]
    PromptOutOfRange {
        prompt_index: usize,
        prompt_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let error = DomainError::LengthMismatch {
            answers: 3,
            responses: 2,
        };
        assert_eq!(
            error.to_string(),
            "Response matrix has 2 prompt rows but 3 predefined answers"
        );
    }

    #[test]
    fn test_malformed_answer_display() {
        let error = DomainError::MalformedAnswer {
            prompt_index: 4,
            answer: "AB".to_string(),
        };
        assert!(error.to_string().contains("prompt 4"));
        assert!(error.to_string().contains("\"AB\""));
    }
}
