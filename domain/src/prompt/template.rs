//! Prompt templates for multiple-choice benchmarking

use crate::core::question::{QuestionRecord, capped};

/// Templates for turning question records into model prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Default instruction asking for a bare answer letter
    pub fn default_instruction() -> &'static str {
        "Please respond with the correct letter (A, B, C or D) to the question. Do not give explanations! \
Here is an example: \n'Question:\n What color does a ripe banana have?\n\
(A) Blue\n(B) Green\n(C) Yellow\n(D) Red\n\nAnswer:C' \nRespond the correct letter to this Question:\n"
    }

    /// Format a single question under the given instruction
    pub fn question_prompt(instruction: &str, question: &str) -> String {
        format!("{}\nQuestion:\n{}\n\nAnswer:", instruction, question)
    }

    /// Build one prompt per record, keeping only the first `cap` records.
    ///
    /// A cap of `None` or `Some(0)` keeps every record.
    pub fn build_prompts(
        records: &[QuestionRecord],
        instruction: &str,
        cap: Option<usize>,
    ) -> Vec<String> {
        capped(records, cap)
            .iter()
            .map(|r| Self::question_prompt(instruction, r.question()))
            .collect()
    }
}
