//! Question record value object

use serde::{Deserialize, Serialize};

/// Answer used when a record carries no `answer` field.
pub const MISSING_ANSWER: &str = "N/A";

fn missing_answer() -> String {
    MISSING_ANSWER.to_string()
}

/// A single multiple-choice question with its expected answer (Value Object)
///
/// Loaded once from the question set and never mutated afterwards. Fields
/// other than `question` and `answer` in the source file are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    question: String,
    #[serde(default = "missing_answer")]
    answer: String,
}

impl QuestionRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Get the question text, including its answer choices
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Get the raw answer as stored in the source
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Get the answer used for comparison (surrounding whitespace removed)
    pub fn expected_answer(&self) -> &str {
        self.answer.trim()
    }
}

/// Slice the first `cap` records, or all of them when no cap is set.
///
/// A cap of zero means "no cap".
pub fn capped(records: &[QuestionRecord], cap: Option<usize>) -> &[QuestionRecord] {
    match cap {
        Some(n) if n > 0 && n < records.len() => &records[..n],
        _ => records,
    }
}

/// Predefined answers for the first `cap` records, trimmed.
pub fn predefined_answers(records: &[QuestionRecord], cap: Option<usize>) -> Vec<String> {
    capped(records, cap)
        .iter()
        .map(|r| r.expected_answer().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<QuestionRecord> {
        (0..n)
            .map(|i| QuestionRecord::new(format!("Q{i}"), " A "))
            .collect()
    }

    #[test]
    fn test_deserialize_missing_answer_defaults() {
        let record: QuestionRecord =
            serde_json::from_str(r#"{"question": "What is 2+2?"}"#).unwrap();
        assert_eq!(record.question(), "What is 2+2?");
        assert_eq!(record.answer(), MISSING_ANSWER);
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let record: QuestionRecord = serde_json::from_str(
            r#"{"question": "Q", "answer": "B", "subject": "anatomy"}"#,
        )
        .unwrap();
        assert_eq!(record.answer(), "B");
    }

    #[test]
    fn test_expected_answer_is_trimmed() {
        let record = QuestionRecord::new("Q", " C\n");
        assert_eq!(record.expected_answer(), "C");
    }

    #[test]
    fn test_capped() {
        let data = records(5);
        assert_eq!(capped(&data, Some(2)).len(), 2);
        assert_eq!(capped(&data, Some(9)).len(), 5);
        assert_eq!(capped(&data, None).len(), 5);
        assert_eq!(capped(&data, Some(0)).len(), 5);
    }

    #[test]
    fn test_predefined_answers() {
        let data = records(3);
        assert_eq!(predefined_answers(&data, Some(2)), vec!["A", "A"]);
    }
}
