//! First-run accuracy against the predefined answers

use super::matrix::ResponseMatrix;
use crate::core::error::DomainError;
use serde::Serialize;

/// Predefined answers paired with the first run's responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyReport {
    pub predefined_answers: Vec<String>,
    pub responses: Vec<String>,
    pub matches: usize,
    /// Percentage in `0.0..=100.0`
    pub accuracy: f64,
}

impl AccuracyReport {
    pub fn total(&self) -> usize {
        self.predefined_answers.len()
    }

    /// Rows of `(predefined, response)`
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.predefined_answers
            .iter()
            .map(String::as_str)
            .zip(self.responses.iter().map(String::as_str))
    }
}

/// Compare the first run of each prompt against its predefined answer.
pub fn analyze_first_run(
    predefined_answers: &[String],
    matrix: &ResponseMatrix,
) -> Result<AccuracyReport, DomainError> {
    if predefined_answers.len() != matrix.prompt_count() {
        return Err(DomainError::LengthMismatch {
            answers: predefined_answers.len(),
            responses: matrix.prompt_count(),
        });
    }

    let responses: Vec<String> = matrix
        .first_run()
        .ok_or(DomainError::NoRuns)?
        .into_iter()
        .map(str::to_string)
        .collect();

    let matches = predefined_answers
        .iter()
        .zip(&responses)
        .filter(|(expected, got)| expected == got)
        .count();

    let total = predefined_answers.len();
    let accuracy = if total == 0 {
        0.0
    } else {
        matches as f64 / total as f64 * 100.0
    };

    Ok(AccuracyReport {
        predefined_answers: predefined_answers.to_vec(),
        responses,
        matches,
        accuracy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn matrix(rows: Vec<Vec<&str>>) -> ResponseMatrix {
        rows.into_iter()
            .map(|r| r.into_iter().map(str::to_string).collect())
            .collect::<Vec<Vec<String>>>()
            .into()
    }

    #[test]
    fn test_two_of_three() {
        let report =
            analyze_first_run(&answers(&["A", "B", "C"]), &matrix(vec![vec!["A"], vec!["B"], vec!["D"]]))
                .unwrap();

        assert_eq!(report.matches, 2);
        assert_eq!(report.total(), 3);
        assert_eq!(format!("{:.2}", report.accuracy), "66.67");
    }

    #[test]
    fn test_only_first_run_counts() {
        let report =
            analyze_first_run(&answers(&["A", "B"]), &matrix(vec![vec!["A", "C"], vec!["C", "B"]])).unwrap();

        assert_eq!(report.responses, vec!["A", "C"]);
        assert_eq!(report.matches, 1);
        assert_eq!(report.accuracy, 50.0);
    }

    #[test]
    fn test_empty_set_has_zero_accuracy() {
        let report = analyze_first_run(&[], &ResponseMatrix::new(0)).unwrap();
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn test_length_mismatch() {
        let err = analyze_first_run(&answers(&["A", "B"]), &matrix(vec![vec!["A"]])).unwrap_err();
        assert_eq!(
            err,
            DomainError::LengthMismatch {
                answers: 2,
                responses: 1
            }
        );
    }

    #[test]
    fn test_no_runs() {
        let err = analyze_first_run(&answers(&["A"]), &ResponseMatrix::new(1)).unwrap_err();
        assert_eq!(err, DomainError::NoRuns);
    }

    #[test]
    fn test_rows_pairs_answers() {
        let report = analyze_first_run(&answers(&["A"]), &matrix(vec![vec!["B"]])).unwrap();
        assert_eq!(report.rows().collect::<Vec<_>>(), vec![("A", "B")]);
    }
}
