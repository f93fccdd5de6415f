//! Output formatter trait

use mmlu_bench_application::BenchmarkOutput;
use mmlu_bench_domain::DomainError;

/// Trait for rendering benchmark results
pub trait OutputFormatter {
    /// Render the report for the mode the benchmark ran in
    fn format(&self, output: &BenchmarkOutput) -> Result<String, DomainError>;
}
