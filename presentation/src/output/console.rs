//! Console output formatter for benchmark results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use mmlu_bench_application::BenchmarkOutput;
use mmlu_bench_domain::{
    AccuracyReport, AggregateCounters, DomainError, InferenceResponse, VarianceReport,
    nanos_to_millis,
};
use std::fmt::Write;
use std::time::Duration;

const NOT_AVAILABLE: &str = "N/A";

/// Formats benchmark results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colored output off (it is on by default when stdout is a terminal)
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format the report for the mode the benchmark ran in, followed by
    /// the inference statistics block.
    pub fn format(output: &BenchmarkOutput) -> Result<String, DomainError> {
        let table = if output.debug {
            Self::format_debug(&output.variance()?)
        } else {
            Self::format_single_run(&output.accuracy()?)
        };
        Ok(table + &Self::format_statistics(output.elapsed, &output.counters))
    }

    /// Predefined answer vs. first-run response, then accuracy
    pub fn format_single_run(report: &AccuracyReport) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{:<8}{:<10}", "Answer", "Responses");
        let _ = writeln!(out, "{}", "=".repeat(18));
        for (predefined, response) in report.rows() {
            let _ = writeln!(out, "{:<8}{:<20}", predefined, response);
        }

        let _ = writeln!(out, "\n{}", "Response statistics:".cyan().bold());
        let _ = writeln!(out, "  Total requests:   {}", report.total());
        let _ = writeln!(out, "  Total matches:    {}", report.matches);
        let _ = writeln!(out, "  Accuracy:         {:.2}%", report.accuracy);

        out
    }

    /// One row per prompt with every run's response and the variance counts
    pub fn format_debug(report: &VarianceReport) -> String {
        let mut header = vec!["Answer".to_string()];
        header.extend((1..=report.run_count).map(|i| format!("Resp.{} ", i)));
        header.push("Wrong Resp. count".to_string());
        header.push("Different Resp. count".to_string());

        let mut out = String::new();
        let _ = writeln!(out, "{}", header.join("\t"));
        let _ = writeln!(out, "{}", "=".repeat(10 * header.len()));

        for prompt in &report.prompts {
            let mut row = vec![prompt.predefined_answer.clone()];
            row.extend(prompt.responses.iter().cloned());
            row.push(prompt.wrong_count.to_string());
            row.push(prompt.distinct_count.to_string());
            let _ = writeln!(out, "{}", row.join("\t"));
        }

        out
    }

    /// Wall time, first/last reply details and the summed counters
    pub fn format_statistics(elapsed: Duration, counters: &AggregateCounters) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "\n{}", "Inference statistics:".cyan().bold());
        let _ = writeln!(
            out,
            "\n  Total time for inference measured by client: {:.2} seconds",
            elapsed.as_secs_f64()
        );
        Self::write_snapshot(&mut out, "First", counters.first_response());
        Self::write_snapshot(&mut out, "Last", counters.last_response());

        let _ = writeln!(
            out,
            "\n  {}",
            "Metrics summed over all API responses:".cyan().bold()
        );
        let _ = writeln!(out, "  API calls:                      {}", counters.calls);
        let _ = writeln!(
            out,
            "  Failed calls:                   {}",
            counters.failed_calls
        );
        let _ = writeln!(
            out,
            "  Total Duration in ms:           {:.2}",
            nanos_to_millis(counters.total_duration)
        );
        let _ = writeln!(
            out,
            "  Load Duration in ms:            {:.2}",
            nanos_to_millis(counters.load_duration)
        );
        let _ = writeln!(
            out,
            "  Prompt Eval Count:              {}",
            counters.prompt_eval_count
        );
        let _ = writeln!(
            out,
            "  Prompt Eval Duration in ms:     {:.2}",
            nanos_to_millis(counters.prompt_eval_duration)
        );
        let _ = writeln!(out, "  Eval Count:                     {}", counters.eval_count);
        let _ = writeln!(
            out,
            "  Eval Duration in ms:            {:.2}",
            nanos_to_millis(counters.eval_duration)
        );
        let _ = writeln!(
            out,
            "  Prompt Token / s:               {:.2}",
            counters.prompt_tokens_per_second()
        );
        let _ = writeln!(
            out,
            "  Eval Token / s:                 {:.2}",
            counters.eval_tokens_per_second()
        );

        out
    }

    fn write_snapshot(out: &mut String, label: &str, response: Option<&InferenceResponse>) {
        let created_at = response
            .and_then(InferenceResponse::created_at_display)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let load_ms = response
            .map(|r| format!("{:.2}", nanos_to_millis(r.load_duration)))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let _ = writeln!(out, "  {:<5} response created_at:          {}", label, created_at);
        let _ = writeln!(out, "  {:<5} response load_duration in ms: {}", label, load_ms);
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, output: &BenchmarkOutput) -> Result<String, DomainError> {
        Self::format(output)
    }
}
