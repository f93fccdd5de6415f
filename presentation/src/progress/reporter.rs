//! Progress reporting for benchmark execution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use mmlu_bench_application::ProgressNotifier;
use std::sync::Mutex;

/// Reports progress with a single bar over every request of the benchmark
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
    runs: Mutex<usize>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            runs: Mutex::new(0),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_benchmark_start(&self, runs: usize, prompts: usize) {
        let pb = ProgressBar::new((runs * prompts) as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Benchmark");
        pb.set_message("Starting...");

        if let Ok(mut total) = self.runs.lock() {
            *total = runs;
        }
        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_run_start(&self, run: usize) {
        let runs = self.runs.lock().map(|r| *r).unwrap_or(0);
        self.with_bar(|pb| pb.set_prefix(format!("Run {}/{}", run + 1, runs)));
    }

    fn on_prompt_complete(&self, _run: usize, prompt_index: usize, answer: &str) {
        self.with_bar(|pb| {
            pb.set_message(format!("{} Q{} -> {}", "v".green(), prompt_index + 1, answer));
            pb.inc(1);
        });
    }

    fn on_retry(&self, prompt_index: usize, attempt: usize, _response: &str) {
        self.with_bar(|pb| {
            pb.set_message(format!(
                "{} Q{} re-ask #{}",
                "~".yellow(),
                prompt_index + 1,
                attempt
            ));
        });
    }

    fn on_benchmark_complete(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Prints one line per finished run with that run's answers, in prompt order.
pub struct SimpleProgress {
    current: Mutex<Vec<String>>,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(Vec::new()),
        }
    }

    /// Render a finished run's answers
    pub fn run_line(run: usize, answers: &[String]) -> String {
        format!("Run {}: {}", run + 1, answers.join(" "))
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_benchmark_start(&self, runs: usize, prompts: usize) {
        eprintln!(
            "{} {} ({} runs x {} prompts)",
            "->".cyan(),
            "Benchmark".bold(),
            runs,
            prompts
        );
    }

    fn on_run_start(&self, _run: usize) {
        if let Ok(mut current) = self.current.lock() {
            current.clear();
        }
    }

    fn on_prompt_complete(&self, _run: usize, _prompt_index: usize, answer: &str) {
        if let Ok(mut current) = self.current.lock() {
            current.push(answer.to_string());
        }
    }

    fn on_retry(&self, prompt_index: usize, attempt: usize, response: &str) {
        eprintln!(
            "  {} Q{} reply {:?} is not a single character, asking again (#{})",
            "~".yellow(),
            prompt_index + 1,
            response,
            attempt
        );
    }

    fn on_run_complete(&self, run: usize) {
        if let Ok(current) = self.current.lock() {
            eprintln!("  {} {}", "v".green(), Self::run_line(run, &current));
        }
    }

    fn on_benchmark_complete(&self) {
        eprintln!();
    }
}
