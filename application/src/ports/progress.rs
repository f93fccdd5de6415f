//! Progress notification port
//!
//! Defines the interface for reporting progress while a benchmark runs.

/// Callback for progress updates during a benchmark
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first request with the total prompt count
    fn on_benchmark_start(&self, runs: usize, prompts: usize);

    /// Called when a run starts
    fn on_run_start(&self, _run: usize) {}

    /// Called when a prompt produced a valid single-character answer
    fn on_prompt_complete(&self, run: usize, prompt_index: usize, answer: &str);

    /// Called when a reply was rejected and the prompt is asked again
    fn on_retry(&self, _prompt_index: usize, _attempt: usize, _response: &str) {}

    /// Called when a run finished all prompts
    fn on_run_complete(&self, _run: usize) {}

    /// Called once after the last request
    fn on_benchmark_complete(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_benchmark_start(&self, _runs: usize, _prompts: usize) {}
    fn on_prompt_complete(&self, _run: usize, _prompt_index: usize, _answer: &str) {}
    fn on_benchmark_complete(&self) {}
}
