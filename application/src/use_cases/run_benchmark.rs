//! Run Benchmark use case
//!
//! Drives the full benchmark: prompts are built from the question set, every
//! prompt is sent once per run until it yields a single-character answer, and
//! all calls feed one [`AggregateCounters`].
//!
//! Requests are strictly sequential. The outer loop is the run, the inner
//! loop is the prompt, so run `r` finishes every prompt before run `r + 1`
//! begins.

use crate::config::BenchParams;
use crate::ports::inference_gateway::InferenceGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use mmlu_bench_domain::{
    AccuracyReport, AggregateCounters, DomainError, InferenceResponse, PromptTemplate,
    QuestionRecord, ResponseMatrix, VarianceReport, analyze_first_run, analyze_variance,
    predefined_answers,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a benchmark
#[derive(Error, Debug)]
pub enum RunBenchmarkError {
    #[error("No questions to benchmark")]
    NoQuestions,

    #[error(
        "Prompt {prompt_index} gave no single-character answer after {attempts} attempts (last: {last_response:?})"
    )]
    AttemptsExhausted {
        prompt_index: usize,
        attempts: usize,
        last_response: String,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Input for the RunBenchmark use case
#[derive(Debug, Clone)]
pub struct RunBenchmarkInput {
    /// The full question set, in file order
    pub records: Vec<QuestionRecord>,
    /// Loop control
    pub params: BenchParams,
}

impl RunBenchmarkInput {
    pub fn new(records: Vec<QuestionRecord>, params: BenchParams) -> Self {
        Self { records, params }
    }
}

/// Everything the reporter needs after a benchmark
#[derive(Debug, Clone)]
pub struct BenchmarkOutput {
    /// Trimmed expected answers for the benchmarked slice
    pub predefined_answers: Vec<String>,
    /// `matrix.rows()[prompt][run]`
    pub matrix: ResponseMatrix,
    /// Counters over every call, re-asks included
    pub counters: AggregateCounters,
    /// Wall time spent issuing requests
    pub elapsed: Duration,
    /// Whether the benchmark ran in multi-run debug mode
    pub debug: bool,
}

impl BenchmarkOutput {
    /// First-run accuracy (single-run mode)
    pub fn accuracy(&self) -> Result<AccuracyReport, DomainError> {
        analyze_first_run(&self.predefined_answers, &self.matrix)
    }

    /// Per-prompt variance across runs (debug mode)
    pub fn variance(&self) -> Result<VarianceReport, DomainError> {
        analyze_variance(&self.predefined_answers, &self.matrix)
    }
}

/// Use case for benchmarking an inference endpoint against a question set
pub struct RunBenchmarkUseCase {
    gateway: Arc<dyn InferenceGateway>,
}

impl RunBenchmarkUseCase {
    pub fn new(gateway: Arc<dyn InferenceGateway>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunBenchmarkInput,
    ) -> Result<BenchmarkOutput, RunBenchmarkError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunBenchmarkInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<BenchmarkOutput, RunBenchmarkError> {
        let params = &input.params;
        let prompts =
            PromptTemplate::build_prompts(&input.records, &params.instruction, params.max_prompts);
        if prompts.is_empty() {
            return Err(RunBenchmarkError::NoQuestions);
        }

        let runs = params.effective_runs();
        info!(
            "Benchmarking model {} with {} prompts x {} runs",
            self.gateway.model(),
            prompts.len(),
            runs
        );

        let mut counters = AggregateCounters::new();
        let start = Instant::now();
        let matrix = match self
            .run(&prompts, runs, params.max_attempts, &mut counters, progress)
            .await
        {
            Ok(matrix) => matrix,
            Err(e) => {
                warn!(
                    "Benchmark aborted after {:.2}s ({} calls, {} failed)",
                    start.elapsed().as_secs_f64(),
                    counters.calls,
                    counters.failed_calls
                );
                return Err(e);
            }
        };
        let elapsed = start.elapsed();

        info!(
            "Benchmark finished in {:.2}s ({} calls, {} failed)",
            elapsed.as_secs_f64(),
            counters.calls,
            counters.failed_calls
        );

        Ok(BenchmarkOutput {
            predefined_answers: predefined_answers(&input.records, params.max_prompts),
            matrix,
            counters,
            elapsed,
            debug: params.debug,
        })
    }

    /// Send every prompt once per run and collect the answers.
    pub async fn run(
        &self,
        prompts: &[String],
        runs: usize,
        max_attempts: usize,
        counters: &mut AggregateCounters,
        progress: &dyn ProgressNotifier,
    ) -> Result<ResponseMatrix, RunBenchmarkError> {
        progress.on_benchmark_start(runs, prompts.len());
        let result = self
            .fill_matrix(prompts, runs, max_attempts, counters, progress)
            .await;
        // The display is finished on the error path too.
        progress.on_benchmark_complete();
        result
    }

    async fn fill_matrix(
        &self,
        prompts: &[String],
        runs: usize,
        max_attempts: usize,
        counters: &mut AggregateCounters,
        progress: &dyn ProgressNotifier,
    ) -> Result<ResponseMatrix, RunBenchmarkError> {
        let mut matrix = ResponseMatrix::new(prompts.len());

        for run in 0..runs {
            debug!("Run {}/{}", run + 1, runs);
            progress.on_run_start(run);

            for (i, prompt) in prompts.iter().enumerate() {
                let answer = self
                    .ensure_single_character(i, prompt, max_attempts, counters, progress)
                    .await?;
                progress.on_prompt_complete(run, i, &answer);
                matrix.push(i, answer)?;
            }

            progress.on_run_complete(run);
        }

        Ok(matrix)
    }

    /// Ask the same prompt until the trimmed reply is exactly one character.
    ///
    /// Gives up after `max_attempts` calls (at least one call is always made).
    pub async fn ensure_single_character(
        &self,
        prompt_index: usize,
        prompt: &str,
        max_attempts: usize,
        counters: &mut AggregateCounters,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, RunBenchmarkError> {
        let max_attempts = max_attempts.max(1);
        let mut last_response = String::new();

        for attempt in 1..=max_attempts {
            let response = self.call(prompt, counters).await;
            if response.is_single_character() {
                return Ok(response.text().to_string());
            }

            last_response = response.text().to_string();
            debug!(
                "Prompt {} attempt {}: reply {:?} is not a single character, asking again",
                prompt_index, attempt, last_response
            );
            progress.on_retry(prompt_index, attempt, &last_response);
        }

        warn!(
            "Prompt {} exhausted {} attempts without a single-character reply",
            prompt_index, max_attempts
        );
        Err(RunBenchmarkError::AttemptsExhausted {
            prompt_index,
            attempts: max_attempts,
            last_response,
        })
    }

    /// Send one prompt and record the reply in `counters`.
    ///
    /// Gateway failures never propagate: they become the error sentinel,
    /// which still counts as a call.
    pub async fn call(&self, prompt: &str, counters: &mut AggregateCounters) -> InferenceResponse {
        let response = match self.gateway.generate(prompt).await {
            Ok(response) => {
                debug!("Received reply {:?}", response.text());
                response
            }
            Err(e) => {
                warn!("Error during API call: {}", e);
                InferenceResponse::error()
            }
        };
        counters.record(&response);
        response
    }
}
