//! Aggregate inference counters
//!
//! Running sums over every call made during a benchmark. The accumulator is
//! owned by whoever drives the calls and read once when the report is built.

use super::response::InferenceResponse;
use serde::Serialize;

const NANOS_PER_MILLI: f64 = 1_000_000.0;
const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Convert a nanosecond count to milliseconds
pub fn nanos_to_millis(nanos: u64) -> f64 {
    nanos as f64 / NANOS_PER_MILLI
}

/// Tokens per second for a phase, given its summed duration and token count.
///
/// Returns `0.0` when either input is zero instead of dividing by zero.
pub fn tokens_per_second(duration_nanos: u64, token_count: u64) -> f64 {
    if token_count == 0 || duration_nanos == 0 {
        return 0.0;
    }
    let nanos_per_token = duration_nanos as f64 / token_count as f64;
    NANOS_PER_SECOND / nanos_per_token
}

/// Accumulated timing and token counters across all calls
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateCounters {
    pub total_duration: u64,
    pub load_duration: u64,
    pub prompt_eval_count: u64,
    pub prompt_eval_duration: u64,
    pub eval_count: u64,
    pub eval_duration: u64,
    /// Every call made, including re-asks and failed calls
    pub calls: u64,
    /// Calls that failed and were replaced by the error sentinel
    pub failed_calls: u64,
    first: Option<InferenceResponse>,
    last: Option<InferenceResponse>,
}

impl AggregateCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one call's reply to the running totals.
    ///
    /// Degraded replies only bump the call counters; the first/last snapshots
    /// keep pointing at real server replies.
    pub fn record(&mut self, response: &InferenceResponse) {
        self.calls += 1;
        if response.is_degraded() {
            self.failed_calls += 1;
            return;
        }

        self.total_duration = self.total_duration.saturating_add(response.total_duration);
        self.load_duration = self.load_duration.saturating_add(response.load_duration);
        self.prompt_eval_count = self
            .prompt_eval_count
            .saturating_add(response.prompt_eval_count);
        self.prompt_eval_duration = self
            .prompt_eval_duration
            .saturating_add(response.prompt_eval_duration);
        self.eval_count = self.eval_count.saturating_add(response.eval_count);
        self.eval_duration = self.eval_duration.saturating_add(response.eval_duration);

        if self.first.is_none() {
            self.first = Some(response.clone());
        }
        self.last = Some(response.clone());
    }

    /// The first successful reply seen
    pub fn first_response(&self) -> Option<&InferenceResponse> {
        self.first.as_ref()
    }

    /// The most recent successful reply seen
    pub fn last_response(&self) -> Option<&InferenceResponse> {
        self.last.as_ref()
    }

    /// Prompt-evaluation throughput in tokens per second
    pub fn prompt_tokens_per_second(&self) -> f64 {
        tokens_per_second(self.prompt_eval_duration, self.prompt_eval_count)
    }

    /// Generation throughput in tokens per second
    pub fn eval_tokens_per_second(&self) -> f64 {
        tokens_per_second(self.eval_duration, self.eval_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(eval_count: u64, eval_duration: u64) -> InferenceResponse {
        InferenceResponse {
            eval_count,
            eval_duration,
            ..InferenceResponse::from_text("A")
        }
    }

    #[test]
    fn test_sums_over_k_calls() {
        let mut counters = AggregateCounters::new();
        let k = 7;
        for _ in 0..k {
            counters.record(&reply(10, 1_000_000));
        }
        assert_eq!(counters.eval_count, 10 * k);
        assert_eq!(counters.eval_duration, 1_000_000 * k);
        assert_eq!(counters.calls, k);
    }

    #[test]
    fn test_first_and_last_snapshots() {
        let mut counters = AggregateCounters::new();
        counters.record(&InferenceResponse::from_text("first"));
        counters.record(&InferenceResponse::from_text("middle"));
        counters.record(&InferenceResponse::from_text("last"));

        assert_eq!(counters.first_response().unwrap().text(), "first");
        assert_eq!(counters.last_response().unwrap().text(), "last");
    }

    #[test]
    fn test_degraded_call_counts_but_adds_nothing() {
        let mut counters = AggregateCounters::new();
        counters.record(&InferenceResponse::error());

        assert_eq!(counters.calls, 1);
        assert_eq!(counters.failed_calls, 1);
        assert_eq!(counters.total_duration, 0);
        assert!(counters.first_response().is_none());
    }

    #[test]
    fn test_zero_tokens_yield_zero_rate() {
        let counters = AggregateCounters::new();
        assert_eq!(counters.prompt_eval_count, 0);
        assert_eq!(counters.prompt_tokens_per_second(), 0.0);
        assert_eq!(counters.eval_tokens_per_second(), 0.0);
        assert_eq!(tokens_per_second(0, 5), 0.0);
    }

    #[test]
    fn test_tokens_per_second() {
        // 10 tokens in 500ms
        let rate = tokens_per_second(500_000_000, 10);
        assert!((rate - 20.0).abs() < 1e-9);

        let mut counters = AggregateCounters::new();
        counters.record(&reply(10, 1_000_000));
        // 10 tokens in 1ms
        assert!((counters.eval_tokens_per_second() - 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_nanos_to_millis() {
        assert_eq!(nanos_to_millis(2_500_000), 2.5);
    }
}
