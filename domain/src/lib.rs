//! Domain layer for mmlu-bench
//!
//! This crate contains the core benchmark concepts: question records, prompt
//! building, parsed inference replies, aggregated counters and the accuracy
//! analysis. It performs no I/O.
//!
//! # Data flow
//!
//! ```text
//! QuestionRecord ──► PromptTemplate ──► prompts
//!                                          │ (application layer calls the endpoint)
//!                                          ▼
//! InferenceResponse ──► AggregateCounters   ResponseMatrix
//!                                                │
//!                        analyze_first_run ◄─────┴────► analyze_variance
//! ```

pub mod analysis;
pub mod core;
pub mod inference;
pub mod prompt;

// Re-export commonly used types
pub use analysis::{
    AccuracyReport, PromptVariance, ResponseMatrix, VarianceReport, analyze_first_run,
    analyze_variance,
};
pub use self::core::{
    error::DomainError,
    question::{MISSING_ANSWER, QuestionRecord, capped, predefined_answers},
};
pub use inference::{
    AggregateCounters, ERROR_RESPONSE, InferenceResponse, NO_RESPONSE, nanos_to_millis,
    tokens_per_second,
};
pub use prompt::PromptTemplate;
