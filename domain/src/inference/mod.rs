//! Inference replies and the counters aggregated from them

pub mod counters;
pub mod response;

pub use counters::{AggregateCounters, nanos_to_millis, tokens_per_second};
pub use response::{ERROR_RESPONSE, InferenceResponse, NO_RESPONSE};
