//! Analysis of collected responses
//!
//! - [`accuracy`]: single-run mode: first run vs. predefined answers
//! - [`variance`]: debug mode: wrong and distinct counts across all runs

pub mod accuracy;
pub mod matrix;
pub mod variance;

pub use accuracy::{AccuracyReport, analyze_first_run};
pub use matrix::ResponseMatrix;
pub use variance::{PromptVariance, VarianceReport, analyze_variance};
