//! Core domain concepts shared across all subdomains.
//!
//! - [`question::QuestionRecord`]: a multiple-choice question and its answer
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
