//! Prompt building
//!
//! [`PromptTemplate`] formats question records into the instruction text sent
//! to the inference endpoint.

pub mod template;

pub use template::PromptTemplate;
