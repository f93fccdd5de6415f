//! Question set adapters

mod json_file;

pub use json_file::JsonQuestionSource;
