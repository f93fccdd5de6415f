//! Progress display while requests run

pub mod reporter;
