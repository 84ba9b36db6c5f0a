//! Engine-level read queries

mod engine_query;

pub use engine_query::*;
