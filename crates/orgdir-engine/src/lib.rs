//! orgdir-engine - Orchestration layer
//!
//! Coordinates the pure core against the SQLite store: commands hydrate a
//! snapshot, run through `orgdir_core::apply`, and the resulting diff is
//! persisted with an audit row in one transaction. Queries hydrate and
//! delegate to the core's read-side projections.

pub mod commands;
pub mod queries;

pub use commands::execute_command;
