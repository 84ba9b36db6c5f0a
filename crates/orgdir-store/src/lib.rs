//! orgdir-store - SQLite persistence for the directory
//!
//! Provides:
//! - SQLite schema with an embedded, checksummed migrations framework
//! - Repository layer mapping the in-memory arena to relational rows
//! - Transaction-scoped unit of work for atomic multi-entity writes
//! - Full-store hydration for the snapshot-per-request model
//! - YAML seed parser and importer for bootstrapping a directory

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::hydration::load_store;
pub use repo::unit_of_work::UnitOfWork;
