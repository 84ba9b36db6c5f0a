//! Repository layer
//!
//! Bridges the in-memory arena to SQLite rows. `sqlite_repo` holds the
//! per-entity statements, `unit_of_work` scopes them to one transaction,
//! and `hydration` rebuilds a full arena from the database.

pub mod hydration;
pub mod sqlite_repo;
pub mod unit_of_work;

pub use sqlite_repo::SqliteRepo;
