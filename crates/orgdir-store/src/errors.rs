//! Error handling for orgdir-store
//!
//! Wraps the core ServiceError with store-specific constructors

use orgdir_core::errors::{ErrorKind, ServiceError};

/// Result type alias using ServiceError
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ServiceError {
    ServiceError::new(ErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {migration_id} failed: {reason}"))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ServiceError {
    ServiceError::new(ErrorKind::Internal)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {migration_id}: expected {expected}, got {actual}"
        ))
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ServiceError {
    ServiceError::new(ErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ServiceError {
    ServiceError::new(ErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ServiceError {
    ServiceError::new(ErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
