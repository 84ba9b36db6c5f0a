//! orgdir-core - Canonical in-memory directory kernel
//!
//! This crate provides the foundational data structures and operations for
//! the organizational directory, including:
//! - Company/Department/Team/Employee models with full CRUD semantics
//! - The separate manager reporting graph and its cycle checks
//! - Directory query pipeline (filter, search, sort, paginate)
//! - Org-chart tree materialization
//! - Dual-path manager permission validation
//! - Hierarchy validation and invariant enforcement
//!
//! All state mutation flows through `apply()`; persistence lives in
//! `orgdir-store` and orchestration in `orgdir-engine`.

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;

// Re-export commonly used types
pub use apply::apply;
pub use commands::{Command, CommandOutcome};
pub use errors::{ErrorKind, OrgDirError, Result, ServiceError};
pub use model::{
    Company, Department, Employee, EmployeeStatus, EmployeeType, Gender, Team,
};
pub use ops::Store;
