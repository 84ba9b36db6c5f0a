//! Core types shared across orgdir facilities
//!
//! This crate provides foundational types used by both error handling
//! and logging facilities:
//!
//! - **Correlation types**: RequestId, TraceId for tying log lines and
//!   error context to a single incoming request

pub mod correlation;

pub use correlation::{RequestId, TraceId};
