//! orgdir-api - Request/response facade over the engine
//!
//! The outward-facing contract: plain-string ids and enum labels in, DTOs
//! out. Lookup endpoints treat a malformed or unknown id as "nothing
//! found" rather than an error; mutation endpoints report failures as
//! `success = false` with a message. Internal layers stay strict; the
//! leniency lives only here.

pub mod requests;
pub mod responses;
pub mod service;

pub use service::DirectoryService;
