//! Engine-level command execution

mod engine_command;

pub use engine_command::execute_command;
