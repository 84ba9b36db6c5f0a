//! Seed files
//!
//! A YAML seed describes one company with its departments, teams,
//! employees, and holidays, using codes and emails as human-writable
//! references. `parser` validates the file; `importer` resolves the
//! references to ids and writes everything in one transaction.

mod importer;
mod parser;

pub use importer::{import_seed, ImportStats};
pub use parser::{parse_seed, SeedCompany, SeedDepartment, SeedEmployee, SeedFile};
