//! Domain model for the organizational directory
//!
//! A closed, flat set of record types related by id reference fields.
//! The containment tree is Company → Department → Team → Employee; the
//! reporting graph (`Employee.manager_id`) is a separate self-reference.

mod audit;
mod company;
mod department;
mod employee;
mod holiday;
mod records;
mod role;
mod team;

pub use audit::AuditLog;
pub use company::Company;
pub use department::Department;
pub use employee::{Employee, EmployeeStatus, EmployeeType, Gender};
pub use holiday::Holiday;
pub use records::{EmployeeContact, EmployeeDocument};
pub use role::EmployeeRole;
pub use team::Team;
