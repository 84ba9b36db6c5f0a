use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A role label held by an employee
///
/// An employee may hold the same label only once; assigning a duplicate is
/// a success no-op on the command side, never a second row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRole {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Owning employee
    pub employee_id: String,

    /// Free-text role label
    pub role: String,

    pub assigned_at: DateTime<Utc>,

    /// Acting employee, when known
    pub assigned_by: Option<String>,
}

impl EmployeeRole {
    /// Create a new role assignment stamped with the current time
    pub fn new(id: String, employee_id: String, role: String) -> Self {
        Self {
            id,
            employee_id,
            role,
            assigned_at: Utc::now(),
            assigned_by: None,
        }
    }
}
