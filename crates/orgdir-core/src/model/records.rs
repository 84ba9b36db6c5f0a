//! Per-employee attachment records: documents and emergency contacts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document metadata attached to an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDocument {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Owning employee
    pub employee_id: String,

    pub document_type: String,
    pub file_name: String,
    pub file_path: String,

    pub uploaded_by: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl EmployeeDocument {
    pub fn new(
        id: String,
        employee_id: String,
        document_type: String,
        file_name: String,
        file_path: String,
    ) -> Self {
        Self {
            id,
            employee_id,
            document_type,
            file_name,
            file_path,
            uploaded_by: None,
            uploaded_at: Utc::now(),
        }
    }
}

/// Emergency contact attached to an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeContact {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Owning employee
    pub employee_id: String,

    pub name: String,
    pub relationship: Option<String>,
    pub phone: String,

    /// At most one primary contact is expected per employee (unchecked)
    pub is_primary: bool,
}

impl EmployeeContact {
    pub fn new(id: String, employee_id: String, name: String, phone: String) -> Self {
        Self {
            id,
            employee_id,
            name,
            relationship: None,
            phone,
            is_primary: false,
        }
    }
}
