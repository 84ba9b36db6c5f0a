use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only audit record for a mutating command
///
/// Written by the engine after each successful command, inside the same
/// transaction. The core never updates or deletes audit rows; the
/// in-memory `Store` does not carry them at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Entity type tag, e.g. "employee", "department"
    pub entity_type: String,

    /// Id of the affected entity
    pub entity_id: String,

    /// Action tag: "create", "update", "delete", "assign_role"
    pub action: String,

    /// JSON snapshot before the change, when one existed
    pub old_values: Option<String>,

    /// JSON snapshot after the change, when one remains
    pub new_values: Option<String>,

    /// Acting employee, when known
    pub performed_by: Option<String>,

    pub timestamp: DateTime<Utc>,
}

impl AuditLog {
    pub fn new(id: String, entity_type: String, entity_id: String, action: String) -> Self {
        Self {
            id,
            entity_type,
            entity_id,
            action,
            old_values: None,
            new_values: None,
            performed_by: None,
            timestamp: Utc::now(),
        }
    }
}
