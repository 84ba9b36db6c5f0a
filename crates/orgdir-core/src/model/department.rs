use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Department - second tier of the containment hierarchy
///
/// Belongs to one Company and may nest under a parent Department, forming a
/// tree through `parent_department_id`. The parent chain must never cycle
/// back to the department itself; `rules::invariants` walks the chain
/// before any parent change is committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Display name (required, non-empty)
    pub name: String,

    /// Short organizational code
    pub code: String,

    pub description: Option<String>,

    /// Owning company
    pub company_id: String,

    /// Optional managing employee; need not belong to this department
    pub manager_id: Option<String>,

    /// Optional parent department (self-reference, forms a tree)
    pub parent_department_id: Option<String>,

    /// Display ordering among siblings
    pub sort_order: i32,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Department {
    /// Create a new active Department under the given company
    pub fn new(id: String, name: String, code: String, company_id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            code,
            description: None,
            company_id,
            manager_id: None,
            parent_department_id: None,
            sort_order: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this department is a top-level department (no parent)
    pub fn is_top_level(&self) -> bool {
        self.parent_department_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_department() {
        let dept = Department::new(
            "d1".to_string(),
            "Engineering".to_string(),
            "ENG".to_string(),
            "c1".to_string(),
        );
        assert_eq!(dept.company_id, "c1");
        assert!(dept.is_top_level());
        assert!(dept.manager_id.is_none());
        assert_eq!(dept.sort_order, 0);
    }
}
