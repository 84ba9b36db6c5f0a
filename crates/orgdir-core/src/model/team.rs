use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Team - third tier of the containment hierarchy
///
/// Belongs to one Department; the optional leader is an Employee and feeds
/// the team-leadership path of the manager permission validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Display name (required, non-empty)
    pub name: String,

    /// Short organizational code
    pub code: String,

    pub description: Option<String>,

    /// Owning department
    pub department_id: String,

    /// Optional leading employee
    pub leader_id: Option<String>,

    /// Display ordering among siblings
    pub sort_order: i32,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new active Team under the given department
    pub fn new(id: String, name: String, code: String, department_id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            code,
            description: None,
            department_id,
            leader_id: None,
            sort_order: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_team() {
        let team = Team::new(
            "t1".to_string(),
            "Platform".to_string(),
            "PLT".to_string(),
            "d1".to_string(),
        );
        assert_eq!(team.department_id, "d1");
        assert!(team.leader_id.is_none());
    }
}
