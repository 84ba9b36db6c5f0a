use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Company - the root of the containment hierarchy
///
/// Exactly one company is expected per directory; the org-chart builder
/// projects from the first company when several exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Display name (required, non-empty)
    pub name: String,

    /// Short organizational code
    pub code: String,

    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tax_code: Option<String>,

    /// Inactive companies stay in the store but are flagged
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Create a new active Company with current timestamps
    pub fn new(id: String, name: String, code: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            code,
            description: None,
            address: None,
            phone: None,
            email: None,
            tax_code: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
