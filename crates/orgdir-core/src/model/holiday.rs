use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Company holiday
///
/// Lifecycle is bound to the owning company: deleting the company removes
/// its holidays (the one cascade in the model).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Owning company
    pub company_id: String,

    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,

    /// Recurs every year on the same date
    pub is_recurring: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Holiday {
    pub fn new(id: String, company_id: String, name: String, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id,
            company_id,
            name,
            description: None,
            date,
            is_recurring: false,
            created_at: now,
            updated_at: now,
        }
    }
}
