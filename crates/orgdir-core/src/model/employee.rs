use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Employment lifecycle status (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Inactive,
    OnLeave,
    Probation,
    Terminated,
    Resigned,
}

impl EmployeeStatus {
    /// Stable string form used in storage and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
            EmployeeStatus::OnLeave => "OnLeave",
            EmployeeStatus::Probation => "Probation",
            EmployeeStatus::Terminated => "Terminated",
            EmployeeStatus::Resigned => "Resigned",
        }
    }

    /// Parse from the stable string form, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Some(EmployeeStatus::Active),
            "inactive" => Some(EmployeeStatus::Inactive),
            "onleave" => Some(EmployeeStatus::OnLeave),
            "probation" => Some(EmployeeStatus::Probation),
            "terminated" => Some(EmployeeStatus::Terminated),
            "resigned" => Some(EmployeeStatus::Resigned),
            _ => None,
        }
    }
}

/// Employment contract type (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeType {
    FullTime,
    PartTime,
    Contract,
    Intern,
    Consultant,
}

impl EmployeeType {
    /// Stable string form used in storage and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeType::FullTime => "FullTime",
            EmployeeType::PartTime => "PartTime",
            EmployeeType::Contract => "Contract",
            EmployeeType::Intern => "Intern",
            EmployeeType::Consultant => "Consultant",
        }
    }

    /// Parse from the stable string form, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fulltime" => Some(EmployeeType::FullTime),
            "parttime" => Some(EmployeeType::PartTime),
            "contract" => Some(EmployeeType::Contract),
            "intern" => Some(EmployeeType::Intern),
            "consultant" => Some(EmployeeType::Consultant),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Employee - leaf of the containment hierarchy
///
/// Department, team and manager references are all optional; the manager
/// reference is a self-reference into the employee arena and must never
/// form a reporting cycle. Email is unique across all employees.
/// `external_user_id` is an opaque identity-provider handle passed through
/// unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Organizational code, distinct from the id
    pub employee_code: String,

    pub first_name: String,
    pub last_name: String,

    /// Unique, required contact address
    pub email: String,

    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub identity_number: Option<String>,

    /// Optional containment references
    pub department_id: Option<String>,
    pub team_id: Option<String>,

    pub position: Option<String>,
    pub job_title: Option<String>,

    /// Direct manager (self-reference into the employee arena)
    pub manager_id: Option<String>,

    /// Opaque external identity-provider user id
    pub external_user_id: Option<String>,

    pub hire_date: Option<NaiveDate>,
    pub termination_date: Option<NaiveDate>,

    pub status: EmployeeStatus,
    pub employee_type: EmployeeType,

    /// Compensation fields, all optional
    pub base_salary: Option<f64>,
    pub bank_account: Option<String>,
    pub bank_name: Option<String>,
    pub tax_code: Option<String>,
    pub social_insurance_number: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Create a new Active, FullTime employee with current timestamps
    pub fn new(
        id: String,
        employee_code: String,
        first_name: String,
        last_name: String,
        email: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            employee_code,
            first_name,
            last_name,
            email,
            phone: None,
            avatar: None,
            date_of_birth: None,
            gender: None,
            address: None,
            identity_number: None,
            department_id: None,
            team_id: None,
            position: None,
            job_title: None,
            manager_id: None,
            external_user_id: None,
            hire_date: None,
            termination_date: None,
            status: EmployeeStatus::Active,
            employee_type: EmployeeType::FullTime,
            base_salary: None,
            bank_account: None,
            bank_name: None,
            tax_code: None,
            social_insurance_number: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Derived display name, recomputed on read and never stored
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check if this employee reports to someone
    pub fn has_manager(&self) -> bool {
        self.manager_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee_defaults() {
        let e = Employee::new(
            "e1".to_string(),
            "EMP001".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
        );
        assert_eq!(e.status, EmployeeStatus::Active);
        assert_eq!(e.employee_type, EmployeeType::FullTime);
        assert!(!e.has_manager());
    }

    #[test]
    fn test_full_name_derived() {
        let e = Employee::new(
            "e1".to_string(),
            "EMP001".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
        );
        assert_eq!(e.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!(EmployeeStatus::parse("onleave"), Some(EmployeeStatus::OnLeave));
        assert_eq!(EmployeeStatus::parse("ONLEAVE"), Some(EmployeeStatus::OnLeave));
        assert_eq!(EmployeeStatus::parse("gone"), None);
    }

    #[test]
    fn test_status_roundtrip() {
        for s in [
            EmployeeStatus::Active,
            EmployeeStatus::Inactive,
            EmployeeStatus::OnLeave,
            EmployeeStatus::Probation,
            EmployeeStatus::Terminated,
            EmployeeStatus::Resigned,
        ] {
            assert_eq!(EmployeeStatus::parse(s.as_str()), Some(s));
        }
    }

    #[test]
    fn test_employee_type_roundtrip() {
        for t in [
            EmployeeType::FullTime,
            EmployeeType::PartTime,
            EmployeeType::Contract,
            EmployeeType::Intern,
            EmployeeType::Consultant,
        ] {
            assert_eq!(EmployeeType::parse(t.as_str()), Some(t));
        }
    }
}
