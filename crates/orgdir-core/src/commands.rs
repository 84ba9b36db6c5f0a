//! Command sum type and its payloads
//!
//! Every mutation enters the core as one [`Command`] variant. The engine
//! constructs commands from its inbound surface, and [`crate::apply`] is the
//! single dispatch point, so adding a mutation means adding a variant here
//! and a match arm there.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{EmployeeStatus, EmployeeType, Gender};

/// Payload for creating a company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tax_code: Option<String>,
}

/// Partial update for a company. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tax_code: Option<String>,
    pub is_active: Option<bool>,
}

/// Payload for creating a department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDepartment {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub company_id: String,
    pub manager_id: Option<String>,
    pub parent_department_id: Option<String>,
    pub sort_order: i32,
}

/// Partial update for a department. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub manager_id: Option<Option<String>>,
    pub parent_department_id: Option<Option<String>>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Payload for creating a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub department_id: String,
    pub leader_id: Option<String>,
    pub sort_order: i32,
}

/// Partial update for a team. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub leader_id: Option<Option<String>>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Payload for hiring an employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub identity_number: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub job_title: Option<String>,
    pub base_salary: Option<f64>,
    pub employee_type: Option<EmployeeType>,
    pub department_id: Option<String>,
    pub team_id: Option<String>,
    pub manager_id: Option<String>,
    pub external_user_id: Option<String>,
}

/// Partial update for an employee.
///
/// Plain `Option<T>` fields are skip-if-`None`; reference fields use
/// `Option<Option<String>>` so callers can distinguish "leave alone"
/// (`None`) from "clear the link" (`Some(None)`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub address: Option<String>,
    pub position: Option<String>,
    pub job_title: Option<String>,
    pub base_salary: Option<f64>,
    pub bank_account: Option<String>,
    pub bank_name: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub employee_type: Option<EmployeeType>,
    pub department_id: Option<Option<String>>,
    pub team_id: Option<Option<String>>,
    pub manager_id: Option<Option<String>>,
    pub termination_date: Option<NaiveDate>,
}

/// Payload for declaring a company holiday
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHoliday {
    pub company_id: String,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub is_recurring: bool,
}

/// Payload for attaching a document to an employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocument {
    pub employee_id: String,
    pub document_type: String,
    pub file_name: String,
    pub file_path: String,
    pub uploaded_by: Option<String>,
}

/// Payload for recording an emergency contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContact {
    pub employee_id: String,
    pub name: String,
    pub relationship: Option<String>,
    pub phone: String,
    pub is_primary: bool,
}

/// Every mutation the core accepts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Command {
    CompanyCreate(NewCompany),
    CompanyUpdate { company_id: String, patch: CompanyPatch },
    CompanyDelete { company_id: String },
    DepartmentCreate(NewDepartment),
    DepartmentUpdate { department_id: String, patch: DepartmentPatch },
    DepartmentDelete { department_id: String },
    TeamCreate(NewTeam),
    TeamUpdate { team_id: String, patch: TeamPatch },
    TeamDelete { team_id: String },
    EmployeeCreate(NewEmployee),
    EmployeeUpdate { employee_id: String, patch: EmployeePatch },
    EmployeeDelete { employee_id: String },
    RoleAssign {
        employee_id: String,
        role: String,
        assigned_by: Option<String>,
    },
    HolidayCreate(NewHoliday),
    HolidayDelete { holiday_id: String },
    DocumentAdd(NewDocument),
    ContactAdd(NewContact),
}

impl Command {
    /// Short operation label, used for log fields and audit actions.
    pub fn name(&self) -> &'static str {
        match self {
            Command::CompanyCreate(_) => "company_create",
            Command::CompanyUpdate { .. } => "company_update",
            Command::CompanyDelete { .. } => "company_delete",
            Command::DepartmentCreate(_) => "department_create",
            Command::DepartmentUpdate { .. } => "department_update",
            Command::DepartmentDelete { .. } => "department_delete",
            Command::TeamCreate(_) => "team_create",
            Command::TeamUpdate { .. } => "team_update",
            Command::TeamDelete { .. } => "team_delete",
            Command::EmployeeCreate(_) => "employee_create",
            Command::EmployeeUpdate { .. } => "employee_update",
            Command::EmployeeDelete { .. } => "employee_delete",
            Command::RoleAssign { .. } => "role_assign",
            Command::HolidayCreate(_) => "holiday_create",
            Command::HolidayDelete { .. } => "holiday_delete",
            Command::DocumentAdd(_) => "document_add",
            Command::ContactAdd(_) => "contact_add",
        }
    }

    /// The type name of the entity the command targets, for audit rows.
    pub fn entity_type(&self) -> &'static str {
        match self {
            Command::CompanyCreate(_)
            | Command::CompanyUpdate { .. }
            | Command::CompanyDelete { .. } => "Company",
            Command::DepartmentCreate(_)
            | Command::DepartmentUpdate { .. }
            | Command::DepartmentDelete { .. } => "Department",
            Command::TeamCreate(_) | Command::TeamUpdate { .. } | Command::TeamDelete { .. } => {
                "Team"
            }
            Command::EmployeeCreate(_)
            | Command::EmployeeUpdate { .. }
            | Command::EmployeeDelete { .. } => "Employee",
            Command::RoleAssign { .. } => "EmployeeRole",
            Command::HolidayCreate(_) | Command::HolidayDelete { .. } => "Holiday",
            Command::DocumentAdd(_) => "EmployeeDocument",
            Command::ContactAdd(_) => "EmployeeContact",
        }
    }
}

/// What a successfully applied command produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Created { id: String },
    Updated { id: String },
    Deleted { id: String },
    RoleAssigned { employee_id: String, already_assigned: bool },
}

impl CommandOutcome {
    /// Id of the entity the outcome refers to
    pub fn entity_id(&self) -> &str {
        match self {
            CommandOutcome::Created { id }
            | CommandOutcome::Updated { id }
            | CommandOutcome::Deleted { id } => id,
            CommandOutcome::RoleAssigned { employee_id, .. } => employee_id,
        }
    }
}
