//! The directory service facade

use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::{debug, warn};
use uuid::Uuid;

use orgdir_core::commands::{Command, CommandOutcome, EmployeePatch, NewEmployee};
use orgdir_core::model::{EmployeeStatus, EmployeeType, Gender};
use orgdir_core::queries::DirectoryFilter;
use orgdir_engine::{execute_command, queries};

use crate::requests::{
    AssignRoleRequest, CreateEmployeeRequest, GetEmployeesRequest, UpdateEmployeeRequest,
    ValidateManagerPermissionRequest,
};
use crate::responses::{
    GetEmployeeResponse, GetEmployeesResponse, GetOrgChartResponse, MutationResponse,
    ValidateManagerPermissionResponse,
};

fn opt(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn valid_id(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    Uuid::parse_str(trimmed).ok()?;
    Some(trimmed)
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Stateless facade; every method borrows the caller's connection
pub struct DirectoryService;

impl DirectoryService {
    /// Directory page; empty filter strings mean "no filter"
    pub fn get_employees(conn: &Connection, req: &GetEmployeesRequest) -> GetEmployeesResponse {
        let filter = DirectoryFilter {
            department_id: opt(&req.department_id),
            team_id: opt(&req.team_id),
            search: opt(&req.search),
            page: req.page,
            page_size: req.page_size,
        };
        match queries::directory(conn, &filter) {
            Ok(page) => GetEmployeesResponse {
                employees: page.items,
                total_count: page.total_count as i64,
                page: page.page,
                page_size: page.page_size,
            },
            Err(err) => {
                warn!(error = %err, "directory query failed");
                GetEmployeesResponse::default()
            }
        }
    }

    /// Single employee lookup; malformed or unknown ids yield an empty
    /// response, never an error
    pub fn get_employee(conn: &Connection, employee_id: &str) -> GetEmployeeResponse {
        let Some(id) = valid_id(employee_id) else {
            debug!(employee_id, "malformed employee id");
            return GetEmployeeResponse::default();
        };
        match queries::employee_by_id(conn, id) {
            Ok(employee) => GetEmployeeResponse { employee },
            Err(err) => {
                warn!(error = %err, "employee lookup failed");
                GetEmployeeResponse::default()
            }
        }
    }

    /// Employees assigned to a department
    pub fn get_employees_by_department(
        conn: &Connection,
        department_id: &str,
    ) -> GetEmployeesResponse {
        let Some(id) = valid_id(department_id) else {
            return GetEmployeesResponse::default();
        };
        match queries::employees_by_department(conn, id) {
            Ok(employees) => {
                let total = employees.len() as i64;
                GetEmployeesResponse {
                    employees,
                    total_count: total,
                    page: 1,
                    page_size: total.max(1) as i32,
                }
            }
            Err(err) => {
                warn!(error = %err, "department members query failed");
                GetEmployeesResponse::default()
            }
        }
    }

    /// Members of a team
    pub fn get_team_members(conn: &Connection, team_id: &str) -> GetEmployeesResponse {
        let Some(id) = valid_id(team_id) else {
            return GetEmployeesResponse::default();
        };
        match queries::team_members(conn, id) {
            Ok(employees) => {
                let total = employees.len() as i64;
                GetEmployeesResponse {
                    employees,
                    total_count: total,
                    page: 1,
                    page_size: total.max(1) as i32,
                }
            }
            Err(err) => {
                warn!(error = %err, "team members query failed");
                GetEmployeesResponse::default()
            }
        }
    }

    /// The employee's direct manager, if any
    pub fn get_employee_manager(conn: &Connection, employee_id: &str) -> GetEmployeeResponse {
        let Some(id) = valid_id(employee_id) else {
            return GetEmployeeResponse::default();
        };
        match queries::employee_manager(conn, id) {
            Ok(employee) => GetEmployeeResponse { employee },
            Err(err) => {
                warn!(error = %err, "manager lookup failed");
                GetEmployeeResponse::default()
            }
        }
    }

    /// Hire an employee. Unparsable enum labels fall back to defaults,
    /// matching the tolerant create contract.
    pub fn create_employee(conn: &mut Connection, req: &CreateEmployeeRequest) -> MutationResponse {
        let new = NewEmployee {
            employee_code: req.employee_code.trim().to_string(),
            first_name: req.first_name.trim().to_string(),
            last_name: req.last_name.trim().to_string(),
            email: req.email.trim().to_string(),
            phone: opt(&req.phone),
            date_of_birth: parse_date(&req.date_of_birth),
            gender: Gender::parse(&req.gender),
            address: None,
            identity_number: None,
            hire_date: parse_date(&req.hire_date),
            position: None,
            job_title: opt(&req.job_title),
            base_salary: None,
            employee_type: EmployeeType::parse(&req.employee_type),
            department_id: opt(&req.department_id),
            team_id: opt(&req.team_id),
            manager_id: opt(&req.manager_id),
            external_user_id: opt(&req.external_user_id),
        };
        match execute_command(conn, Command::EmployeeCreate(new), None) {
            Ok(CommandOutcome::Created { id }) => MutationResponse::ok(id),
            Ok(_) => MutationResponse::failed("unexpected outcome"),
            Err(err) => MutationResponse::failed(err.to_string()),
        }
    }

    /// Partial update: empty request fields are left untouched, and
    /// unparsable status or type labels are ignored rather than rejected
    pub fn update_employee(conn: &mut Connection, req: &UpdateEmployeeRequest) -> MutationResponse {
        let Some(id) = valid_id(&req.employee_id) else {
            return MutationResponse::failed("invalid employee id");
        };
        let patch = EmployeePatch {
            first_name: opt(&req.first_name),
            last_name: opt(&req.last_name),
            email: opt(&req.email),
            phone: opt(&req.phone),
            job_title: opt(&req.job_title),
            status: EmployeeStatus::parse(&req.status),
            employee_type: EmployeeType::parse(&req.employee_type),
            department_id: opt(&req.department_id).map(Some),
            team_id: opt(&req.team_id).map(Some),
            manager_id: opt(&req.manager_id).map(Some),
            ..EmployeePatch::default()
        };
        match execute_command(
            conn,
            Command::EmployeeUpdate {
                employee_id: id.to_string(),
                patch,
            },
            None,
        ) {
            Ok(_) => MutationResponse::ok(id),
            Err(err) => MutationResponse::failed(err.to_string()),
        }
    }

    /// Remove an employee and sever everything that points at them
    pub fn delete_employee(conn: &mut Connection, employee_id: &str) -> MutationResponse {
        let Some(id) = valid_id(employee_id) else {
            return MutationResponse::failed("invalid employee id");
        };
        match execute_command(
            conn,
            Command::EmployeeDelete {
                employee_id: id.to_string(),
            },
            None,
        ) {
            Ok(_) => MutationResponse::ok(id),
            Err(err) => MutationResponse::failed(err.to_string()),
        }
    }

    /// Grant a role; granting a held role succeeds without duplicating
    pub fn assign_role(conn: &mut Connection, req: &AssignRoleRequest) -> MutationResponse {
        let Some(id) = valid_id(&req.employee_id) else {
            return MutationResponse::failed("invalid employee id");
        };
        match execute_command(
            conn,
            Command::RoleAssign {
                employee_id: id.to_string(),
                role: req.role.trim().to_string(),
                assigned_by: opt(&req.assigned_by),
            },
            None,
        ) {
            Ok(CommandOutcome::RoleAssigned {
                already_assigned, ..
            }) => {
                let mut response = MutationResponse::ok(id);
                response.message = if already_assigned {
                    "role already assigned".to_string()
                } else {
                    "role assigned".to_string()
                };
                response
            }
            Ok(_) => MutationResponse::failed("unexpected outcome"),
            Err(err) => MutationResponse::failed(err.to_string()),
        }
    }

    /// The company org chart; an empty directory yields an empty response
    pub fn get_org_chart(conn: &Connection, company_id: &str) -> GetOrgChartResponse {
        let id = opt(company_id);
        match queries::chart(conn, id.as_deref()) {
            Ok(root) => GetOrgChartResponse { root: Some(root) },
            Err(err) => {
                debug!(error = %err, "org chart unavailable");
                GetOrgChartResponse::default()
            }
        }
    }

    /// Dual-path manager check. Unknown or malformed ids surface as an
    /// invalid result with a message, never as a transport error.
    pub fn validate_manager_permission(
        conn: &Connection,
        req: &ValidateManagerPermissionRequest,
    ) -> ValidateManagerPermissionResponse {
        let (Some(manager_id), Some(employee_id)) =
            (valid_id(&req.manager_id), valid_id(&req.employee_id))
        else {
            return ValidateManagerPermissionResponse {
                is_valid: false,
                message: "invalid manager or employee id".to_string(),
            };
        };
        match queries::check_permission(conn, manager_id, employee_id) {
            Ok(check) => ValidateManagerPermissionResponse {
                is_valid: check.is_valid,
                message: check.reason,
            },
            Err(err) => ValidateManagerPermissionResponse {
                is_valid: false,
                message: err.to_string(),
            },
        }
    }
}
