//! Inbound request DTOs
//!
//! Everything is a string or a primitive; enum labels and dates are
//! parsed (and, on updates, silently ignored when invalid) by the
//! service layer. Empty strings on update requests mean "leave as is".

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetEmployeesRequest {
    #[serde(default)]
    pub department_id: String,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub page: i32,
    #[serde(default)]
    pub page_size: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub hire_date: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub employee_type: String,
    #[serde(default)]
    pub department_id: String,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub manager_id: String,
    #[serde(default)]
    pub external_user_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub employee_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub employee_type: String,
    #[serde(default)]
    pub department_id: String,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub manager_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignRoleRequest {
    pub employee_id: String,
    pub role: String,
    #[serde(default)]
    pub assigned_by: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateManagerPermissionRequest {
    pub manager_id: String,
    pub employee_id: String,
}
