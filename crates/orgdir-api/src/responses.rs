//! Outbound response DTOs

use orgdir_core::queries::{EmployeeView, OrgChartNode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetEmployeesResponse {
    pub employees: Vec<EmployeeView>,
    pub total_count: i64,
    pub page: i32,
    pub page_size: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetEmployeeResponse {
    pub employee: Option<EmployeeView>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
    /// Id of the created entity, when the mutation created one
    #[serde(default)]
    pub id: String,
}

impl MutationResponse {
    pub(crate) fn ok(id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: String::new(),
            id: id.into(),
        }
    }

    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetOrgChartResponse {
    pub root: Option<OrgChartNode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateManagerPermissionResponse {
    pub is_valid: bool,
    pub message: String,
}
