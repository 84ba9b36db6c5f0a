//! Read-side projections over the arena
//!
//! Queries never mutate the [`crate::Store`]; each takes a shared
//! reference and builds owned view values, so callers can hold results
//! after the snapshot is gone.

pub mod directory;
pub mod org_chart;
pub mod permissions;
pub mod views;

pub use directory::{directory_page, DirectoryFilter, DirectoryPage};
pub use org_chart::{org_chart, org_chart_first_company, OrgChartNode, OrgNodeType};
pub use permissions::{check_manager_permission, PermissionCheck};
pub use views::{
    department_views, employee_view, team_views, DepartmentView, EmployeeView, TeamView,
};
