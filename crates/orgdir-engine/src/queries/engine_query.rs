//! Read queries: hydrate a snapshot, project, return owned views
//!
//! Every query reads one consistent snapshot; nothing here writes.

use rusqlite::Connection;
use tracing::instrument;

use orgdir_core::queries::{
    check_manager_permission, department_views, directory_page, employee_view, org_chart,
    org_chart_first_company, team_views, DepartmentView, DirectoryFilter, DirectoryPage,
    EmployeeView, OrgChartNode, PermissionCheck, TeamView,
};
use orgdir_core::ServiceError;
use orgdir_store::errors::Result;
use orgdir_store::load_store;

/// One page of the employee directory
#[instrument(skip(conn))]
pub fn directory(conn: &Connection, filter: &DirectoryFilter) -> Result<DirectoryPage> {
    let store = load_store(conn)?;
    Ok(directory_page(&store, filter))
}

/// Look up one employee; `None` when the id doesn't resolve
pub fn employee_by_id(conn: &Connection, employee_id: &str) -> Result<Option<EmployeeView>> {
    let store = load_store(conn)?;
    Ok(store
        .employees()
        .get(employee_id)
        .map(|e| employee_view(&store, e)))
}

/// Employees assigned to a department, sorted by name
pub fn employees_by_department(
    conn: &Connection,
    department_id: &str,
) -> Result<Vec<EmployeeView>> {
    let store = load_store(conn)?;
    Ok(store
        .employees_of_department(department_id)
        .into_iter()
        .map(|e| employee_view(&store, e))
        .collect())
}

/// Direct reports of a manager, sorted by name
pub fn employees_by_manager(conn: &Connection, manager_id: &str) -> Result<Vec<EmployeeView>> {
    let store = load_store(conn)?;
    Ok(store
        .employees_of_manager(manager_id)
        .into_iter()
        .map(|e| employee_view(&store, e))
        .collect())
}

/// Members of a team, sorted by name
pub fn team_members(conn: &Connection, team_id: &str) -> Result<Vec<EmployeeView>> {
    let store = load_store(conn)?;
    Ok(store
        .employees_of_team(team_id)
        .into_iter()
        .map(|e| employee_view(&store, e))
        .collect())
}

/// An employee's direct manager; `None` when unset or dangling
pub fn employee_manager(conn: &Connection, employee_id: &str) -> Result<Option<EmployeeView>> {
    let store = load_store(conn)?;
    Ok(store
        .employees()
        .get(employee_id)
        .and_then(|e| e.manager_id.as_deref())
        .and_then(|manager_id| store.employees().get(manager_id))
        .map(|m| employee_view(&store, m)))
}

/// Org chart of one company, or of the first company when no id is given
#[instrument(skip(conn))]
pub fn chart(conn: &Connection, company_id: Option<&str>) -> Result<OrgChartNode> {
    let store = load_store(conn)?;
    let node = match company_id {
        Some(id) => org_chart(&store, id),
        None => org_chart_first_company(&store),
    }
    .map_err(ServiceError::from)?;
    Ok(node)
}

/// May the manager act on the employee's behalf?
pub fn check_permission(
    conn: &Connection,
    manager_id: &str,
    employee_id: &str,
) -> Result<PermissionCheck> {
    let store = load_store(conn)?;
    check_manager_permission(&store, manager_id, employee_id).map_err(ServiceError::from)
}

/// All departments with resolved names
pub fn departments(conn: &Connection) -> Result<Vec<DepartmentView>> {
    let store = load_store(conn)?;
    Ok(department_views(&store))
}

/// All teams with resolved names and member counts
pub fn teams(conn: &Connection) -> Result<Vec<TeamView>> {
    let store = load_store(conn)?;
    Ok(team_views(&store))
}
