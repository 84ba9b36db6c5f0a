use serde::{Deserialize, Serialize};

use crate::model::Employee;
use crate::ops::Store;

/// An employee with its relationships resolved to display names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeView {
    pub id: String,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub status: String,
    pub employee_type: String,
    pub department_id: Option<String>,
    pub department_name: Option<String>,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub manager_id: Option<String>,
    pub manager_name: Option<String>,
    pub roles: Vec<String>,
}

/// A department with its company and manager resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentView {
    pub id: String,
    pub name: String,
    pub code: String,
    pub company_id: String,
    pub company_name: Option<String>,
    pub manager_id: Option<String>,
    pub manager_name: Option<String>,
    pub parent_department_id: Option<String>,
    pub is_active: bool,
}

/// A team with its department and leader resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamView {
    pub id: String,
    pub name: String,
    pub code: String,
    pub department_id: String,
    pub department_name: Option<String>,
    pub leader_id: Option<String>,
    pub leader_name: Option<String>,
    pub member_count: usize,
    pub is_active: bool,
}

/// Project one employee into a view, resolving names against the snapshot.
///
/// Dangling references (a department id the snapshot no longer holds)
/// resolve to `None` rather than erroring; views are best-effort reads.
pub fn employee_view(store: &Store, employee: &Employee) -> EmployeeView {
    let department_name = employee
        .department_id
        .as_deref()
        .and_then(|id| store.departments().get(id))
        .map(|d| d.name.clone());
    let team_name = employee
        .team_id
        .as_deref()
        .and_then(|id| store.teams().get(id))
        .map(|t| t.name.clone());
    let manager_name = employee
        .manager_id
        .as_deref()
        .and_then(|id| store.employees().get(id))
        .map(Employee::full_name);
    let roles = store
        .roles_of_employee(&employee.id)
        .iter()
        .map(|r| r.role.clone())
        .collect();

    EmployeeView {
        id: employee.id.clone(),
        employee_code: employee.employee_code.clone(),
        first_name: employee.first_name.clone(),
        last_name: employee.last_name.clone(),
        full_name: employee.full_name(),
        email: employee.email.clone(),
        phone: employee.phone.clone(),
        job_title: employee.job_title.clone(),
        status: employee.status.as_str().to_string(),
        employee_type: employee.employee_type.as_str().to_string(),
        department_id: employee.department_id.clone(),
        department_name,
        team_id: employee.team_id.clone(),
        team_name,
        manager_id: employee.manager_id.clone(),
        manager_name,
        roles,
    }
}

/// Project all departments into views, sorted by (sort_order, name, id)
pub fn department_views(store: &Store) -> Vec<DepartmentView> {
    let mut departments: Vec<_> = store.departments().values().collect();
    departments.sort_by(|a, b| {
        (a.sort_order, &a.name, &a.id).cmp(&(b.sort_order, &b.name, &b.id))
    });
    departments
        .into_iter()
        .map(|d| DepartmentView {
            id: d.id.clone(),
            name: d.name.clone(),
            code: d.code.clone(),
            company_id: d.company_id.clone(),
            company_name: store.companies().get(&d.company_id).map(|c| c.name.clone()),
            manager_id: d.manager_id.clone(),
            manager_name: d
                .manager_id
                .as_deref()
                .and_then(|id| store.employees().get(id))
                .map(Employee::full_name),
            parent_department_id: d.parent_department_id.clone(),
            is_active: d.is_active,
        })
        .collect()
}

/// Project all teams into views, sorted by (sort_order, name, id)
pub fn team_views(store: &Store) -> Vec<TeamView> {
    let mut teams: Vec<_> = store.teams().values().collect();
    teams.sort_by(|a, b| (a.sort_order, &a.name, &a.id).cmp(&(b.sort_order, &b.name, &b.id)));
    teams
        .into_iter()
        .map(|t| TeamView {
            id: t.id.clone(),
            name: t.name.clone(),
            code: t.code.clone(),
            department_id: t.department_id.clone(),
            department_name: store
                .departments()
                .get(&t.department_id)
                .map(|d| d.name.clone()),
            leader_id: t.leader_id.clone(),
            leader_name: t
                .leader_id
                .as_deref()
                .and_then(|id| store.employees().get(id))
                .map(Employee::full_name),
            member_count: store.employees_of_team(&t.id).len(),
            is_active: t.is_active,
        })
        .collect()
}
