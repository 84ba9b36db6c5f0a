use tracing::warn;

use crate::errors::{OrgDirError, Result};
use crate::ops::Store;
use crate::rules::invariants;

/// Whole-store structural sweep, run after commands that can reshape the
/// containment tree or the reporting chain.
///
/// The per-command checks should make these unreachable; this is the
/// backstop that turns a missed check into a rejected transaction instead
/// of a corrupted snapshot. Returns the first violation found.
pub(crate) fn validate_hierarchy(store: &Store) -> Result<()> {
    for id in invariants::orphaned_departments(store) {
        warn!(department_id = %id, "department references missing company");
        let department = store.get_department(&id)?;
        return Err(OrgDirError::MissingCompany {
            department_id: id,
            company_id: department.company_id.clone(),
        });
    }
    for id in invariants::orphaned_teams(store) {
        warn!(team_id = %id, "team references missing department");
        let team = store.get_team(&id)?;
        return Err(OrgDirError::MissingDepartment {
            team_id: id,
            department_id: team.department_id.clone(),
        });
    }
    if let Some((employee_id, department_id)) = invariants::employees_with_missing_department(store)
        .into_iter()
        .next()
    {
        warn!(employee_id = %employee_id, "employee references missing department");
        return Err(OrgDirError::EmployeeMissingDepartment {
            employee_id,
            department_id,
        });
    }
    if let Some((employee_id, team_id)) = invariants::employees_with_missing_team(store)
        .into_iter()
        .next()
    {
        warn!(employee_id = %employee_id, "employee references missing team");
        return Err(OrgDirError::MissingTeam {
            employee_id,
            team_id,
        });
    }
    if let Some((employee_id, manager_id)) = invariants::employees_with_missing_manager(store)
        .into_iter()
        .next()
    {
        warn!(employee_id = %employee_id, "employee references missing manager");
        return Err(OrgDirError::MissingManager {
            employee_id,
            manager_id,
        });
    }

    for department in store.list_departments() {
        if let Some(parent_id) = &department.parent_department_id {
            if invariants::would_create_department_cycle(store, &department.id, parent_id) {
                return Err(OrgDirError::DepartmentCycle {
                    department_id: department.id.clone(),
                });
            }
        }
    }
    for employee in store.list_employees() {
        if let Some(manager_id) = &employee.manager_id {
            if invariants::would_create_manager_cycle(store, &employee.id, manager_id) {
                return Err(OrgDirError::ManagerCycle {
                    employee_id: employee.id.clone(),
                });
            }
        }
    }

    if let Some(email) = invariants::duplicate_emails(store).into_iter().next() {
        return Err(OrgDirError::DuplicateEmail { email });
    }
    Ok(())
}
