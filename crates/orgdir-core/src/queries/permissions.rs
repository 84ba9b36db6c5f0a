use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;
use crate::ops::Store;

/// Outcome of a manager permission check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCheck {
    pub is_valid: bool,
    pub reason: String,
}

impl PermissionCheck {
    fn granted(reason: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            reason: reason.into(),
        }
    }

    fn denied(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            reason: reason.into(),
        }
    }
}

/// May `manager_id` act on `employee_id`'s behalf?
///
/// Two grant paths, checked in order: the manager is the employee's direct
/// manager, or the manager leads the team the employee is on. One hop only;
/// a manager's manager holds no transitive authority here.
///
/// # Errors
///
/// Returns `EmployeeNotFound` when either id does not resolve; an unknown
/// party is an error, not a denial.
pub fn check_manager_permission(
    store: &Store,
    manager_id: &str,
    employee_id: &str,
) -> Result<PermissionCheck> {
    store.get_employee(manager_id)?;
    let employee = store.get_employee(employee_id)?;

    if employee.manager_id.as_deref() == Some(manager_id) {
        debug!(manager_id, employee_id, "granted as direct manager");
        return Ok(PermissionCheck::granted("direct manager"));
    }

    if let Some(team_id) = employee.team_id.as_deref() {
        if let Ok(team) = store.get_team(team_id) {
            if team.leader_id.as_deref() == Some(manager_id) {
                debug!(manager_id, employee_id, team_id, "granted as team leader");
                return Ok(PermissionCheck::granted("team leader"));
            }
        }
    }

    debug!(manager_id, employee_id, "permission denied");
    Ok(PermissionCheck::denied(
        "not the employee's manager or team leader",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::OrgDirError;
    use crate::model::{Company, Department, Employee, Team};

    fn sample_store() -> Store {
        let mut store = Store::new();
        store.insert_company(Company::new(
            "c1".to_string(),
            "Acme".to_string(),
            "ACME".to_string(),
        ));
        store.insert_department(Department::new(
            "d1".to_string(),
            "Eng".to_string(),
            "ENG".to_string(),
            "c1".to_string(),
        ));
        let mut team = Team::new(
            "t1".to_string(),
            "Core".to_string(),
            "CORE".to_string(),
            "d1".to_string(),
        );
        team.leader_id = Some("lead".to_string());
        store.insert_team(team);

        for id in ["boss", "lead", "grand"] {
            store.insert_employee(Employee::new(
                id.to_string(),
                format!("EMP-{id}"),
                id.to_string(),
                "Person".to_string(),
                format!("{id}@example.com"),
            ));
        }
        let mut worker = Employee::new(
            "worker".to_string(),
            "EMP-worker".to_string(),
            "Worker".to_string(),
            "Person".to_string(),
            "worker@example.com".to_string(),
        );
        worker.manager_id = Some("boss".to_string());
        worker.team_id = Some("t1".to_string());
        store.insert_employee(worker);

        // boss reports to grand; grand has no direct link to worker
        let boss = store.get_employee_mut("boss").unwrap();
        boss.manager_id = Some("grand".to_string());
        store
    }

    #[test]
    fn test_direct_manager_granted() {
        let store = sample_store();
        let check = check_manager_permission(&store, "boss", "worker").unwrap();
        assert!(check.is_valid);
        assert_eq!(check.reason, "direct manager");
    }

    #[test]
    fn test_team_leader_granted() {
        let store = sample_store();
        let check = check_manager_permission(&store, "lead", "worker").unwrap();
        assert!(check.is_valid);
        assert_eq!(check.reason, "team leader");
    }

    #[test]
    fn test_grand_manager_denied() {
        let store = sample_store();
        let check = check_manager_permission(&store, "grand", "worker").unwrap();
        assert!(!check.is_valid);
    }

    #[test]
    fn test_unknown_party_is_an_error() {
        let store = sample_store();
        let result = check_manager_permission(&store, "ghost", "worker");
        assert!(matches!(result, Err(OrgDirError::EmployeeNotFound { .. })));
    }

    #[test]
    fn test_self_check_denied() {
        let store = sample_store();
        let check = check_manager_permission(&store, "worker", "worker").unwrap();
        assert!(!check.is_valid);
    }
}
