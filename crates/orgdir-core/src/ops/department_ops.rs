use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::commands::{DepartmentPatch, NewDepartment};
use crate::errors::{OrgDirError, Result};
use crate::model::Department;
use crate::ops::Store;
use crate::rules::invariants;

/// Create a new department under a company
pub(crate) fn create_department(store: &mut Store, new: NewDepartment) -> Result<String> {
    if new.name.trim().is_empty() {
        return Err(OrgDirError::InvalidName {
            reason: "department name must not be empty".to_string(),
        });
    }
    store.get_company(&new.company_id)?;
    if let Some(manager_id) = &new.manager_id {
        store.get_employee(manager_id)?;
    }
    if let Some(parent_id) = &new.parent_department_id {
        let parent = store.get_department(parent_id)?;
        if parent.company_id != new.company_id {
            return Err(OrgDirError::ParentCompanyMismatch {
                parent_id: parent_id.clone(),
            });
        }
    }

    let id = Uuid::now_v7().to_string();
    let mut department = Department::new(id.clone(), new.name, new.code, new.company_id);
    department.description = new.description;
    department.manager_id = new.manager_id;
    department.parent_department_id = new.parent_department_id;
    department.sort_order = new.sort_order;

    debug!(department_id = %id, "created department");
    store.insert_department(department);
    Ok(id)
}

/// Apply a partial update to a department.
///
/// Re-parenting is checked against the containment tree before it lands:
/// a department may never become its own ancestor.
pub(crate) fn update_department(
    store: &mut Store,
    department_id: &str,
    patch: DepartmentPatch,
) -> Result<()> {
    let company_id = store.get_department(department_id)?.company_id.clone();

    if let Some(manager_id) = patch.manager_id.as_ref().and_then(|m| m.as_ref()) {
        store.get_employee(manager_id)?;
    }
    if let Some(Some(parent_id)) = &patch.parent_department_id {
        let parent = store.get_department(parent_id)?;
        if parent.company_id != company_id {
            return Err(OrgDirError::ParentCompanyMismatch {
                parent_id: parent_id.clone(),
            });
        }
        if invariants::would_create_department_cycle(store, department_id, parent_id) {
            return Err(OrgDirError::DepartmentCycle {
                department_id: department_id.to_string(),
            });
        }
    }

    let department = store.get_department_mut(department_id)?;
    if let Some(name) = patch.name {
        if name.trim().is_empty() {
            return Err(OrgDirError::InvalidName {
                reason: "department name must not be empty".to_string(),
            });
        }
        department.name = name;
    }
    if let Some(code) = patch.code {
        department.code = code;
    }
    if let Some(description) = patch.description {
        department.description = Some(description);
    }
    if let Some(manager_id) = patch.manager_id {
        department.manager_id = manager_id;
    }
    if let Some(parent_id) = patch.parent_department_id {
        department.parent_department_id = parent_id;
    }
    if let Some(sort_order) = patch.sort_order {
        department.sort_order = sort_order;
    }
    if let Some(is_active) = patch.is_active {
        department.is_active = is_active;
    }
    department.updated_at = Utc::now();
    Ok(())
}

/// Delete a department.
///
/// Refused while teams or child departments still hang off it; employees
/// assigned to it have their department link cleared instead.
pub(crate) fn delete_department(store: &mut Store, department_id: &str) -> Result<()> {
    store.get_department(department_id)?;

    let teams = store.teams_of_department(department_id);
    if !teams.is_empty() {
        return Err(OrgDirError::DeleteWithChildren {
            entity_id: department_id.to_string(),
            child_kind: "teams",
            child_count: teams.len(),
        });
    }
    let children = store.child_departments(department_id);
    if !children.is_empty() {
        return Err(OrgDirError::DeleteWithChildren {
            entity_id: department_id.to_string(),
            child_kind: "departments",
            child_count: children.len(),
        });
    }

    for employee in store.employees.values_mut() {
        if employee.department_id.as_deref() == Some(department_id) {
            employee.department_id = None;
            employee.updated_at = Utc::now();
        }
    }
    store.departments.remove(department_id);
    debug!(department_id = %department_id, "deleted department");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Company, Employee, Team};

    fn seed_company(store: &mut Store) -> String {
        let company = Company::new("c1".to_string(), "Acme".to_string(), "ACME".to_string());
        store.insert_company(company);
        "c1".to_string()
    }

    fn new_department(company_id: &str, name: &str) -> NewDepartment {
        NewDepartment {
            name: name.to_string(),
            code: name.to_uppercase(),
            description: None,
            company_id: company_id.to_string(),
            manager_id: None,
            parent_department_id: None,
            sort_order: 0,
        }
    }

    #[test]
    fn test_create_department_requires_company() {
        let mut store = Store::new();
        let result = create_department(&mut store, new_department("missing", "Eng"));
        assert!(matches!(result, Err(OrgDirError::CompanyNotFound { .. })));
    }

    #[test]
    fn test_create_department() {
        let mut store = Store::new();
        let company_id = seed_company(&mut store);
        let id = create_department(&mut store, new_department(&company_id, "Eng")).unwrap();
        assert_eq!(store.get_department(&id).unwrap().company_id, company_id);
    }

    #[test]
    fn test_reparent_rejects_cycle() {
        let mut store = Store::new();
        let company_id = seed_company(&mut store);
        let top = create_department(&mut store, new_department(&company_id, "Top")).unwrap();
        let mut child = new_department(&company_id, "Child");
        child.parent_department_id = Some(top.clone());
        let child_id = create_department(&mut store, child).unwrap();

        let patch = DepartmentPatch {
            parent_department_id: Some(Some(child_id)),
            ..DepartmentPatch::default()
        };
        let result = update_department(&mut store, &top, patch);
        assert!(matches!(result, Err(OrgDirError::DepartmentCycle { .. })));
    }

    #[test]
    fn test_create_rejects_parent_from_other_company() {
        let mut store = Store::new();
        let company_id = seed_company(&mut store);
        store.insert_company(Company::new(
            "c2".to_string(),
            "Globex".to_string(),
            "GLOBEX".to_string(),
        ));
        let foreign = create_department(&mut store, new_department("c2", "Ops")).unwrap();

        let mut dept = new_department(&company_id, "Eng");
        dept.parent_department_id = Some(foreign);
        let result = create_department(&mut store, dept);
        assert!(matches!(
            result,
            Err(OrgDirError::ParentCompanyMismatch { .. })
        ));
    }

    #[test]
    fn test_reparent_rejects_parent_from_other_company() {
        let mut store = Store::new();
        let company_id = seed_company(&mut store);
        store.insert_company(Company::new(
            "c2".to_string(),
            "Globex".to_string(),
            "GLOBEX".to_string(),
        ));
        let dept_id = create_department(&mut store, new_department(&company_id, "Eng")).unwrap();
        let foreign = create_department(&mut store, new_department("c2", "Ops")).unwrap();

        let patch = DepartmentPatch {
            parent_department_id: Some(Some(foreign)),
            ..DepartmentPatch::default()
        };
        let result = update_department(&mut store, &dept_id, patch);
        assert!(matches!(
            result,
            Err(OrgDirError::ParentCompanyMismatch { .. })
        ));
        // The department stays where it was
        assert!(store
            .get_department(&dept_id)
            .unwrap()
            .parent_department_id
            .is_none());
    }

    #[test]
    fn test_delete_refused_with_teams() {
        let mut store = Store::new();
        let company_id = seed_company(&mut store);
        let dept_id = create_department(&mut store, new_department(&company_id, "Eng")).unwrap();
        store.insert_team(Team::new(
            "t1".to_string(),
            "Core".to_string(),
            "CORE".to_string(),
            dept_id.clone(),
        ));

        let result = delete_department(&mut store, &dept_id);
        assert!(matches!(
            result,
            Err(OrgDirError::DeleteWithChildren { child_kind: "teams", .. })
        ));
    }

    #[test]
    fn test_delete_clears_employee_links() {
        let mut store = Store::new();
        let company_id = seed_company(&mut store);
        let dept_id = create_department(&mut store, new_department(&company_id, "Eng")).unwrap();
        let mut employee = Employee::new(
            "e1".to_string(),
            "EMP001".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
        );
        employee.department_id = Some(dept_id.clone());
        store.insert_employee(employee);

        delete_department(&mut store, &dept_id).unwrap();
        assert!(store.get_employee("e1").unwrap().department_id.is_none());
    }
}
