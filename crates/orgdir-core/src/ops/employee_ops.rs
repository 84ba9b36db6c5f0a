use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::commands::{EmployeePatch, NewContact, NewDocument, NewEmployee};
use crate::errors::{OrgDirError, Result};
use crate::model::{Employee, EmployeeContact, EmployeeDocument, EmployeeRole};
use crate::ops::Store;
use crate::rules::invariants;

fn validate_email(email: &str) -> Result<()> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(OrgDirError::InvalidEmail {
            reason: "email must not be empty".to_string(),
        });
    }
    // One '@' with a non-empty local part and a dotted domain. Intentionally
    // loose; the store's unique index is the real gatekeeper for identity.
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(OrgDirError::InvalidEmail {
            reason: format!("'{trimmed}' is missing an @"),
        });
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(OrgDirError::InvalidEmail {
            reason: format!("'{trimmed}' is not a valid address"),
        });
    }
    Ok(())
}

/// Hire an employee
pub(crate) fn create_employee(store: &mut Store, new: NewEmployee) -> Result<String> {
    if new.first_name.trim().is_empty() || new.last_name.trim().is_empty() {
        return Err(OrgDirError::InvalidName {
            reason: "first and last name must not be empty".to_string(),
        });
    }
    validate_email(&new.email)?;
    if store.find_employee_by_email(&new.email).is_some() {
        return Err(OrgDirError::DuplicateEmail { email: new.email });
    }
    if let Some(department_id) = &new.department_id {
        store.get_department(department_id)?;
    }
    if let Some(team_id) = &new.team_id {
        store.get_team(team_id)?;
    }
    if let Some(manager_id) = &new.manager_id {
        store.get_employee(manager_id)?;
    }

    let id = Uuid::now_v7().to_string();
    let mut employee = Employee::new(
        id.clone(),
        new.employee_code,
        new.first_name,
        new.last_name,
        new.email,
    );
    employee.phone = new.phone;
    employee.date_of_birth = new.date_of_birth;
    employee.gender = new.gender;
    employee.address = new.address;
    employee.identity_number = new.identity_number;
    employee.hire_date = new.hire_date;
    employee.position = new.position;
    employee.job_title = new.job_title;
    employee.base_salary = new.base_salary;
    if let Some(employee_type) = new.employee_type {
        employee.employee_type = employee_type;
    }
    employee.department_id = new.department_id;
    employee.team_id = new.team_id;
    employee.manager_id = new.manager_id;
    employee.external_user_id = new.external_user_id;

    debug!(employee_id = %id, "created employee");
    store.insert_employee(employee);
    Ok(id)
}

/// Apply a partial update to an employee.
///
/// Reference moves are validated first (target exists, no reporting cycle)
/// so a failed patch leaves the employee untouched.
pub(crate) fn update_employee(
    store: &mut Store,
    employee_id: &str,
    patch: EmployeePatch,
) -> Result<()> {
    store.get_employee(employee_id)?;

    if patch
        .first_name
        .as_deref()
        .is_some_and(|n| n.trim().is_empty())
        || patch
            .last_name
            .as_deref()
            .is_some_and(|n| n.trim().is_empty())
    {
        return Err(OrgDirError::InvalidName {
            reason: "first and last name must not be empty".to_string(),
        });
    }
    if let Some(email) = &patch.email {
        validate_email(email)?;
        if let Some(other) = store.find_employee_by_email(email) {
            if other.id != employee_id {
                return Err(OrgDirError::DuplicateEmail {
                    email: email.clone(),
                });
            }
        }
    }
    if let Some(Some(department_id)) = &patch.department_id {
        store.get_department(department_id)?;
    }
    if let Some(Some(team_id)) = &patch.team_id {
        store.get_team(team_id)?;
    }
    if let Some(Some(manager_id)) = &patch.manager_id {
        store.get_employee(manager_id)?;
        if invariants::would_create_manager_cycle(store, employee_id, manager_id) {
            return Err(OrgDirError::ManagerCycle {
                employee_id: employee_id.to_string(),
            });
        }
    }

    let employee = store.get_employee_mut(employee_id)?;
    if let Some(first_name) = patch.first_name {
        employee.first_name = first_name;
    }
    if let Some(last_name) = patch.last_name {
        employee.last_name = last_name;
    }
    if let Some(email) = patch.email {
        employee.email = email;
    }
    if let Some(phone) = patch.phone {
        employee.phone = Some(phone);
    }
    if let Some(avatar) = patch.avatar {
        employee.avatar = Some(avatar);
    }
    if let Some(address) = patch.address {
        employee.address = Some(address);
    }
    if let Some(position) = patch.position {
        employee.position = Some(position);
    }
    if let Some(job_title) = patch.job_title {
        employee.job_title = Some(job_title);
    }
    if let Some(base_salary) = patch.base_salary {
        employee.base_salary = Some(base_salary);
    }
    if let Some(bank_account) = patch.bank_account {
        employee.bank_account = Some(bank_account);
    }
    if let Some(bank_name) = patch.bank_name {
        employee.bank_name = Some(bank_name);
    }
    if let Some(status) = patch.status {
        employee.status = status;
    }
    if let Some(employee_type) = patch.employee_type {
        employee.employee_type = employee_type;
    }
    if let Some(department_id) = patch.department_id {
        employee.department_id = department_id;
    }
    if let Some(team_id) = patch.team_id {
        employee.team_id = team_id;
    }
    if let Some(manager_id) = patch.manager_id {
        employee.manager_id = manager_id;
    }
    if let Some(termination_date) = patch.termination_date {
        employee.termination_date = Some(termination_date);
    }
    employee.updated_at = Utc::now();
    Ok(())
}

/// Delete an employee.
///
/// Severs every inbound reference: direct reports lose their manager,
/// teams lose their leader, departments lose their manager. Owned rows
/// (roles, documents, contacts) are removed with the employee.
pub(crate) fn delete_employee(store: &mut Store, employee_id: &str) -> Result<()> {
    store.get_employee(employee_id)?;

    let now = Utc::now();
    for other in store.employees.values_mut() {
        if other.manager_id.as_deref() == Some(employee_id) {
            other.manager_id = None;
            other.updated_at = now;
        }
    }
    for team in store.teams.values_mut() {
        if team.leader_id.as_deref() == Some(employee_id) {
            team.leader_id = None;
            team.updated_at = now;
        }
    }
    for department in store.departments.values_mut() {
        if department.manager_id.as_deref() == Some(employee_id) {
            department.manager_id = None;
            department.updated_at = now;
        }
    }
    store.roles.retain(|_, r| r.employee_id != employee_id);
    store.documents.retain(|_, d| d.employee_id != employee_id);
    store.contacts.retain(|_, c| c.employee_id != employee_id);
    store.employees.remove(employee_id);
    debug!(employee_id = %employee_id, "deleted employee");
    Ok(())
}

/// Grant a role to an employee.
///
/// Returns `true` if the role was already held, in which case nothing
/// changes; the grant is idempotent.
pub(crate) fn assign_role(
    store: &mut Store,
    employee_id: &str,
    role: &str,
    assigned_by: Option<String>,
) -> Result<bool> {
    store.get_employee(employee_id)?;
    if role.trim().is_empty() {
        return Err(OrgDirError::InvalidName {
            reason: "role must not be empty".to_string(),
        });
    }

    let already = store
        .roles_of_employee(employee_id)
        .iter()
        .any(|r| r.role == role);
    if already {
        debug!(employee_id = %employee_id, role = %role, "role already assigned");
        return Ok(true);
    }

    let id = Uuid::now_v7().to_string();
    let mut assignment = EmployeeRole::new(id, employee_id.to_string(), role.to_string());
    assignment.assigned_by = assigned_by;
    store.insert_role(assignment);
    Ok(false)
}

/// Attach a document record to an employee
pub(crate) fn add_document(store: &mut Store, new: NewDocument) -> Result<String> {
    store.get_employee(&new.employee_id)?;
    if new.file_name.trim().is_empty() {
        return Err(OrgDirError::InvalidName {
            reason: "document file name must not be empty".to_string(),
        });
    }

    let id = Uuid::now_v7().to_string();
    let mut document = EmployeeDocument::new(
        id.clone(),
        new.employee_id,
        new.document_type,
        new.file_name,
        new.file_path,
    );
    document.uploaded_by = new.uploaded_by;
    store.insert_document(document);
    Ok(id)
}

/// Record an emergency contact for an employee
pub(crate) fn add_contact(store: &mut Store, new: NewContact) -> Result<String> {
    store.get_employee(&new.employee_id)?;
    if new.name.trim().is_empty() {
        return Err(OrgDirError::InvalidName {
            reason: "contact name must not be empty".to_string(),
        });
    }

    let id = Uuid::now_v7().to_string();
    let mut contact = EmployeeContact::new(id.clone(), new.employee_id, new.name, new.phone);
    contact.relationship = new.relationship;
    contact.is_primary = new.is_primary;
    store.insert_contact(contact);
    Ok(id)
}
