//! Command execution against the database
//!
//! One transaction per command: hydrate the arena, run the pure apply,
//! persist whatever changed, append the audit row, commit. A failure at
//! any point rolls the whole command back.

use rusqlite::Connection;
use tracing::{info, instrument};
use uuid::Uuid;

use orgdir_core::model::AuditLog;
use orgdir_core::{apply, Command, CommandOutcome, ServiceError, Store};
use orgdir_store::errors::Result;
use orgdir_store::repo::hydration::load_store;
use orgdir_store::UnitOfWork;

/// Execute one command atomically.
///
/// `performed_by` is recorded on the audit row; pass the acting user's id
/// when the caller knows it.
#[instrument(skip_all, fields(command = cmd.name()))]
pub fn execute_command(
    conn: &mut Connection,
    cmd: Command,
    performed_by: Option<&str>,
) -> Result<CommandOutcome> {
    let entity_type = cmd.entity_type();
    let action = cmd.name();

    let uow = UnitOfWork::begin(conn)?;
    let before = load_store(uow.connection())?;
    let (after, outcome) = apply(&before, cmd).map_err(ServiceError::from)?;

    persist_diff(&uow, &before, &after)?;

    let entity_id = outcome.entity_id().to_string();
    let mut entry = AuditLog::new(
        Uuid::now_v7().to_string(),
        entity_type.to_string(),
        entity_id.clone(),
        action.to_string(),
    );
    entry.old_values = snapshot_entity(&before, entity_type, &entity_id);
    entry.new_values = snapshot_entity(&after, entity_type, &entity_id);
    entry.performed_by = performed_by.map(str::to_string);
    uow.append_audit(&entry)?;

    uow.commit()?;
    info!(entity_id = %entity_id, "command committed");
    Ok(outcome)
}

/// JSON snapshot of the command's primary entity, for the audit trail
fn snapshot_entity(store: &Store, entity_type: &str, entity_id: &str) -> Option<String> {
    let value = match entity_type {
        "Company" => serde_json::to_string(store.companies().get(entity_id)?),
        "Department" => serde_json::to_string(store.departments().get(entity_id)?),
        "Team" => serde_json::to_string(store.teams().get(entity_id)?),
        "Employee" => serde_json::to_string(store.employees().get(entity_id)?),
        "EmployeeRole" => serde_json::to_string(store.employees().get(entity_id)?),
        "Holiday" => serde_json::to_string(store.holidays().get(entity_id)?),
        "EmployeeDocument" => serde_json::to_string(store.documents().get(entity_id)?),
        "EmployeeContact" => serde_json::to_string(store.contacts().get(entity_id)?),
        _ => return None,
    };
    value.ok()
}

/// Write the difference between two snapshots.
///
/// Upserts run parent-first and deletes child-first so every statement
/// sees its foreign keys satisfied. The apply layer has already severed
/// inbound references of deleted entities, and those severed rows show up
/// here as ordinary changed rows.
fn persist_diff(uow: &UnitOfWork, before: &Store, after: &Store) -> Result<()> {
    for (id, company) in after.companies() {
        if before.companies().get(id) != Some(company) {
            uow.save_company(company)?;
        }
    }
    for (id, department) in after.departments() {
        if before.departments().get(id) != Some(department) {
            uow.save_department(department)?;
        }
    }
    for (id, team) in after.teams() {
        if before.teams().get(id) != Some(team) {
            uow.save_team(team)?;
        }
    }
    for (id, employee) in after.employees() {
        if before.employees().get(id) != Some(employee) {
            uow.save_employee(employee)?;
        }
    }
    for (id, role) in after.roles() {
        if before.roles().get(id) != Some(role) {
            uow.save_role(role)?;
        }
    }
    for (id, document) in after.documents() {
        if before.documents().get(id) != Some(document) {
            uow.save_document(document)?;
        }
    }
    for (id, contact) in after.contacts() {
        if before.contacts().get(id) != Some(contact) {
            uow.save_contact(contact)?;
        }
    }
    for (id, holiday) in after.holidays() {
        if before.holidays().get(id) != Some(holiday) {
            uow.save_holiday(holiday)?;
        }
    }

    for id in before.roles().keys() {
        if !after.roles().contains_key(id) {
            uow.delete_role(id)?;
        }
    }
    for id in before.documents().keys() {
        if !after.documents().contains_key(id) {
            uow.delete_document(id)?;
        }
    }
    for id in before.contacts().keys() {
        if !after.contacts().contains_key(id) {
            uow.delete_contact(id)?;
        }
    }
    for id in before.employees().keys() {
        if !after.employees().contains_key(id) {
            uow.delete_employee(id)?;
        }
    }
    for id in before.teams().keys() {
        if !after.teams().contains_key(id) {
            uow.delete_team(id)?;
        }
    }
    for id in before.departments().keys() {
        if !after.departments().contains_key(id) {
            uow.delete_department(id)?;
        }
    }
    for id in before.holidays().keys() {
        if !after.holidays().contains_key(id) {
            uow.delete_holiday(id)?;
        }
    }
    for id in before.companies().keys() {
        if !after.companies().contains_key(id) {
            uow.delete_company(id)?;
        }
    }
    Ok(())
}
