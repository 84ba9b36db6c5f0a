//! Full-store hydration
//!
//! Rebuilds the in-memory arena from the database. The engine hydrates a
//! fresh [`Store`] per command, applies the mutation, and persists the
//! diff; queries hydrate and read.

use crate::errors::Result;
use crate::repo::sqlite_repo::SqliteRepo;
use orgdir_core::Store;
use rusqlite::Connection;
use tracing::debug;

/// Load the entire directory into a [`Store`]
pub fn load_store(conn: &Connection) -> Result<Store> {
    let mut store = Store::new();

    for company in SqliteRepo::list_companies(conn)? {
        store.insert_company(company);
    }
    for department in SqliteRepo::list_departments(conn)? {
        store.insert_department(department);
    }
    for team in SqliteRepo::list_teams(conn)? {
        store.insert_team(team);
    }
    for employee in SqliteRepo::list_employees(conn)? {
        store.insert_employee(employee);
    }
    for role in SqliteRepo::list_roles(conn)? {
        store.insert_role(role);
    }
    for document in SqliteRepo::list_documents(conn)? {
        store.insert_document(document);
    }
    for contact in SqliteRepo::list_contacts(conn)? {
        store.insert_contact(contact);
    }
    for holiday in SqliteRepo::list_holidays(conn)? {
        store.insert_holiday(holiday);
    }

    debug!(
        companies = store.companies().len(),
        employees = store.employees().len(),
        "hydrated store"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::migrations::apply_migrations;
    use orgdir_core::model::{Company, Employee};

    #[test]
    fn test_round_trip_through_hydration() {
        let mut conn = db::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();

        let company = Company::new("c1".to_string(), "Acme".to_string(), "ACME".to_string());
        let mut employee = Employee::new(
            "e1".to_string(),
            "EMP001".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
        );
        employee.job_title = Some("Engineer".to_string());
        SqliteRepo::persist_company(&conn, &company).unwrap();
        SqliteRepo::persist_employee(&conn, &employee).unwrap();

        let store = load_store(&conn).unwrap();
        let loaded = store.get_employee("e1").unwrap();
        assert_eq!(loaded.job_title.as_deref(), Some("Engineer"));
        assert_eq!(loaded.email, "ada@example.com");
        assert!(store.get_company("c1").is_ok());
    }
}
