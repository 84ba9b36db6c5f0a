//! Transaction-scoped unit of work
//!
//! Wraps one `rusqlite::Transaction` and exposes the repository surface
//! against it. Nothing reaches the database until [`UnitOfWork::commit`];
//! dropping the value rolls everything back. There is no implicit ambient
//! transaction: a caller that wants atomicity asks for a unit of work and
//! its scope is visible in the code.

use crate::errors::{from_rusqlite, Result};
use crate::repo::sqlite_repo::SqliteRepo;
use orgdir_core::model::{
    AuditLog, Company, Department, Employee, EmployeeContact, EmployeeDocument, EmployeeRole,
    Holiday, Team,
};
use rusqlite::{Connection, Transaction};

/// One atomic write scope over the directory tables
pub struct UnitOfWork<'c> {
    tx: Transaction<'c>,
}

impl<'c> UnitOfWork<'c> {
    /// Begin a transaction on the connection
    pub fn begin(conn: &'c mut Connection) -> Result<Self> {
        let tx = conn.transaction().map_err(from_rusqlite)?;
        Ok(Self { tx })
    }

    /// Commit everything written through this unit of work
    pub fn commit(self) -> Result<()> {
        self.tx.commit().map_err(from_rusqlite)
    }

    /// The underlying transaction, for read queries inside the scope
    pub fn connection(&self) -> &Connection {
        &self.tx
    }

    pub fn save_company(&self, company: &Company) -> Result<()> {
        SqliteRepo::persist_company(&self.tx, company)
    }

    pub fn delete_company(&self, id: &str) -> Result<()> {
        SqliteRepo::delete_company(&self.tx, id)
    }

    pub fn save_department(&self, department: &Department) -> Result<()> {
        SqliteRepo::persist_department(&self.tx, department)
    }

    pub fn delete_department(&self, id: &str) -> Result<()> {
        SqliteRepo::delete_department(&self.tx, id)
    }

    pub fn save_team(&self, team: &Team) -> Result<()> {
        SqliteRepo::persist_team(&self.tx, team)
    }

    pub fn delete_team(&self, id: &str) -> Result<()> {
        SqliteRepo::delete_team(&self.tx, id)
    }

    pub fn save_employee(&self, employee: &Employee) -> Result<()> {
        SqliteRepo::persist_employee(&self.tx, employee)
    }

    pub fn delete_employee(&self, id: &str) -> Result<()> {
        SqliteRepo::delete_employee(&self.tx, id)
    }

    pub fn save_role(&self, role: &EmployeeRole) -> Result<()> {
        SqliteRepo::persist_role(&self.tx, role)
    }

    pub fn delete_role(&self, id: &str) -> Result<()> {
        SqliteRepo::delete_role(&self.tx, id)
    }

    pub fn save_document(&self, document: &EmployeeDocument) -> Result<()> {
        SqliteRepo::persist_document(&self.tx, document)
    }

    pub fn delete_document(&self, id: &str) -> Result<()> {
        SqliteRepo::delete_document(&self.tx, id)
    }

    pub fn save_contact(&self, contact: &EmployeeContact) -> Result<()> {
        SqliteRepo::persist_contact(&self.tx, contact)
    }

    pub fn delete_contact(&self, id: &str) -> Result<()> {
        SqliteRepo::delete_contact(&self.tx, id)
    }

    pub fn save_holiday(&self, holiday: &Holiday) -> Result<()> {
        SqliteRepo::persist_holiday(&self.tx, holiday)
    }

    pub fn delete_holiday(&self, id: &str) -> Result<()> {
        SqliteRepo::delete_holiday(&self.tx, id)
    }

    pub fn append_audit(&self, entry: &AuditLog) -> Result<()> {
        SqliteRepo::append_audit(&self.tx, entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::migrations::apply_migrations;

    #[test]
    fn test_drop_without_commit_rolls_back() {
        let mut conn = db::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();

        {
            let uow = UnitOfWork::begin(&mut conn).unwrap();
            uow.save_company(&Company::new(
                "c1".to_string(),
                "Acme".to_string(),
                "ACME".to_string(),
            ))
            .unwrap();
            // dropped uncommitted
        }

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM companies", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_commit_persists() {
        let mut conn = db::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();

        let uow = UnitOfWork::begin(&mut conn).unwrap();
        uow.save_company(&Company::new(
            "c1".to_string(),
            "Acme".to_string(),
            "ACME".to_string(),
        ))
        .unwrap();
        uow.commit().unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM companies", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
