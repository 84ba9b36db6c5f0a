//! SQLite repository implementation
//!
//! Persists directory entities between the arena and their tables. All
//! functions take `&Connection`; `rusqlite::Transaction` derefs to
//! `Connection`, so the same statements serve transactional and
//! autocommit callers.

use crate::errors::{from_rusqlite, Result};
use chrono::{DateTime, NaiveDate, Utc};
use orgdir_core::model::{
    AuditLog, Company, Department, Employee, EmployeeContact, EmployeeDocument, EmployeeRole,
    EmployeeStatus, EmployeeType, Gender, Holiday, Team,
};
use rusqlite::{Connection, OptionalExtension, Row};

fn ts(dt: DateTime<Utc>) -> i64 {
    dt.timestamp()
}

fn from_ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn date_str(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.to_string())
}

fn parse_date(s: Option<String>) -> Option<NaiveDate> {
    s.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
}

/// SQLite repository for directory entities
pub struct SqliteRepo;

impl SqliteRepo {
    // ===== Companies =====

    /// Persist a company (insert or update by id)
    pub fn persist_company(conn: &Connection, company: &Company) -> Result<()> {
        conn.execute(
            "INSERT INTO companies (id, name, code, description, address, phone, email, tax_code, is_active, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                code = excluded.code,
                description = excluded.description,
                address = excluded.address,
                phone = excluded.phone,
                email = excluded.email,
                tax_code = excluded.tax_code,
                is_active = excluded.is_active,
                updated_at = excluded.updated_at",
            rusqlite::params![
                company.id,
                company.name,
                company.code,
                company.description,
                company.address,
                company.phone,
                company.email,
                company.tax_code,
                i64::from(company.is_active),
                ts(company.created_at),
                ts(company.updated_at),
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    fn company_from_row(row: &Row) -> rusqlite::Result<Company> {
        Ok(Company {
            id: row.get("id")?,
            name: row.get("name")?,
            code: row.get("code")?,
            description: row.get("description")?,
            address: row.get("address")?,
            phone: row.get("phone")?,
            email: row.get("email")?,
            tax_code: row.get("tax_code")?,
            is_active: row.get::<_, i64>("is_active")? != 0,
            created_at: from_ts(row.get("created_at")?),
            updated_at: from_ts(row.get("updated_at")?),
        })
    }

    /// Load a company by id
    pub fn get_company(conn: &Connection, id: &str) -> Result<Option<Company>> {
        conn.query_row(
            "SELECT * FROM companies WHERE id = ?1",
            [id],
            Self::company_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Load all companies ordered by id
    pub fn list_companies(conn: &Connection) -> Result<Vec<Company>> {
        let mut stmt = conn
            .prepare("SELECT * FROM companies ORDER BY id")
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], Self::company_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    /// Delete a company row
    pub fn delete_company(conn: &Connection, id: &str) -> Result<()> {
        conn.execute("DELETE FROM companies WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    // ===== Departments =====

    /// Persist a department (insert or update by id)
    pub fn persist_department(conn: &Connection, department: &Department) -> Result<()> {
        conn.execute(
            "INSERT INTO departments (id, name, code, description, company_id, manager_id, parent_department_id, sort_order, is_active, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                code = excluded.code,
                description = excluded.description,
                company_id = excluded.company_id,
                manager_id = excluded.manager_id,
                parent_department_id = excluded.parent_department_id,
                sort_order = excluded.sort_order,
                is_active = excluded.is_active,
                updated_at = excluded.updated_at",
            rusqlite::params![
                department.id,
                department.name,
                department.code,
                department.description,
                department.company_id,
                department.manager_id,
                department.parent_department_id,
                department.sort_order,
                i64::from(department.is_active),
                ts(department.created_at),
                ts(department.updated_at),
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    fn department_from_row(row: &Row) -> rusqlite::Result<Department> {
        Ok(Department {
            id: row.get("id")?,
            name: row.get("name")?,
            code: row.get("code")?,
            description: row.get("description")?,
            company_id: row.get("company_id")?,
            manager_id: row.get("manager_id")?,
            parent_department_id: row.get("parent_department_id")?,
            sort_order: row.get("sort_order")?,
            is_active: row.get::<_, i64>("is_active")? != 0,
            created_at: from_ts(row.get("created_at")?),
            updated_at: from_ts(row.get("updated_at")?),
        })
    }

    /// Load a department by id
    pub fn get_department(conn: &Connection, id: &str) -> Result<Option<Department>> {
        conn.query_row(
            "SELECT * FROM departments WHERE id = ?1",
            [id],
            Self::department_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Load all departments ordered by id
    pub fn list_departments(conn: &Connection) -> Result<Vec<Department>> {
        let mut stmt = conn
            .prepare("SELECT * FROM departments ORDER BY id")
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], Self::department_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    /// Delete a department row
    pub fn delete_department(conn: &Connection, id: &str) -> Result<()> {
        conn.execute("DELETE FROM departments WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    // ===== Teams =====

    /// Persist a team (insert or update by id)
    pub fn persist_team(conn: &Connection, team: &Team) -> Result<()> {
        conn.execute(
            "INSERT INTO teams (id, name, code, description, department_id, leader_id, sort_order, is_active, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                code = excluded.code,
                description = excluded.description,
                department_id = excluded.department_id,
                leader_id = excluded.leader_id,
                sort_order = excluded.sort_order,
                is_active = excluded.is_active,
                updated_at = excluded.updated_at",
            rusqlite::params![
                team.id,
                team.name,
                team.code,
                team.description,
                team.department_id,
                team.leader_id,
                team.sort_order,
                i64::from(team.is_active),
                ts(team.created_at),
                ts(team.updated_at),
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    fn team_from_row(row: &Row) -> rusqlite::Result<Team> {
        Ok(Team {
            id: row.get("id")?,
            name: row.get("name")?,
            code: row.get("code")?,
            description: row.get("description")?,
            department_id: row.get("department_id")?,
            leader_id: row.get("leader_id")?,
            sort_order: row.get("sort_order")?,
            is_active: row.get::<_, i64>("is_active")? != 0,
            created_at: from_ts(row.get("created_at")?),
            updated_at: from_ts(row.get("updated_at")?),
        })
    }

    /// Load a team by id
    pub fn get_team(conn: &Connection, id: &str) -> Result<Option<Team>> {
        conn.query_row("SELECT * FROM teams WHERE id = ?1", [id], Self::team_from_row)
            .optional()
            .map_err(from_rusqlite)
    }

    /// Load all teams ordered by id
    pub fn list_teams(conn: &Connection) -> Result<Vec<Team>> {
        let mut stmt = conn
            .prepare("SELECT * FROM teams ORDER BY id")
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], Self::team_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    /// Delete a team row
    pub fn delete_team(conn: &Connection, id: &str) -> Result<()> {
        conn.execute("DELETE FROM teams WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    // ===== Employees =====

    /// Persist an employee (insert or update by id)
    pub fn persist_employee(conn: &Connection, employee: &Employee) -> Result<()> {
        conn.execute(
            "INSERT INTO employees (id, employee_code, first_name, last_name, email, phone, avatar, date_of_birth, gender, address, identity_number, hire_date, termination_date, position, job_title, base_salary, bank_account, bank_name, tax_code, social_insurance_number, status, employee_type, department_id, team_id, manager_id, external_user_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28)
             ON CONFLICT(id) DO UPDATE SET
                employee_code = excluded.employee_code,
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                email = excluded.email,
                phone = excluded.phone,
                avatar = excluded.avatar,
                date_of_birth = excluded.date_of_birth,
                gender = excluded.gender,
                address = excluded.address,
                identity_number = excluded.identity_number,
                hire_date = excluded.hire_date,
                termination_date = excluded.termination_date,
                position = excluded.position,
                job_title = excluded.job_title,
                base_salary = excluded.base_salary,
                bank_account = excluded.bank_account,
                bank_name = excluded.bank_name,
                tax_code = excluded.tax_code,
                social_insurance_number = excluded.social_insurance_number,
                status = excluded.status,
                employee_type = excluded.employee_type,
                department_id = excluded.department_id,
                team_id = excluded.team_id,
                manager_id = excluded.manager_id,
                external_user_id = excluded.external_user_id,
                updated_at = excluded.updated_at",
            rusqlite::params![
                employee.id,
                employee.employee_code,
                employee.first_name,
                employee.last_name,
                employee.email,
                employee.phone,
                employee.avatar,
                date_str(employee.date_of_birth),
                employee.gender.map(|g| g.as_str()),
                employee.address,
                employee.identity_number,
                date_str(employee.hire_date),
                date_str(employee.termination_date),
                employee.position,
                employee.job_title,
                employee.base_salary,
                employee.bank_account,
                employee.bank_name,
                employee.tax_code,
                employee.social_insurance_number,
                employee.status.as_str(),
                employee.employee_type.as_str(),
                employee.department_id,
                employee.team_id,
                employee.manager_id,
                employee.external_user_id,
                ts(employee.created_at),
                ts(employee.updated_at),
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    fn employee_from_row(row: &Row) -> rusqlite::Result<Employee> {
        let status: String = row.get("status")?;
        let employee_type: String = row.get("employee_type")?;
        let gender: Option<String> = row.get("gender")?;
        Ok(Employee {
            id: row.get("id")?,
            employee_code: row.get("employee_code")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            avatar: row.get("avatar")?,
            date_of_birth: parse_date(row.get("date_of_birth")?),
            gender: gender.as_deref().and_then(Gender::parse),
            address: row.get("address")?,
            identity_number: row.get("identity_number")?,
            hire_date: parse_date(row.get("hire_date")?),
            termination_date: parse_date(row.get("termination_date")?),
            position: row.get("position")?,
            job_title: row.get("job_title")?,
            base_salary: row.get("base_salary")?,
            bank_account: row.get("bank_account")?,
            bank_name: row.get("bank_name")?,
            tax_code: row.get("tax_code")?,
            social_insurance_number: row.get("social_insurance_number")?,
            status: EmployeeStatus::parse(&status).unwrap_or(EmployeeStatus::Active),
            employee_type: EmployeeType::parse(&employee_type).unwrap_or(EmployeeType::FullTime),
            department_id: row.get("department_id")?,
            team_id: row.get("team_id")?,
            manager_id: row.get("manager_id")?,
            external_user_id: row.get("external_user_id")?,
            created_at: from_ts(row.get("created_at")?),
            updated_at: from_ts(row.get("updated_at")?),
        })
    }

    /// Load an employee by id
    pub fn get_employee(conn: &Connection, id: &str) -> Result<Option<Employee>> {
        conn.query_row(
            "SELECT * FROM employees WHERE id = ?1",
            [id],
            Self::employee_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Load all employees ordered by id
    pub fn list_employees(conn: &Connection) -> Result<Vec<Employee>> {
        let mut stmt = conn
            .prepare("SELECT * FROM employees ORDER BY id")
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], Self::employee_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    /// Delete an employee row
    pub fn delete_employee(conn: &Connection, id: &str) -> Result<()> {
        conn.execute("DELETE FROM employees WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    // ===== Roles =====

    /// Persist a role assignment (insert or ignore by (employee, role))
    pub fn persist_role(conn: &Connection, role: &EmployeeRole) -> Result<()> {
        conn.execute(
            "INSERT INTO employee_roles (id, employee_id, role, assigned_at, assigned_by)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(employee_id, role) DO NOTHING",
            rusqlite::params![
                role.id,
                role.employee_id,
                role.role,
                ts(role.assigned_at),
                role.assigned_by,
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    fn role_from_row(row: &Row) -> rusqlite::Result<EmployeeRole> {
        Ok(EmployeeRole {
            id: row.get("id")?,
            employee_id: row.get("employee_id")?,
            role: row.get("role")?,
            assigned_at: from_ts(row.get("assigned_at")?),
            assigned_by: row.get("assigned_by")?,
        })
    }

    /// Load all role assignments ordered by id
    pub fn list_roles(conn: &Connection) -> Result<Vec<EmployeeRole>> {
        let mut stmt = conn
            .prepare("SELECT * FROM employee_roles ORDER BY id")
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], Self::role_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    /// Delete a role assignment row
    pub fn delete_role(conn: &Connection, id: &str) -> Result<()> {
        conn.execute("DELETE FROM employee_roles WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    // ===== Documents =====

    /// Persist a document record (insert or update by id)
    pub fn persist_document(conn: &Connection, document: &EmployeeDocument) -> Result<()> {
        conn.execute(
            "INSERT INTO employee_documents (id, employee_id, document_type, file_name, file_path, uploaded_by, uploaded_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(id) DO UPDATE SET
                document_type = excluded.document_type,
                file_name = excluded.file_name,
                file_path = excluded.file_path",
            rusqlite::params![
                document.id,
                document.employee_id,
                document.document_type,
                document.file_name,
                document.file_path,
                document.uploaded_by,
                ts(document.uploaded_at),
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    fn document_from_row(row: &Row) -> rusqlite::Result<EmployeeDocument> {
        Ok(EmployeeDocument {
            id: row.get("id")?,
            employee_id: row.get("employee_id")?,
            document_type: row.get("document_type")?,
            file_name: row.get("file_name")?,
            file_path: row.get("file_path")?,
            uploaded_by: row.get("uploaded_by")?,
            uploaded_at: from_ts(row.get("uploaded_at")?),
        })
    }

    /// Load all document records ordered by id
    pub fn list_documents(conn: &Connection) -> Result<Vec<EmployeeDocument>> {
        let mut stmt = conn
            .prepare("SELECT * FROM employee_documents ORDER BY id")
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], Self::document_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    /// Delete a document row
    pub fn delete_document(conn: &Connection, id: &str) -> Result<()> {
        conn.execute("DELETE FROM employee_documents WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    // ===== Contacts =====

    /// Persist an emergency contact (insert or update by id)
    pub fn persist_contact(conn: &Connection, contact: &EmployeeContact) -> Result<()> {
        conn.execute(
            "INSERT INTO employee_contacts (id, employee_id, name, relationship, phone, is_primary)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                relationship = excluded.relationship,
                phone = excluded.phone,
                is_primary = excluded.is_primary",
            rusqlite::params![
                contact.id,
                contact.employee_id,
                contact.name,
                contact.relationship,
                contact.phone,
                i64::from(contact.is_primary),
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    fn contact_from_row(row: &Row) -> rusqlite::Result<EmployeeContact> {
        Ok(EmployeeContact {
            id: row.get("id")?,
            employee_id: row.get("employee_id")?,
            name: row.get("name")?,
            relationship: row.get("relationship")?,
            phone: row.get("phone")?,
            is_primary: row.get::<_, i64>("is_primary")? != 0,
        })
    }

    /// Load all emergency contacts ordered by id
    pub fn list_contacts(conn: &Connection) -> Result<Vec<EmployeeContact>> {
        let mut stmt = conn
            .prepare("SELECT * FROM employee_contacts ORDER BY id")
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], Self::contact_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    /// Delete an emergency contact row
    pub fn delete_contact(conn: &Connection, id: &str) -> Result<()> {
        conn.execute("DELETE FROM employee_contacts WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    // ===== Holidays =====

    /// Persist a holiday (insert or update by id)
    pub fn persist_holiday(conn: &Connection, holiday: &Holiday) -> Result<()> {
        conn.execute(
            "INSERT INTO holidays (id, company_id, name, description, date, is_recurring, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                date = excluded.date,
                is_recurring = excluded.is_recurring,
                updated_at = excluded.updated_at",
            rusqlite::params![
                holiday.id,
                holiday.company_id,
                holiday.name,
                holiday.description,
                holiday.date.to_string(),
                i64::from(holiday.is_recurring),
                ts(holiday.created_at),
                ts(holiday.updated_at),
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    fn holiday_from_row(row: &Row) -> rusqlite::Result<Holiday> {
        let date: String = row.get("date")?;
        Ok(Holiday {
            id: row.get("id")?,
            company_id: row.get("company_id")?,
            name: row.get("name")?,
            description: row.get("description")?,
            date: NaiveDate::parse_from_str(&date, "%Y-%m-%d").unwrap_or_default(),
            is_recurring: row.get::<_, i64>("is_recurring")? != 0,
            created_at: from_ts(row.get("created_at")?),
            updated_at: from_ts(row.get("updated_at")?),
        })
    }

    /// Load all holidays ordered by id
    pub fn list_holidays(conn: &Connection) -> Result<Vec<Holiday>> {
        let mut stmt = conn
            .prepare("SELECT * FROM holidays ORDER BY id")
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], Self::holiday_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    /// Delete a holiday row
    pub fn delete_holiday(conn: &Connection, id: &str) -> Result<()> {
        conn.execute("DELETE FROM holidays WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    // ===== Audit trail =====

    /// Append an audit row; the trail is insert-only
    pub fn append_audit(conn: &Connection, entry: &AuditLog) -> Result<()> {
        conn.execute(
            "INSERT INTO audit_logs (id, entity_type, entity_id, action, old_values, new_values, performed_by, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                entry.id,
                entry.entity_type,
                entry.entity_id,
                entry.action,
                entry.old_values,
                entry.new_values,
                entry.performed_by,
                ts(entry.timestamp),
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Audit rows for one entity, oldest first
    pub fn audit_for_entity(
        conn: &Connection,
        entity_type: &str,
        entity_id: &str,
    ) -> Result<Vec<AuditLog>> {
        let mut stmt = conn
            .prepare(
                "SELECT * FROM audit_logs WHERE entity_type = ?1 AND entity_id = ?2
                 ORDER BY timestamp, id",
            )
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([entity_type, entity_id], |row| {
                Ok(AuditLog {
                    id: row.get("id")?,
                    entity_type: row.get("entity_type")?,
                    entity_id: row.get("entity_id")?,
                    action: row.get("action")?,
                    old_values: row.get("old_values")?,
                    new_values: row.get("new_values")?,
                    performed_by: row.get("performed_by")?,
                    timestamp: from_ts(row.get("timestamp")?),
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }
}
