use std::collections::HashMap;

use crate::errors::{OrgDirError, Result};
use crate::model::{
    Company, Department, Employee, EmployeeContact, EmployeeDocument, EmployeeRole, Holiday, Team,
};

/// In-memory arena for the directory
///
/// One map per entity type, keyed by id; relationships are id references
/// resolved through the lookup helpers below, never embedded pointers.
/// Not thread-safe (no Arc/RwLock) - one Store per request, hydrated from
/// the relational store and persisted back by the engine.
///
/// Child-lookup helpers return deterministic ordering (sort_order, then
/// name, then id for the containment tree; last name, first name, then id
/// for employees) so traversals over the arena are reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub(crate) companies: HashMap<String, Company>,
    pub(crate) departments: HashMap<String, Department>,
    pub(crate) teams: HashMap<String, Team>,
    pub(crate) employees: HashMap<String, Employee>,
    pub(crate) roles: HashMap<String, EmployeeRole>,
    pub(crate) documents: HashMap<String, EmployeeDocument>,
    pub(crate) contacts: HashMap<String, EmployeeContact>,
    pub(crate) holidays: HashMap<String, Holiday>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Typed getters =====

    /// Get a Company by ID
    ///
    /// # Errors
    ///
    /// Returns `CompanyNotFound` if the company doesn't exist.
    pub fn get_company(&self, id: &str) -> Result<&Company> {
        self.companies
            .get(id)
            .ok_or_else(|| OrgDirError::CompanyNotFound {
                company_id: id.to_string(),
            })
    }

    /// Get a mutable reference to a Company by ID
    ///
    /// # Errors
    ///
    /// Returns `CompanyNotFound` if the company doesn't exist.
    pub fn get_company_mut(&mut self, id: &str) -> Result<&mut Company> {
        self.companies
            .get_mut(id)
            .ok_or_else(|| OrgDirError::CompanyNotFound {
                company_id: id.to_string(),
            })
    }

    /// Get a Department by ID
    ///
    /// # Errors
    ///
    /// Returns `DepartmentNotFound` if the department doesn't exist.
    pub fn get_department(&self, id: &str) -> Result<&Department> {
        self.departments
            .get(id)
            .ok_or_else(|| OrgDirError::DepartmentNotFound {
                department_id: id.to_string(),
            })
    }

    /// Get a mutable reference to a Department by ID
    ///
    /// # Errors
    ///
    /// Returns `DepartmentNotFound` if the department doesn't exist.
    pub fn get_department_mut(&mut self, id: &str) -> Result<&mut Department> {
        self.departments
            .get_mut(id)
            .ok_or_else(|| OrgDirError::DepartmentNotFound {
                department_id: id.to_string(),
            })
    }

    /// Get a Team by ID
    ///
    /// # Errors
    ///
    /// Returns `TeamNotFound` if the team doesn't exist.
    pub fn get_team(&self, id: &str) -> Result<&Team> {
        self.teams.get(id).ok_or_else(|| OrgDirError::TeamNotFound {
            team_id: id.to_string(),
        })
    }

    /// Get a mutable reference to a Team by ID
    ///
    /// # Errors
    ///
    /// Returns `TeamNotFound` if the team doesn't exist.
    pub fn get_team_mut(&mut self, id: &str) -> Result<&mut Team> {
        self.teams
            .get_mut(id)
            .ok_or_else(|| OrgDirError::TeamNotFound {
                team_id: id.to_string(),
            })
    }

    /// Get an Employee by ID
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if the employee doesn't exist.
    pub fn get_employee(&self, id: &str) -> Result<&Employee> {
        self.employees
            .get(id)
            .ok_or_else(|| OrgDirError::EmployeeNotFound {
                employee_id: id.to_string(),
            })
    }

    /// Get a mutable reference to an Employee by ID
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if the employee doesn't exist.
    pub fn get_employee_mut(&mut self, id: &str) -> Result<&mut Employee> {
        self.employees
            .get_mut(id)
            .ok_or_else(|| OrgDirError::EmployeeNotFound {
                employee_id: id.to_string(),
            })
    }

    // ===== Listings (deterministic, sorted by id) =====

    /// List all companies sorted by id
    pub fn list_companies(&self) -> Vec<&Company> {
        let mut all: Vec<&Company> = self.companies.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// List all departments sorted by id
    pub fn list_departments(&self) -> Vec<&Department> {
        let mut all: Vec<&Department> = self.departments.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// List all teams sorted by id
    pub fn list_teams(&self) -> Vec<&Team> {
        let mut all: Vec<&Team> = self.teams.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// List all employees sorted by id
    pub fn list_employees(&self) -> Vec<&Employee> {
        let mut all: Vec<&Employee> = self.employees.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    // ===== Containment indexes =====

    /// Departments directly under a company, sorted by (sort_order, name, id)
    pub fn departments_of_company(&self, company_id: &str) -> Vec<&Department> {
        let mut found: Vec<&Department> = self
            .departments
            .values()
            .filter(|d| d.company_id == company_id)
            .collect();
        found.sort_by(|a, b| {
            (a.sort_order, &a.name, &a.id).cmp(&(b.sort_order, &b.name, &b.id))
        });
        found
    }

    /// Child departments of a department, sorted by (sort_order, name, id)
    pub fn child_departments(&self, department_id: &str) -> Vec<&Department> {
        let mut found: Vec<&Department> = self
            .departments
            .values()
            .filter(|d| d.parent_department_id.as_deref() == Some(department_id))
            .collect();
        found.sort_by(|a, b| {
            (a.sort_order, &a.name, &a.id).cmp(&(b.sort_order, &b.name, &b.id))
        });
        found
    }

    /// Teams under a department, sorted by (sort_order, name, id)
    pub fn teams_of_department(&self, department_id: &str) -> Vec<&Team> {
        let mut found: Vec<&Team> = self
            .teams
            .values()
            .filter(|t| t.department_id == department_id)
            .collect();
        found.sort_by(|a, b| {
            (a.sort_order, &a.name, &a.id).cmp(&(b.sort_order, &b.name, &b.id))
        });
        found
    }

    /// Employees on a team, sorted by (last_name, first_name, id)
    pub fn employees_of_team(&self, team_id: &str) -> Vec<&Employee> {
        let mut found: Vec<&Employee> = self
            .employees
            .values()
            .filter(|e| e.team_id.as_deref() == Some(team_id))
            .collect();
        found.sort_by(|a, b| {
            (&a.last_name, &a.first_name, &a.id).cmp(&(&b.last_name, &b.first_name, &b.id))
        });
        found
    }

    /// Employees assigned to a department, sorted by (last_name, first_name, id)
    pub fn employees_of_department(&self, department_id: &str) -> Vec<&Employee> {
        let mut found: Vec<&Employee> = self
            .employees
            .values()
            .filter(|e| e.department_id.as_deref() == Some(department_id))
            .collect();
        found.sort_by(|a, b| {
            (&a.last_name, &a.first_name, &a.id).cmp(&(&b.last_name, &b.first_name, &b.id))
        });
        found
    }

    /// Direct reports of a manager, sorted by (last_name, first_name, id)
    pub fn employees_of_manager(&self, manager_id: &str) -> Vec<&Employee> {
        let mut found: Vec<&Employee> = self
            .employees
            .values()
            .filter(|e| e.manager_id.as_deref() == Some(manager_id))
            .collect();
        found.sort_by(|a, b| {
            (&a.last_name, &a.first_name, &a.id).cmp(&(&b.last_name, &b.first_name, &b.id))
        });
        found
    }

    // ===== Secondary lookups =====

    /// Find an employee by email, case-insensitive
    pub fn find_employee_by_email(&self, email: &str) -> Option<&Employee> {
        let needle = email.to_lowercase();
        self.employees
            .values()
            .find(|e| e.email.to_lowercase() == needle)
    }

    /// Find an employee by organizational code
    pub fn find_employee_by_code(&self, employee_code: &str) -> Option<&Employee> {
        self.employees
            .values()
            .find(|e| e.employee_code == employee_code)
    }

    /// Find an employee by opaque external identity-provider user id
    pub fn find_employee_by_external_user_id(&self, external_user_id: &str) -> Option<&Employee> {
        self.employees
            .values()
            .find(|e| e.external_user_id.as_deref() == Some(external_user_id))
    }

    /// Role assignments of an employee, sorted by role label
    pub fn roles_of_employee(&self, employee_id: &str) -> Vec<&EmployeeRole> {
        let mut found: Vec<&EmployeeRole> = self
            .roles
            .values()
            .filter(|r| r.employee_id == employee_id)
            .collect();
        found.sort_by(|a, b| (&a.role, &a.id).cmp(&(&b.role, &b.id)));
        found
    }

    /// Documents of an employee, sorted by id
    pub fn documents_of_employee(&self, employee_id: &str) -> Vec<&EmployeeDocument> {
        let mut found: Vec<&EmployeeDocument> = self
            .documents
            .values()
            .filter(|d| d.employee_id == employee_id)
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        found
    }

    /// Emergency contacts of an employee, sorted by id
    pub fn contacts_of_employee(&self, employee_id: &str) -> Vec<&EmployeeContact> {
        let mut found: Vec<&EmployeeContact> = self
            .contacts
            .values()
            .filter(|c| c.employee_id == employee_id)
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        found
    }

    /// Holidays of a company, sorted by date then id
    pub fn holidays_of_company(&self, company_id: &str) -> Vec<&Holiday> {
        let mut found: Vec<&Holiday> = self
            .holidays
            .values()
            .filter(|h| h.company_id == company_id)
            .collect();
        found.sort_by(|a, b| (a.date, &a.id).cmp(&(b.date, &b.id)));
        found
    }

    // ===== Inserts =====

    /// Insert a Company into the store
    pub fn insert_company(&mut self, company: Company) {
        self.companies.insert(company.id.clone(), company);
    }

    /// Insert a Department into the store
    pub fn insert_department(&mut self, department: Department) {
        self.departments.insert(department.id.clone(), department);
    }

    /// Insert a Team into the store
    pub fn insert_team(&mut self, team: Team) {
        self.teams.insert(team.id.clone(), team);
    }

    /// Insert an Employee into the store
    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.insert(employee.id.clone(), employee);
    }

    /// Insert a role assignment into the store
    pub fn insert_role(&mut self, role: EmployeeRole) {
        self.roles.insert(role.id.clone(), role);
    }

    /// Insert a document record into the store
    pub fn insert_document(&mut self, document: EmployeeDocument) {
        self.documents.insert(document.id.clone(), document);
    }

    /// Insert an emergency contact into the store
    pub fn insert_contact(&mut self, contact: EmployeeContact) {
        self.contacts.insert(contact.id.clone(), contact);
    }

    /// Insert a Holiday into the store
    pub fn insert_holiday(&mut self, holiday: Holiday) {
        self.holidays.insert(holiday.id.clone(), holiday);
    }

    // ===== Raw map access (engine persistence diffing) =====

    pub fn companies(&self) -> &HashMap<String, Company> {
        &self.companies
    }

    pub fn departments(&self) -> &HashMap<String, Department> {
        &self.departments
    }

    pub fn teams(&self) -> &HashMap<String, Team> {
        &self.teams
    }

    pub fn employees(&self) -> &HashMap<String, Employee> {
        &self.employees
    }

    pub fn roles(&self) -> &HashMap<String, EmployeeRole> {
        &self.roles
    }

    pub fn documents(&self) -> &HashMap<String, EmployeeDocument> {
        &self.documents
    }

    pub fn contacts(&self) -> &HashMap<String, EmployeeContact> {
        &self.contacts
    }

    pub fn holidays(&self) -> &HashMap<String, Holiday> {
        &self.holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store() {
        let store = Store::new();
        assert!(store.list_companies().is_empty());
        assert!(store.list_employees().is_empty());
    }

    #[test]
    fn test_insert_and_get_employee() {
        let mut store = Store::new();
        let e = Employee::new(
            "e1".to_string(),
            "EMP001".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
        );
        store.insert_employee(e);

        let retrieved = store.get_employee("e1").unwrap();
        assert_eq!(retrieved.email, "ada@example.com");
    }

    #[test]
    fn test_get_nonexistent_employee() {
        let store = Store::new();
        let result = store.get_employee("nonexistent");
        assert!(matches!(
            result,
            Err(OrgDirError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_find_employee_by_email_case_insensitive() {
        let mut store = Store::new();
        let e = Employee::new(
            "e1".to_string(),
            "EMP001".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "Ada@Example.com".to_string(),
        );
        store.insert_employee(e);

        assert!(store.find_employee_by_email("ada@example.COM").is_some());
        assert!(store.find_employee_by_email("none@example.com").is_none());
    }

    #[test]
    fn test_departments_of_company_sorted_by_sort_order() {
        let mut store = Store::new();
        let mut d1 = Department::new(
            "d1".to_string(),
            "Zeta".to_string(),
            "Z".to_string(),
            "c1".to_string(),
        );
        d1.sort_order = 0;
        let mut d2 = Department::new(
            "d2".to_string(),
            "Alpha".to_string(),
            "A".to_string(),
            "c1".to_string(),
        );
        d2.sort_order = 1;
        store.insert_department(d2);
        store.insert_department(d1);

        let ordered: Vec<&str> = store
            .departments_of_company("c1")
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ordered, vec!["d1", "d2"]);
    }

    #[test]
    fn test_employees_of_manager() {
        let mut store = Store::new();
        let mut e1 = Employee::new(
            "e1".to_string(),
            "EMP001".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
        );
        e1.manager_id = Some("m1".to_string());
        let e2 = Employee::new(
            "e2".to_string(),
            "EMP002".to_string(),
            "Grace".to_string(),
            "Hopper".to_string(),
            "grace@example.com".to_string(),
        );
        store.insert_employee(e1);
        store.insert_employee(e2);

        let reports = store.employees_of_manager("m1");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, "e1");
    }
}
