//! Seed importer
//!
//! Resolves a validated seed file to entities and writes them in one
//! unit of work. Codes and emails become ids here; the parser has
//! already guaranteed every reference resolves.

use std::collections::HashMap;

use rusqlite::Connection;
use tracing::info;
use uuid::Uuid;

use crate::errors::Result;
use crate::repo::unit_of_work::UnitOfWork;
use crate::seed::parser::SeedFile;
use orgdir_core::model::{Company, Department, Employee, EmployeeRole, Holiday, Team};

/// Counts of what an import wrote
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub companies: usize,
    pub departments: usize,
    pub teams: usize,
    pub employees: usize,
    pub roles: usize,
    pub holidays: usize,
}

/// Import a parsed seed into the database, atomically
pub fn import_seed(conn: &mut Connection, seed: &SeedFile) -> Result<ImportStats> {
    let mut stats = ImportStats::default();
    let uow = UnitOfWork::begin(conn)?;

    let company_id = Uuid::now_v7().to_string();
    let mut company = Company::new(
        company_id.clone(),
        seed.company.name.clone(),
        seed.company.code.clone(),
    );
    company.description = seed.company.description.clone();
    uow.save_company(&company)?;
    stats.companies += 1;

    // Pass 1: departments and teams, ids keyed by code
    let mut department_ids: HashMap<&str, String> = HashMap::new();
    let mut team_ids: HashMap<&str, String> = HashMap::new();
    for seed_department in &seed.company.departments {
        let id = Uuid::now_v7().to_string();
        department_ids.insert(seed_department.code.as_str(), id.clone());
        let mut department = Department::new(
            id,
            seed_department.name.clone(),
            seed_department.code.clone(),
            company_id.clone(),
        );
        department.description = seed_department.description.clone();
        uow.save_department(&department)?;
        stats.departments += 1;

        for seed_team in &seed_department.teams {
            let team_id = Uuid::now_v7().to_string();
            team_ids.insert(seed_team.code.as_str(), team_id.clone());
            let mut team = Team::new(
                team_id,
                seed_team.name.clone(),
                seed_team.code.clone(),
                department.id.clone(),
            );
            team.description = seed_team.description.clone();
            uow.save_team(&team)?;
            stats.teams += 1;
        }
    }

    // Parent links need every department id known first
    for seed_department in &seed.company.departments {
        if let Some(parent_code) = &seed_department.parent {
            uow.connection()
                .execute(
                    "UPDATE departments SET parent_department_id = ?1 WHERE id = ?2",
                    rusqlite::params![
                        department_ids[parent_code.as_str()],
                        department_ids[seed_department.code.as_str()]
                    ],
                )
                .map_err(crate::errors::from_rusqlite)?;
        }
    }

    // Pass 2: employees, manager links deferred until every id is known
    let mut employee_ids: HashMap<String, String> = HashMap::new();
    for seed_employee in &seed.employees {
        let id = Uuid::now_v7().to_string();
        employee_ids.insert(seed_employee.email.to_lowercase(), id.clone());
        let mut employee = Employee::new(
            id,
            seed_employee.employee_code.clone(),
            seed_employee.first_name.clone(),
            seed_employee.last_name.clone(),
            seed_employee.email.clone(),
        );
        employee.phone = seed_employee.phone.clone();
        employee.job_title = seed_employee.job_title.clone();
        employee.hire_date = seed_employee.hire_date;
        employee.department_id = seed_employee
            .department
            .as_deref()
            .map(|code| department_ids[code].clone());
        employee.team_id = seed_employee
            .team
            .as_deref()
            .map(|code| team_ids[code].clone());
        uow.save_employee(&employee)?;
        stats.employees += 1;

        for role in &seed_employee.roles {
            let assignment = EmployeeRole::new(
                Uuid::now_v7().to_string(),
                employee.id.clone(),
                role.clone(),
            );
            uow.save_role(&assignment)?;
            stats.roles += 1;
        }
    }

    // Pass 3: manager and leader links by email
    for seed_employee in &seed.employees {
        if let Some(manager_email) = &seed_employee.manager_email {
            let employee_id = &employee_ids[&seed_employee.email.to_lowercase()];
            uow.connection()
                .execute(
                    "UPDATE employees SET manager_id = ?1 WHERE id = ?2",
                    rusqlite::params![
                        employee_ids[&manager_email.to_lowercase()],
                        employee_id
                    ],
                )
                .map_err(crate::errors::from_rusqlite)?;
        }
    }
    for seed_department in &seed.company.departments {
        for seed_team in &seed_department.teams {
            if let Some(leader_email) = &seed_team.leader_email {
                uow.connection()
                    .execute(
                        "UPDATE teams SET leader_id = ?1 WHERE id = ?2",
                        rusqlite::params![
                            employee_ids[&leader_email.to_lowercase()],
                            team_ids[seed_team.code.as_str()]
                        ],
                    )
                    .map_err(crate::errors::from_rusqlite)?;
            }
        }
    }

    for seed_holiday in &seed.holidays {
        let mut holiday = Holiday::new(
            Uuid::now_v7().to_string(),
            company_id.clone(),
            seed_holiday.name.clone(),
            seed_holiday.date,
        );
        holiday.is_recurring = seed_holiday.is_recurring;
        uow.save_holiday(&holiday)?;
        stats.holidays += 1;
    }

    uow.commit()?;
    info!(
        departments = stats.departments,
        teams = stats.teams,
        employees = stats.employees,
        "seed imported"
    );
    Ok(stats)
}
