//! Seed file parser
//!
//! Parses and validates the YAML seed format. Validation is purely
//! structural: codes unique, references resolvable. Id allocation and
//! persistence happen in the importer.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::{seed_validation, Result};

#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub company: SeedCompany,
    #[serde(default)]
    pub employees: Vec<SeedEmployee>,
    #[serde(default)]
    pub holidays: Vec<SeedHoliday>,
}

#[derive(Debug, Deserialize)]
pub struct SeedCompany {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub departments: Vec<SeedDepartment>,
}

#[derive(Debug, Deserialize)]
pub struct SeedDepartment {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Code of the parent department, if nested
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub teams: Vec<SeedTeam>,
}

#[derive(Debug, Deserialize)]
pub struct SeedTeam {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Email of the team leader; resolved after employees are created
    #[serde(default)]
    pub leader_email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedEmployee {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Code of the department the employee belongs to
    #[serde(default)]
    pub department: Option<String>,
    /// Code of the team the employee is on
    #[serde(default)]
    pub team: Option<String>,
    /// Email of the employee's manager
    #[serde(default)]
    pub manager_email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedHoliday {
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
}

/// Parse and validate a seed file
pub fn parse_seed(yaml: &str) -> Result<SeedFile> {
    let seed: SeedFile =
        serde_yaml::from_str(yaml).map_err(|e| seed_validation(&e.to_string()))?;
    validate(&seed)?;
    Ok(seed)
}

fn validate(seed: &SeedFile) -> Result<()> {
    let mut department_codes = HashSet::new();
    let mut team_codes = HashSet::new();
    for department in &seed.company.departments {
        if !department_codes.insert(department.code.as_str()) {
            return Err(seed_validation(&format!(
                "duplicate department code '{}'",
                department.code
            )));
        }
        for team in &department.teams {
            if !team_codes.insert(team.code.as_str()) {
                return Err(seed_validation(&format!(
                    "duplicate team code '{}'",
                    team.code
                )));
            }
        }
    }
    let parents: HashMap<&str, &str> = seed
        .company
        .departments
        .iter()
        .filter_map(|d| d.parent.as_deref().map(|p| (d.code.as_str(), p)))
        .collect();
    for department in &seed.company.departments {
        if let Some(parent) = &department.parent {
            if !department_codes.contains(parent.as_str()) {
                return Err(seed_validation(&format!(
                    "department '{}' names unknown parent '{}'",
                    department.code, parent
                )));
            }
            // Self-parent is just the one-hop case; walk the whole chain
            let mut seen = HashSet::new();
            let mut current = Some(parent.as_str());
            while let Some(code) = current {
                if code == department.code {
                    return Err(seed_validation(&format!(
                        "department parent chain loops through '{}'",
                        department.code
                    )));
                }
                if !seen.insert(code) {
                    break;
                }
                current = parents.get(code).copied();
            }
        }
    }

    let mut emails = HashSet::new();
    for employee in &seed.employees {
        if !emails.insert(employee.email.to_lowercase()) {
            return Err(seed_validation(&format!(
                "duplicate employee email '{}'",
                employee.email
            )));
        }
        if let Some(code) = &employee.department {
            if !department_codes.contains(code.as_str()) {
                return Err(seed_validation(&format!(
                    "employee '{}' names unknown department '{}'",
                    employee.email, code
                )));
            }
        }
        if let Some(code) = &employee.team {
            if !team_codes.contains(code.as_str()) {
                return Err(seed_validation(&format!(
                    "employee '{}' names unknown team '{}'",
                    employee.email, code
                )));
            }
        }
    }
    let managers: HashMap<String, String> = seed
        .employees
        .iter()
        .filter_map(|e| {
            e.manager_email
                .as_ref()
                .map(|m| (e.email.to_lowercase(), m.to_lowercase()))
        })
        .collect();
    for employee in &seed.employees {
        if let Some(manager_email) = &employee.manager_email {
            if !emails.contains(&manager_email.to_lowercase()) {
                return Err(seed_validation(&format!(
                    "employee '{}' names unknown manager '{}'",
                    employee.email, manager_email
                )));
            }
            let start = employee.email.to_lowercase();
            let mut seen = HashSet::new();
            let mut current = Some(manager_email.to_lowercase());
            while let Some(email) = current {
                if email == start {
                    return Err(seed_validation(&format!(
                        "manager chain loops through '{}'",
                        employee.email
                    )));
                }
                if !seen.insert(email.clone()) {
                    break;
                }
                current = managers.get(&email).cloned();
            }
        }
    }
    for department in &seed.company.departments {
        for team in &department.teams {
            if let Some(leader_email) = &team.leader_email {
                if !emails.contains(&leader_email.to_lowercase()) {
                    return Err(seed_validation(&format!(
                        "team '{}' names unknown leader '{}'",
                        team.code, leader_email
                    )));
                }
            }
        }
    }
    Ok(())
}
