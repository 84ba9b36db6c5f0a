//! The single mutation boundary
//!
//! [`apply`] is a pure function: it never touches the input snapshot,
//! never performs IO, and either returns a fully consistent successor
//! snapshot or an error with the input logically unchanged. Persistence
//! and auditing live in the engine crate, on top of this boundary.

use tracing::instrument;

use crate::commands::{Command, CommandOutcome};
use crate::errors::Result;
use crate::ops::{company_ops, department_ops, employee_ops, team_ops, Store};
use crate::rules::validation;

/// Apply one command to a snapshot, producing the successor snapshot and
/// what the command did.
///
/// # Errors
///
/// Returns the domain error of whichever validation failed; the input
/// snapshot is never modified.
#[instrument(skip_all, fields(command = cmd.name()))]
pub fn apply(state: &Store, cmd: Command) -> Result<(Store, CommandOutcome)> {
    let mut next = state.clone();
    let reshapes_structure = matches!(
        cmd,
        Command::DepartmentCreate(_)
            | Command::DepartmentUpdate { .. }
            | Command::EmployeeCreate(_)
            | Command::EmployeeUpdate { .. }
    );

    let outcome = match cmd {
        Command::CompanyCreate(new) => {
            let id = company_ops::create_company(&mut next, new)?;
            CommandOutcome::Created { id }
        }
        Command::CompanyUpdate { company_id, patch } => {
            company_ops::update_company(&mut next, &company_id, patch)?;
            CommandOutcome::Updated { id: company_id }
        }
        Command::CompanyDelete { company_id } => {
            company_ops::delete_company(&mut next, &company_id)?;
            CommandOutcome::Deleted { id: company_id }
        }
        Command::DepartmentCreate(new) => {
            let id = department_ops::create_department(&mut next, new)?;
            CommandOutcome::Created { id }
        }
        Command::DepartmentUpdate {
            department_id,
            patch,
        } => {
            department_ops::update_department(&mut next, &department_id, patch)?;
            CommandOutcome::Updated { id: department_id }
        }
        Command::DepartmentDelete { department_id } => {
            department_ops::delete_department(&mut next, &department_id)?;
            CommandOutcome::Deleted { id: department_id }
        }
        Command::TeamCreate(new) => {
            let id = team_ops::create_team(&mut next, new)?;
            CommandOutcome::Created { id }
        }
        Command::TeamUpdate { team_id, patch } => {
            team_ops::update_team(&mut next, &team_id, patch)?;
            CommandOutcome::Updated { id: team_id }
        }
        Command::TeamDelete { team_id } => {
            team_ops::delete_team(&mut next, &team_id)?;
            CommandOutcome::Deleted { id: team_id }
        }
        Command::EmployeeCreate(new) => {
            let id = employee_ops::create_employee(&mut next, new)?;
            CommandOutcome::Created { id }
        }
        Command::EmployeeUpdate { employee_id, patch } => {
            employee_ops::update_employee(&mut next, &employee_id, patch)?;
            CommandOutcome::Updated { id: employee_id }
        }
        Command::EmployeeDelete { employee_id } => {
            employee_ops::delete_employee(&mut next, &employee_id)?;
            CommandOutcome::Deleted { id: employee_id }
        }
        Command::RoleAssign {
            employee_id,
            role,
            assigned_by,
        } => {
            let already_assigned =
                employee_ops::assign_role(&mut next, &employee_id, &role, assigned_by)?;
            CommandOutcome::RoleAssigned {
                employee_id,
                already_assigned,
            }
        }
        Command::HolidayCreate(new) => {
            let id = company_ops::create_holiday(&mut next, new)?;
            CommandOutcome::Created { id }
        }
        Command::HolidayDelete { holiday_id } => {
            company_ops::delete_holiday(&mut next, &holiday_id)?;
            CommandOutcome::Deleted { id: holiday_id }
        }
        Command::DocumentAdd(new) => {
            let id = employee_ops::add_document(&mut next, new)?;
            CommandOutcome::Created { id }
        }
        Command::ContactAdd(new) => {
            let id = employee_ops::add_contact(&mut next, new)?;
            CommandOutcome::Created { id }
        }
    };

    if reshapes_structure {
        validation::validate_hierarchy(&next)?;
    }
    Ok((next, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{NewCompany, NewEmployee};
    use crate::errors::OrgDirError;

    fn company_cmd() -> Command {
        Command::CompanyCreate(NewCompany {
            name: "Acme".to_string(),
            code: "ACME".to_string(),
            description: None,
            address: None,
            phone: None,
            email: None,
            tax_code: None,
        })
    }

    fn employee_cmd(email: &str) -> Command {
        Command::EmployeeCreate(NewEmployee {
            employee_code: "EMP001".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            phone: None,
            date_of_birth: None,
            gender: None,
            address: None,
            identity_number: None,
            hire_date: None,
            position: None,
            job_title: None,
            base_salary: None,
            employee_type: None,
            department_id: None,
            team_id: None,
            manager_id: None,
            external_user_id: None,
        })
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let store = Store::new();
        let (next, outcome) = apply(&store, company_cmd()).unwrap();

        assert!(store.list_companies().is_empty());
        assert_eq!(next.list_companies().len(), 1);
        assert!(matches!(outcome, CommandOutcome::Created { .. }));
    }

    #[test]
    fn test_apply_error_produces_no_snapshot() {
        let store = Store::new();
        let result = apply(
            &store,
            Command::EmployeeDelete {
                employee_id: "missing".to_string(),
            },
        );
        assert!(matches!(result, Err(OrgDirError::EmployeeNotFound { .. })));
    }

    #[test]
    fn test_apply_chains_snapshots() {
        let store = Store::new();
        let (s1, _) = apply(&store, company_cmd()).unwrap();
        let (s2, outcome) = apply(&s1, employee_cmd("ada@example.com")).unwrap();

        let CommandOutcome::Created { id } = outcome else {
            panic!("expected Created");
        };
        assert!(s2.get_employee(&id).is_ok());
        assert!(s1.list_employees().is_empty());
    }
}
