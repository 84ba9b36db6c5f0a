//! Role assignment idempotency through the engine

use orgdir_core::commands::{Command, CommandOutcome, NewEmployee};
use orgdir_engine::execute_command;
use orgdir_store::{db, migrations};
use rusqlite::Connection;

fn prepared_conn() -> Connection {
    let mut conn = db::open_in_memory().unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn hire(conn: &mut Connection, email: &str) -> String {
    let outcome = execute_command(
        conn,
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
        }),
        None,
    )
    .unwrap();
    match outcome {
        CommandOutcome::Created { id } => id,
        other => panic!("expected Created, got {other:?}"),
    }
}

fn assign(conn: &mut Connection, employee_id: &str, role: &str) -> bool {
    let outcome = execute_command(
        conn,
        Command::RoleAssign {
            employee_id: employee_id.to_string(),
            role: role.to_string(),
            assigned_by: Some("admin".to_string()),
        },
        Some("admin"),
    )
    .unwrap();
    match outcome {
        CommandOutcome::RoleAssigned {
            already_assigned, ..
        } => already_assigned,
        other => panic!("expected RoleAssigned, got {other:?}"),
    }
}

#[test]
fn test_repeat_assignment_is_a_no_op() {
    let mut conn = prepared_conn();
    let id = hire(&mut conn, "ada@example.com");

    assert!(!assign(&mut conn, &id, "Manager"));
    assert!(assign(&mut conn, &id, "Manager"));

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM employee_roles", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_distinct_roles_accumulate() {
    let mut conn = prepared_conn();
    let id = hire(&mut conn, "ada@example.com");

    assert!(!assign(&mut conn, &id, "Manager"));
    assert!(!assign(&mut conn, &id, "Admin"));

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM employee_roles", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 2);
}

#[test]
fn test_assignment_to_unknown_employee_fails() {
    let mut conn = prepared_conn();
    let result = execute_command(
        &mut conn,
        Command::RoleAssign {
            employee_id: "ghost".to_string(),
            role: "Manager".to_string(),
            assigned_by: None,
        },
        None,
    );
    assert!(result.is_err());
}
