//! Command execution against a real database: create, update, delete,
//! and the audit trail.

use orgdir_core::commands::{
    Command, CommandOutcome, EmployeePatch, NewCompany, NewDepartment, NewEmployee, NewTeam,
};
use orgdir_engine::execute_command;
use orgdir_engine::queries;
use orgdir_store::repo::SqliteRepo;
use orgdir_store::{db, migrations};
use rusqlite::Connection;

fn prepared_conn() -> Connection {
    let mut conn = db::open_in_memory().unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn created_id(outcome: CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Created { id } => id,
        other => panic!("expected Created, got {other:?}"),
    }
}

fn new_employee(email: &str, code: &str) -> NewEmployee {
    NewEmployee {
        employee_code: code.to_string(),
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
    }
}

#[test]
fn test_create_then_query_employee() {
    let mut conn = prepared_conn();
    let outcome = execute_command(
        &mut conn,
        Command::EmployeeCreate(new_employee("ada@example.com", "EMP001")),
        Some("admin"),
    )
    .unwrap();
    let id = created_id(outcome);

    let view = queries::employee_by_id(&conn, &id).unwrap().unwrap();
    assert_eq!(view.email, "ada@example.com");
    assert_eq!(view.full_name, "Ada Lovelace");
}

#[test]
fn test_duplicate_email_rejected_and_rolled_back() {
    let mut conn = prepared_conn();
    execute_command(
        &mut conn,
        Command::EmployeeCreate(new_employee("ada@example.com", "EMP001")),
        None,
    )
    .unwrap();

    let result = execute_command(
        &mut conn,
        Command::EmployeeCreate(new_employee("ADA@example.com", "EMP002")),
        None,
    );
    assert!(result.is_err());

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_partial_update_persists_only_named_fields() {
    let mut conn = prepared_conn();
    let id = created_id(
        execute_command(
            &mut conn,
            Command::EmployeeCreate(new_employee("ada@example.com", "EMP001")),
            None,
        )
        .unwrap(),
    );

    let patch = EmployeePatch {
        job_title: Some("Engineer".to_string()),
        ..EmployeePatch::default()
    };
    execute_command(
        &mut conn,
        Command::EmployeeUpdate {
            employee_id: id.clone(),
            patch,
        },
        None,
    )
    .unwrap();

    let view = queries::employee_by_id(&conn, &id).unwrap().unwrap();
    assert_eq!(view.job_title.as_deref(), Some("Engineer"));
    assert_eq!(view.email, "ada@example.com");
}

#[test]
fn test_delete_severs_references_in_database() {
    let mut conn = prepared_conn();

    let company_id = created_id(
        execute_command(
            &mut conn,
            Command::CompanyCreate(NewCompany {
                name: "Acme".to_string(),
                code: "ACME".to_string(),
                description: None,
                address: None,
                phone: None,
                email: None,
                tax_code: None,
            }),
            None,
        )
        .unwrap(),
    );
    let department_id = created_id(
        execute_command(
            &mut conn,
            Command::DepartmentCreate(NewDepartment {
                name: "Engineering".to_string(),
                code: "ENG".to_string(),
                description: None,
                company_id,
                manager_id: None,
                parent_department_id: None,
                sort_order: 0,
            }),
            None,
        )
        .unwrap(),
    );

    let manager_id = created_id(
        execute_command(
            &mut conn,
            Command::EmployeeCreate(new_employee("boss@example.com", "EMP001")),
            None,
        )
        .unwrap(),
    );
    let team_id = created_id(
        execute_command(
            &mut conn,
            Command::TeamCreate(NewTeam {
                name: "Core".to_string(),
                code: "CORE".to_string(),
                description: None,
                department_id,
                leader_id: Some(manager_id.clone()),
                sort_order: 0,
            }),
            None,
        )
        .unwrap(),
    );
    let mut report = new_employee("report@example.com", "EMP002");
    report.manager_id = Some(manager_id.clone());
    let report_id = created_id(
        execute_command(&mut conn, Command::EmployeeCreate(report), None).unwrap(),
    );

    execute_command(
        &mut conn,
        Command::EmployeeDelete {
            employee_id: manager_id.clone(),
        },
        None,
    )
    .unwrap();

    let report = SqliteRepo::get_employee(&conn, &report_id).unwrap().unwrap();
    assert!(report.manager_id.is_none());
    let team = SqliteRepo::get_team(&conn, &team_id).unwrap().unwrap();
    assert!(team.leader_id.is_none());
    assert!(SqliteRepo::get_employee(&conn, &manager_id).unwrap().is_none());
}

#[test]
fn test_audit_trail_records_old_and_new() {
    let mut conn = prepared_conn();
    let id = created_id(
        execute_command(
            &mut conn,
            Command::EmployeeCreate(new_employee("ada@example.com", "EMP001")),
            Some("admin"),
        )
        .unwrap(),
    );
    execute_command(
        &mut conn,
        Command::EmployeeUpdate {
            employee_id: id.clone(),
            patch: EmployeePatch {
                job_title: Some("Engineer".to_string()),
                ..EmployeePatch::default()
            },
        },
        Some("admin"),
    )
    .unwrap();

    let trail = SqliteRepo::audit_for_entity(&conn, "Employee", &id).unwrap();
    assert_eq!(trail.len(), 2);

    let create = trail.iter().find(|e| e.action == "employee_create").unwrap();
    assert!(create.old_values.is_none());
    assert!(create.new_values.is_some());
    assert_eq!(create.performed_by.as_deref(), Some("admin"));

    let update = trail.iter().find(|e| e.action == "employee_update").unwrap();
    assert!(update.old_values.as_deref().unwrap().contains("ada@example.com"));
    assert!(update.new_values.as_deref().unwrap().contains("Engineer"));
}
