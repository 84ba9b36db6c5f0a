//! Seed parse and import against a real database

use orgdir_store::seed::{import_seed, parse_seed};
use orgdir_store::{db, load_store, migrations};

const SEED: &str = r#"
company:
  name: Acme
  code: ACME
  departments:
    - name: Engineering
      code: ENG
      teams:
        - name: Core
          code: CORE
          leader_email: grace@example.com
    - name: Platform
      code: PLAT
      parent: ENG
employees:
  - employee_code: EMP001
    first_name: Grace
    last_name: Hopper
    email: grace@example.com
    department: ENG
    team: CORE
    roles: [Manager, Admin]
  - employee_code: EMP002
    first_name: Ada
    last_name: Lovelace
    email: ada@example.com
    department: ENG
    team: CORE
    manager_email: grace@example.com
holidays:
  - name: New Year
    date: 2026-01-01
    is_recurring: true
"#;

#[test]
fn test_import_resolves_references() {
    let mut conn = db::open_in_memory().unwrap();
    migrations::apply_migrations(&mut conn).unwrap();

    let seed = parse_seed(SEED).unwrap();
    let stats = import_seed(&mut conn, &seed).unwrap();

    assert_eq!(stats.companies, 1);
    assert_eq!(stats.departments, 2);
    assert_eq!(stats.teams, 1);
    assert_eq!(stats.employees, 2);
    assert_eq!(stats.roles, 2);
    assert_eq!(stats.holidays, 1);

    let store = load_store(&conn).unwrap();
    let ada = store.find_employee_by_email("ada@example.com").unwrap();
    let grace = store.find_employee_by_email("grace@example.com").unwrap();
    assert_eq!(ada.manager_id.as_deref(), Some(grace.id.as_str()));

    let team = store.get_team(ada.team_id.as_deref().unwrap()).unwrap();
    assert_eq!(team.leader_id.as_deref(), Some(grace.id.as_str()));

    let platform = store
        .list_departments()
        .into_iter()
        .find(|d| d.code == "PLAT")
        .unwrap();
    let engineering = store.get_department(
        platform.parent_department_id.as_deref().unwrap(),
    );
    assert_eq!(engineering.unwrap().code, "ENG");
}

#[test]
fn test_import_is_atomic() {
    let mut conn = db::open_in_memory().unwrap();
    migrations::apply_migrations(&mut conn).unwrap();

    let seed = parse_seed(SEED).unwrap();
    import_seed(&mut conn, &seed).unwrap();

    // Importing the same seed again collides on the unique email index
    // and must leave the first import untouched
    let second = import_seed(&mut conn, &seed);
    assert!(second.is_err());

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 2);
}
