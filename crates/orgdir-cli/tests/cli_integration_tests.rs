//! CLI integration tests
//!
//! Run the built binary end to end against a scratch database.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

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
employees:
  - employee_code: EMP001
    first_name: Ada
    last_name: Lovelace
    email: ada@example.com
    department: ENG
    team: CORE
"#;

fn orgdir() -> Command {
    Command::new(env!("CARGO_BIN_EXE_orgdir"))
}

#[test]
fn test_migrate_creates_database() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store.db");

    let output = orgdir()
        .args(["--db", db_path.to_str().unwrap(), "migrate"])
        .output()
        .expect("failed to execute CLI");

    assert!(output.status.success(), "{output:?}");
    assert!(db_path.exists());
}

#[test]
fn test_seed_then_directory() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store.db");
    let seed_path = temp_dir.path().join("seed.yaml");
    fs::write(&seed_path, SEED).unwrap();

    let import = orgdir()
        .args([
            "--db",
            db_path.to_str().unwrap(),
            "seed",
            "import",
            seed_path.to_str().unwrap(),
        ])
        .output()
        .expect("failed to execute CLI");
    assert!(import.status.success(), "{import:?}");

    let listing = orgdir()
        .args(["--db", db_path.to_str().unwrap(), "directory"])
        .output()
        .expect("failed to execute CLI");
    assert!(listing.status.success(), "{listing:?}");
    let stdout = String::from_utf8_lossy(&listing.stdout);
    assert!(stdout.contains("Ada Lovelace"), "{stdout}");
}

#[test]
fn test_org_chart_prints_tree() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store.db");
    let seed_path = temp_dir.path().join("seed.yaml");
    fs::write(&seed_path, SEED).unwrap();

    orgdir()
        .args([
            "--db",
            db_path.to_str().unwrap(),
            "seed",
            "import",
            seed_path.to_str().unwrap(),
        ])
        .output()
        .expect("failed to execute CLI");

    let chart = orgdir()
        .args(["--db", db_path.to_str().unwrap(), "org-chart"])
        .output()
        .expect("failed to execute CLI");
    assert!(chart.status.success(), "{chart:?}");
    let stdout = String::from_utf8_lossy(&chart.stdout);
    assert!(stdout.contains("Acme"), "{stdout}");
    assert!(stdout.contains("Engineering"), "{stdout}");
    assert!(stdout.contains("Core"), "{stdout}");
}

#[test]
fn test_bad_seed_path_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store.db");

    let output = orgdir()
        .args([
            "--db",
            db_path.to_str().unwrap(),
            "seed",
            "import",
            "missing.yaml",
        ])
        .output()
        .expect("failed to execute CLI");
    assert!(!output.status.success());
}
