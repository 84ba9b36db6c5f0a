//! CLI subcommands

pub mod directory;
pub mod migrate;
pub mod org_chart;
pub mod permission;
pub mod seed;

use std::path::Path;

/// Open the database, creating parent directories and the schema on
/// first use
pub(crate) fn open_db(path: &Path) -> Result<rusqlite::Connection, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut conn = orgdir_store::db::open(path)?;
    orgdir_store::migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}
