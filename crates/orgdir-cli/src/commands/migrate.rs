//! Migrate command
//!
//! Usage: orgdir migrate [--db PATH]

use std::path::Path;

pub fn execute(db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let _conn = super::open_db(db)?;
    println!("Database ready at {}", db.display());
    Ok(())
}
