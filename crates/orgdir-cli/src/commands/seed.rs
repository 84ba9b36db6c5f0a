//! Seed import command
//!
//! Usage: orgdir seed import <PATH>

use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file into the database
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to a seed YAML file
    pub path: PathBuf,
}

pub fn execute(db: &Path, args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(db, import_args),
    }
}

fn execute_import(db: &Path, args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = super::open_db(db)?;

    println!("Importing {}...", args.path.display());
    let yaml = std::fs::read_to_string(&args.path)?;
    let seed = orgdir_store::seed::parse_seed(&yaml)?;
    let stats = orgdir_store::seed::import_seed(&mut conn, &seed)?;

    println!(
        "Imported {} departments, {} teams, {} employees, {} holidays",
        stats.departments, stats.teams, stats.employees, stats.holidays
    );
    Ok(())
}
