//! orgdir CLI
//!
//! Command-line interface for the organizational directory

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "orgdir")]
#[command(about = "Organizational directory management", long_about = None)]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, global = true, default_value = ".orgdir/store.db")]
    db: std::path::PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    Migrate,
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// Browse the employee directory
    Directory(commands::directory::DirectoryArgs),
    /// Print the org chart
    OrgChart(commands::org_chart::OrgChartArgs),
    /// Check whether a manager may act for an employee
    CheckPermission(commands::permission::PermissionArgs),
}

fn main() {
    orgdir_core::logging::init(orgdir_core::logging::Profile::Development);
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Migrate => commands::migrate::execute(&cli.db),
        Commands::Seed(args) => commands::seed::execute(&cli.db, args),
        Commands::Directory(args) => commands::directory::execute(&cli.db, args),
        Commands::OrgChart(args) => commands::org_chart::execute(&cli.db, args),
        Commands::CheckPermission(args) => commands::permission::execute(&cli.db, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
