//! Directory browsing command
//!
//! Usage: orgdir directory [--department ID] [--team ID] [--search TERM]
//!        [--page N] [--page-size N] [--json]

use clap::Args;
use std::path::Path;

use orgdir_api::requests::GetEmployeesRequest;
use orgdir_api::DirectoryService;

#[derive(Debug, Args)]
pub struct DirectoryArgs {
    /// Restrict to one department id
    #[arg(long, default_value = "")]
    pub department: String,

    /// Restrict to one team id
    #[arg(long, default_value = "")]
    pub team: String,

    /// Substring match on first name, last name, or email
    #[arg(long, default_value = "")]
    pub search: String,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: i32,

    /// Rows per page
    #[arg(long, default_value_t = 10)]
    pub page_size: i32,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn execute(db: &Path, args: DirectoryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = super::open_db(db)?;
    let response = DirectoryService::get_employees(
        &conn,
        &GetEmployeesRequest {
            department_id: args.department,
            team_id: args.team,
            search: args.search,
            page: args.page,
            page_size: args.page_size,
        },
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    for employee in &response.employees {
        println!(
            "{:<38} {:<24} {:<28} {}",
            employee.id,
            employee.full_name,
            employee.email,
            employee.department_name.as_deref().unwrap_or("-"),
        );
    }
    println!(
        "page {}/{} ({} total)",
        response.page,
        (response.total_count as f64 / f64::from(response.page_size.max(1))).ceil() as i64,
        response.total_count
    );
    Ok(())
}
