//! Manager permission check command
//!
//! Usage: orgdir check-permission <MANAGER_ID> <EMPLOYEE_ID>

use clap::Args;
use std::path::Path;

use orgdir_api::requests::ValidateManagerPermissionRequest;
use orgdir_api::DirectoryService;

#[derive(Debug, Args)]
pub struct PermissionArgs {
    /// Id of the acting manager
    pub manager_id: String,

    /// Id of the employee being acted on
    pub employee_id: String,
}

pub fn execute(db: &Path, args: PermissionArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = super::open_db(db)?;
    let response = DirectoryService::validate_manager_permission(
        &conn,
        &ValidateManagerPermissionRequest {
            manager_id: args.manager_id,
            employee_id: args.employee_id,
        },
    );

    if response.is_valid {
        println!("valid: {}", response.message);
    } else {
        println!("denied: {}", response.message);
    }
    Ok(())
}
