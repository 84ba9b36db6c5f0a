//! Org chart command
//!
//! Usage: orgdir org-chart [--company ID] [--json]

use clap::Args;
use std::path::Path;

use orgdir_api::DirectoryService;
use orgdir_core::queries::OrgChartNode;

#[derive(Debug, Args)]
pub struct OrgChartArgs {
    /// Company id; defaults to the first company
    #[arg(long, default_value = "")]
    pub company: String,

    /// Emit JSON instead of a tree
    #[arg(long)]
    pub json: bool,
}

pub fn execute(db: &Path, args: OrgChartArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = super::open_db(db)?;
    let response = DirectoryService::get_org_chart(&conn, &args.company);

    let Some(root) = response.root else {
        println!("No org chart available");
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&root)?);
        return Ok(());
    }

    print_node(&root, 0);
    Ok(())
}

fn print_node(node: &OrgChartNode, depth: usize) {
    println!("{}{}", "  ".repeat(depth), node.name);
    for child in &node.children {
        print_node(child, depth + 1);
    }
}
