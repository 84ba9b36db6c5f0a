use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{OrgDirError, Result};
use crate::ops::Store;
use crate::queries::views::{employee_view, EmployeeView};

/// What a node in the org chart represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrgNodeType {
    Company,
    Department,
    Team,
    Employee,
}

/// One node of the materialized org chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgChartNode {
    pub id: String,
    pub name: String,
    pub node_type: OrgNodeType,
    pub parent_id: Option<String>,
    pub employee: Option<EmployeeView>,
    pub children: Vec<OrgChartNode>,
}

impl OrgChartNode {
    fn branch(id: String, name: String, node_type: OrgNodeType, parent_id: Option<String>) -> Self {
        Self {
            id,
            name,
            node_type,
            parent_id,
            employee: None,
            children: Vec::new(),
        }
    }

    /// Total node count of this subtree, the node itself included
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(OrgChartNode::size).sum::<usize>()
    }
}

/// Materialize the org chart of one company.
///
/// Three containment tiers: company, its departments (nested recursively
/// by parent link), teams, then team members as leaf nodes carrying the
/// resolved employee view. Employees without a team do not appear; the
/// chart shows the containment tree, not the reporting graph.
pub fn org_chart(store: &Store, company_id: &str) -> Result<OrgChartNode> {
    let company = store.get_company(company_id)?;
    let mut root = OrgChartNode::branch(
        company.id.clone(),
        company.name.clone(),
        OrgNodeType::Company,
        None,
    );
    for department in store.departments_of_company(company_id) {
        // Departments with a parent appear under that parent, not the root
        if department.parent_department_id.is_some() {
            continue;
        }
        root.children.push(department_subtree(store, &department.id)?);
    }
    debug!(company_id = %company_id, nodes = root.size(), "materialized org chart");
    Ok(root)
}

/// Materialize the org chart of the snapshot's first company by id.
///
/// Convenience for single-tenant deployments.
pub fn org_chart_first_company(store: &Store) -> Result<OrgChartNode> {
    let first = store
        .list_companies()
        .first()
        .map(|c| c.id.clone())
        .ok_or_else(|| OrgDirError::CompanyNotFound {
            company_id: "(none)".to_string(),
        })?;
    org_chart(store, &first)
}

fn department_subtree(store: &Store, department_id: &str) -> Result<OrgChartNode> {
    let department = store.get_department(department_id)?;
    let mut node = OrgChartNode::branch(
        department.id.clone(),
        department.name.clone(),
        OrgNodeType::Department,
        Some(department.parent_department_id.clone().unwrap_or_else(|| department.company_id.clone())),
    );

    for child in store.child_departments(department_id) {
        node.children.push(department_subtree(store, &child.id)?);
    }
    for team in store.teams_of_department(department_id) {
        let mut team_node = OrgChartNode::branch(
            team.id.clone(),
            team.name.clone(),
            OrgNodeType::Team,
            Some(department.id.clone()),
        );
        for member in store.employees_of_team(&team.id) {
            team_node.children.push(OrgChartNode {
                id: member.id.clone(),
                name: member.full_name(),
                node_type: OrgNodeType::Employee,
                parent_id: Some(team.id.clone()),
                employee: Some(employee_view(store, member)),
                children: Vec::new(),
            });
        }
        node.children.push(team_node);
    }
    Ok(node)
}
