use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::commands::{NewTeam, TeamPatch};
use crate::errors::{OrgDirError, Result};
use crate::model::Team;
use crate::ops::Store;

/// Create a new team under a department
pub(crate) fn create_team(store: &mut Store, new: NewTeam) -> Result<String> {
    if new.name.trim().is_empty() {
        return Err(OrgDirError::InvalidName {
            reason: "team name must not be empty".to_string(),
        });
    }
    store.get_department(&new.department_id)?;
    if let Some(leader_id) = &new.leader_id {
        store.get_employee(leader_id)?;
    }

    let id = Uuid::now_v7().to_string();
    let mut team = Team::new(id.clone(), new.name, new.code, new.department_id);
    team.description = new.description;
    team.leader_id = new.leader_id;
    team.sort_order = new.sort_order;

    debug!(team_id = %id, "created team");
    store.insert_team(team);
    Ok(id)
}

/// Apply a partial update to a team
pub(crate) fn update_team(store: &mut Store, team_id: &str, patch: TeamPatch) -> Result<()> {
    store.get_team(team_id)?;
    if let Some(leader_id) = patch.leader_id.as_ref().and_then(|l| l.as_ref()) {
        store.get_employee(leader_id)?;
    }

    let team = store.get_team_mut(team_id)?;
    if let Some(name) = patch.name {
        if name.trim().is_empty() {
            return Err(OrgDirError::InvalidName {
                reason: "team name must not be empty".to_string(),
            });
        }
        team.name = name;
    }
    if let Some(code) = patch.code {
        team.code = code;
    }
    if let Some(description) = patch.description {
        team.description = Some(description);
    }
    if let Some(leader_id) = patch.leader_id {
        team.leader_id = leader_id;
    }
    if let Some(sort_order) = patch.sort_order {
        team.sort_order = sort_order;
    }
    if let Some(is_active) = patch.is_active {
        team.is_active = is_active;
    }
    team.updated_at = Utc::now();
    Ok(())
}

/// Delete a team, clearing the team link of any employees on it
pub(crate) fn delete_team(store: &mut Store, team_id: &str) -> Result<()> {
    store.get_team(team_id)?;

    for employee in store.employees.values_mut() {
        if employee.team_id.as_deref() == Some(team_id) {
            employee.team_id = None;
            employee.updated_at = Utc::now();
        }
    }
    store.teams.remove(team_id);
    debug!(team_id = %team_id, "deleted team");
    Ok(())
}
