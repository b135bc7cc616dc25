//! Project listing. Drawings and team members are joined in on every read so
//! new versions show up without touching the project record.

use crate::model::{Project, ProjectRecord};
use crate::services::ReviewError;
use crate::state::{AppState, ReviewStore};

fn assemble(store: &ReviewStore, record: &ProjectRecord) -> Project {
    Project {
        id: record.id.clone(),
        name: record.name.clone(),
        description: record.description.clone(),
        drawings: store
            .drawings
            .iter()
            .filter(|d| d.project_id == record.id)
            .cloned()
            .collect(),
        team_members: record
            .team_member_ids
            .iter()
            .filter_map(|id| store.users.iter().find(|u| &u.id == id))
            .cloned()
            .collect(),
        created_at: record.created_at,
    }
}

pub async fn list_projects(state: &AppState) -> Vec<Project> {
    let store = state.store.read().await;
    store.projects.iter().map(|p| assemble(&store, p)).collect()
}

/// # Errors
///
/// Returns `NotFound` if no project has this id.
pub async fn get_project(state: &AppState, project_id: &str) -> Result<Project, ReviewError> {
    let store = state.store.read().await;
    store
        .projects
        .iter()
        .find(|p| p.id == project_id)
        .map(|p| assemble(&store, p))
        .ok_or_else(|| ReviewError::not_found("Project", project_id))
}

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;
