//! Project routes.

use axum::extract::{Path, State};
use axum::response::Json;

use crate::model::Project;
use crate::routes::ApiResult;
use crate::services::project;
use crate::state::AppState;

/// `GET /api/projects`: all projects with their drawings and team.
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(project::list_projects(&state).await)
}

/// `GET /api/projects/:id`
pub async fn get_project(State(state): State<AppState>, Path(project_id): Path<String>) -> ApiResult<Project> {
    Ok(Json(project::get_project(&state, &project_id).await?))
}
