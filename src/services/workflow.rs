//! Review workflows. A status change to `approved` or `rejected` closes the
//! review and stamps `completed_at`; any other status reopens it.

use time::OffsetDateTime;
use tracing::info;

use crate::model::{ReviewStatus, ReviewWorkflow};
use crate::services::ReviewError;
use crate::state::AppState;

/// All workflows, or only those on `drawing_id`. An empty id means no filter.
pub async fn list_workflows(state: &AppState, drawing_id: Option<&str>) -> Vec<ReviewWorkflow> {
    let drawing_id = drawing_id.filter(|d| !d.is_empty());
    let store = state.store.read().await;
    store
        .workflows
        .iter()
        .filter(|w| drawing_id.is_none_or(|d| w.drawing_id == d))
        .cloned()
        .collect()
}

/// # Errors
///
/// Returns `NotFound` if no workflow has this id.
pub async fn update_status(
    state: &AppState,
    workflow_id: &str,
    status: ReviewStatus,
) -> Result<ReviewWorkflow, ReviewError> {
    let mut store = state.store.write().await;
    let workflow = store
        .workflows
        .iter_mut()
        .find(|w| w.id == workflow_id)
        .ok_or_else(|| ReviewError::not_found("Workflow", workflow_id))?;

    workflow.status = status;
    workflow.completed_at = status.is_terminal().then(OffsetDateTime::now_utc);

    info!(id = %workflow_id, ?status, "workflow status changed");
    Ok(workflow.clone())
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;
