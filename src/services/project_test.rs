use super::*;
use crate::services::drawing::{NewVersion, create_version};
use crate::state::test_helpers;

#[tokio::test]
async fn projects_join_drawings_and_team() {
    let state = test_helpers::seeded_state();
    let projects = list_projects(&state).await;
    assert_eq!(projects.len(), 2);

    let bridge = &projects[0];
    assert_eq!(bridge.id, "proj-1");
    assert_eq!(bridge.drawings.len(), 2);
    assert_eq!(bridge.team_members.len(), 3);

    let tower = &projects[1];
    assert!(tower.drawings.is_empty());
    assert_eq!(tower.team_members.len(), 2);
}

#[tokio::test]
async fn new_versions_appear_in_project_reads() {
    let state = test_helpers::seeded_state();
    let new = NewVersion { file_url: "/uploads/v3.pdf".into(), changes_summary: None, created_by_id: None };
    create_version(&state, "draw-1", new).await.unwrap();

    let project = get_project(&state, "proj-1").await.unwrap();
    let drawing = project.drawings.iter().find(|d| d.id == "draw-1").unwrap();
    assert_eq!(drawing.current_version.version_number, 3);
}

#[tokio::test]
async fn unknown_project_is_not_found() {
    let state = test_helpers::seeded_state();
    let err = get_project(&state, "proj-9").await.unwrap_err();
    assert_eq!(err.to_string(), "Project not found");
}
