use super::*;
use crate::state::test_helpers;

#[tokio::test]
async fn lists_seeded_users_in_order() {
    let state = test_helpers::seeded_state();
    let ids: Vec<String> = list_users(&state).await.into_iter().map(|u| u.id).collect();
    assert_eq!(ids, vec!["user-1", "user-2", "user-3"]);
}

#[tokio::test]
async fn current_user_is_first_user() {
    let state = test_helpers::seeded_state();
    assert_eq!(current_user(&state).await.unwrap().name, "Alex Chen");
}

#[tokio::test]
async fn resolve_author_falls_back_for_unknown_ids() {
    let state = test_helpers::seeded_state();
    let store = state.store.read().await;
    assert_eq!(resolve_author(&store, Some("user-3")).unwrap().id, "user-3");
    assert_eq!(resolve_author(&store, Some("ghost")).unwrap().id, "user-1");
    assert_eq!(resolve_author(&store, None).unwrap().id, "user-1");
}

#[tokio::test]
async fn empty_store_has_no_current_user() {
    let state = test_helpers::seeded_state();
    state.store.write().await.users.clear();
    assert!(matches!(current_user(&state).await, Err(ReviewError::NotFound { entity: "User", .. })));
}
