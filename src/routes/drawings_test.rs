use serde_json::{Value, json};

use crate::routes::test_server;

#[tokio::test]
async fn projects_and_drawings_are_listed() {
    let server = test_server::spawn().await;

    let projects: Value = server.client.get(server.url("/api/projects")).send().await.unwrap().json().await.unwrap();
    assert_eq!(projects.as_array().map(Vec::len), Some(2));
    assert_eq!(projects[0]["drawings"].as_array().map(Vec::len), Some(2));

    let filtered: Value = server
        .client
        .get(server.url("/api/drawings?project_id=proj-2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(filtered, json!([]));
}

#[tokio::test]
async fn drawing_detail_and_versions() {
    let server = test_server::spawn().await;

    let drawing: Value = server.client.get(server.url("/api/drawings/draw-1")).send().await.unwrap().json().await.unwrap();
    assert_eq!(drawing["current_version"]["status"], "in_review");

    let versions: Value = server
        .client
        .get(server.url("/api/drawings/draw-1/versions"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(versions.as_array().map(Vec::len), Some(2));

    let missing = server.client.get(server.url("/api/drawings/draw-9/versions")).send().await.unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn posting_a_version_makes_it_current() {
    let server = test_server::spawn().await;

    let resp = server
        .client
        .post(server.url("/api/drawings/draw-2/versions"))
        .json(&json!({ "file_url": "/uploads/l15-v2.pdf", "changes_summary": "Moved column C4" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let version: Value = resp.json().await.unwrap();
    assert_eq!(version["id"], "ver-draw-2-2");
    assert_eq!(version["status"], "draft");
    assert_eq!(version["created_by"]["id"], "user-1");

    let drawing: Value = server.client.get(server.url("/api/drawings/draw-2")).send().await.unwrap().json().await.unwrap();
    assert_eq!(drawing["current_version"]["id"], "ver-draw-2-2");
}

#[tokio::test]
async fn empty_project_filter_is_ignored() {
    let server = test_server::spawn().await;
    let drawings: Value = server
        .client
        .get(server.url("/api/drawings?project_id="))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(drawings.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn malformed_version_body_has_detail() {
    let server = test_server::spawn().await;
    let resp = server
        .client
        .post(server.url("/api/drawings/draw-1/versions"))
        .json(&json!({ "changes_summary": "no file" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await.unwrap();
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("file_url")));
}
