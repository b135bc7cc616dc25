use serde_json::{Value, json};

use crate::routes::test_server;

fn new_annotation(page: u32) -> Value {
    json!({
        "drawing_id": "draw-1",
        "version_id": "ver-1-2",
        "type": "rectangle",
        "content": "Column offset does not match grid",
        "position": { "x": 120.0, "y": 80.0, "width": 60.0, "height": 40.0, "page": page },
        "author_id": "user-2"
    })
}

#[tokio::test]
async fn create_then_list_by_page() {
    let server = test_server::spawn().await;

    let resp = server.client.post(server.url("/api/annotations")).json(&new_annotation(2)).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["id"], "ann-4");
    assert_eq!(created["type"], "rectangle");
    assert_eq!(created["author"]["name"], "Jordan Smith");
    assert_eq!(created["position"]["page"], 2);

    let page_one: Value = server
        .client
        .get(server.url("/api/drawings/draw-1/annotations?page=1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page_one.as_array().map(Vec::len), Some(3));

    let page_two: Value = server
        .client
        .get(server.url("/api/drawings/draw-1/annotations?version_id=ver-1-2&page=2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page_two.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn zero_area_position_is_unprocessable() {
    let server = test_server::spawn().await;
    let mut body = new_annotation(1);
    body["position"]["width"] = json!(0.0);
    body["position"]["height"] = json!(0.0);

    let resp = server.client.post(server.url("/api/annotations")).json(&body).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let detail: Value = resp.json().await.unwrap();
    assert!(detail["detail"].as_str().is_some_and(|d| d.contains("area")));
}

#[tokio::test]
async fn unknown_version_is_not_found() {
    let server = test_server::spawn().await;
    let mut body = new_annotation(1);
    body["version_id"] = json!("ver-1-9");
    let resp = server.client.post(server.url("/api/annotations")).json(&body).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn resolve_reply_and_delete() {
    let server = test_server::spawn().await;

    let resolved: Value = server
        .client
        .put(server.url("/api/annotations/ann-1/resolve"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(resolved["resolved"], true);

    let reopened: Value = server
        .client
        .put(server.url("/api/annotations/ann-1/unresolve"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reopened["resolved"], false);

    let replied: Value = server
        .client
        .post(server.url("/api/annotations/ann-1/replies"))
        .query(&[("content", "Fixed in rev 3"), ("author_id", "user-2")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(replied["replies"][1]["id"], "reply-2");
    assert_eq!(replied["replies"][1]["author"]["id"], "user-2");

    let deleted: Value = server
        .client
        .delete(server.url("/api/annotations/ann-1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(deleted, json!({ "message": "Annotation deleted successfully", "id": "ann-1" }));

    let again = server.client.delete(server.url("/api/annotations/ann-1")).send().await.unwrap();
    assert_eq!(again.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_reply_is_unprocessable() {
    let server = test_server::spawn().await;
    let resp = server
        .client
        .post(server.url("/api/annotations/ann-2/replies"))
        .query(&[("content", "  ")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn empty_version_filter_is_ignored() {
    let server = test_server::spawn().await;
    let listed: Value = server
        .client
        .get(server.url("/api/drawings/draw-1/annotations?version_id="))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn unknown_annotation_type_has_detail() {
    let server = test_server::spawn().await;
    let mut body = new_annotation(1);
    body["type"] = json!("circle");

    let resp = server.client.post(server.url("/api/annotations")).json(&body).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let detail: Value = resp.json().await.unwrap();
    assert!(detail["detail"].as_str().is_some_and(|d| d.contains("circle")));
}

#[tokio::test]
async fn reply_without_content_is_unprocessable() {
    let server = test_server::spawn().await;
    let resp = server.client.post(server.url("/api/annotations/ann-1/replies")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let detail: Value = resp.json().await.unwrap();
    assert!(detail["detail"].as_str().is_some_and(|d| d.contains("content")));
}

#[tokio::test]
async fn negative_origin_annotation_is_accepted() {
    let server = test_server::spawn().await;
    let mut body = new_annotation(1);
    body["position"]["x"] = json!(-5.0);

    let resp = server.client.post(server.url("/api/annotations")).json(&body).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}
