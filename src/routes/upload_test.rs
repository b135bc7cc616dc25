use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::routes::test_server;

#[tokio::test]
async fn upload_is_stored_and_served() {
    let server = test_server::spawn().await;

    let part = Part::bytes(b"%PDF-1.7 test".to_vec()).file_name("Level-B2.pdf");
    let resp = server
        .client
        .post(server.url("/api/upload"))
        .multipart(Form::new().part("file", part))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let stored: Value = resp.json().await.unwrap();
    let filename = stored["filename"].as_str().unwrap().to_owned();
    assert!(filename.ends_with(".pdf"));
    assert_eq!(stored["original_filename"], "Level-B2.pdf");
    assert!(server.uploads.path().join(&filename).exists());

    let served = server.client.get(server.url(&format!("/uploads/{filename}"))).send().await.unwrap();
    assert_eq!(served.status(), reqwest::StatusCode::OK);
    assert_eq!(served.bytes().await.unwrap().as_ref(), b"%PDF-1.7 test");
}

#[tokio::test]
async fn missing_file_field_is_unprocessable() {
    let server = test_server::spawn().await;
    let resp = server
        .client
        .post(server.url("/api/upload"))
        .multipart(Form::new().text("note", "no file here"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
}
