use super::*;

fn config_in(dir: &Path) -> ServerConfig {
    ServerConfig {
        upload_dir: dir.join("uploads"),
        public_base_url: "http://files.test".into(),
        ..ServerConfig::default()
    }
}

#[test]
fn extension_is_lowercased_and_kept() {
    assert_eq!(safe_extension("Plan-B2.PDF"), ".pdf");
    assert_eq!(safe_extension("archive.tar.gz"), ".gz");
}

#[test]
fn suspicious_extensions_are_dropped() {
    assert_eq!(safe_extension("README"), "");
    assert_eq!(safe_extension("weird.p$f"), "");
    assert_eq!(safe_extension("long.abcdefghijklmnop"), "");
    assert_eq!(safe_extension(".hidden"), "");
}

#[tokio::test]
async fn store_writes_file_and_builds_urls() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());

    let stored = store_upload(&config, "sheet.pdf", b"%PDF-1.7").await.unwrap();
    assert!(stored.filename.ends_with(".pdf"));
    assert_eq!(stored.original_filename, "sheet.pdf");
    assert_eq!(stored.url, format!("/uploads/{}", stored.filename));
    assert_eq!(stored.full_url, format!("http://files.test/uploads/{}", stored.filename));

    let on_disk = std::fs::read(config.upload_dir.join(&stored.filename)).unwrap();
    assert_eq!(on_disk, b"%PDF-1.7");
}

#[tokio::test]
async fn each_upload_gets_a_fresh_name() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    let a = store_upload(&config, "same.png", b"a").await.unwrap();
    let b = store_upload(&config, "same.png", b"b").await.unwrap();
    assert_ne!(a.filename, b.filename);
}

#[tokio::test]
async fn empty_upload_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    assert!(matches!(store_upload(&config, "x.pdf", b"").await, Err(ReviewError::Invalid(_))));
    assert!(!config.upload_dir.exists());
}
