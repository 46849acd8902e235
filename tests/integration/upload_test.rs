//! Image uploads over HTTP.

use axum::http::StatusCode;

use hub_core::config::{AppConfig, StoreBackend};
use hub_core::error::ErrorKind;

use crate::helpers::TestApp;

const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n";

#[tokio::test]
async fn test_upload_and_serve_back() {
    let app = TestApp::new().await;

    let response = app.upload("file", "logo.png", "image/png", PNG_HEADER).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text());

    let filename = response.body["filename"].as_str().unwrap().to_string();
    let url = response.body["url"].as_str().unwrap().to_string();
    assert!(filename.ends_with(".png"));
    assert_eq!(url, format!("/uploads/{filename}"));
    assert!(app.dir.path().join("uploads").join(&filename).is_file());

    let served = app.request("GET", &url, None).await;
    assert_eq!(served.status, StatusCode::OK);
    assert_eq!(served.bytes, PNG_HEADER);
}

#[tokio::test]
async fn test_upload_named_html_is_served_as_image() {
    let app = TestApp::new().await;

    let response = app.upload("file", "x.html", "image/png", PNG_HEADER).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text());
    let url = response.body["url"].as_str().unwrap().to_string();
    assert!(url.ends_with(".png"), "{url}");

    let served = app.request("GET", &url, None).await;
    assert_eq!(served.status, StatusCode::OK);
    assert_eq!(served.header("content-type"), Some("image/png"));
}

#[tokio::test]
async fn test_upload_rejects_text() {
    let app = TestApp::new().await;
    let response = app.upload("file", "notes.txt", "text/plain", b"hello").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "UPLOAD_REJECTED");
    assert_eq!(
        response.body["message"],
        "Invalid file type. Allowed: PNG, JPG, SVG, WebP, GIF"
    );
}

#[tokio::test]
async fn test_upload_rejects_oversized_file() {
    let app = TestApp::new().await;
    let data = vec![0u8; 5 * 1024 * 1024 + 1];
    let response = app.upload("file", "huge.png", "image/png", &data).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "File too large. Max 5MB");
}

#[tokio::test]
async fn test_upload_over_body_limit() {
    let app = TestApp::new().await;
    let data = vec![0u8; 7 * 1024 * 1024];
    let response = app.upload("file", "huge.png", "image/png", &data).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "File too large. Max 5MB");
}

#[tokio::test]
async fn test_upload_missing_file() {
    let app = TestApp::new().await;

    let response = app.upload("other", "logo.png", "image/png", PNG_HEADER).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "No file provided");

    let response = app.request("POST", "/api/upload", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "No file provided");
}

#[tokio::test]
async fn test_root_public_prefix_is_rejected_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.store.backend = StoreBackend::File;
    config.store.file_path = dir.path().join("hubs.json").display().to_string();
    config.storage.local.root_path = dir.path().join("uploads").display().to_string();

    for prefix in ["/", "", "/api"] {
        config.storage.local.public_prefix = prefix.to_string();
        let err = hub_api::build_state(config.clone()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration, "{prefix}");
    }
}
