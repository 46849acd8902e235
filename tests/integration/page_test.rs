//! Fan-facing page rendering over HTTP.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_published_hub_renders_visible_blocks_in_order() {
    let app = TestApp::new().await;
    app.create_hub_with_blocks("Live Show", &["Vote", "Secret", "Shop"], true)
        .await;
    app.request(
        "PUT",
        "/api/hubs/live-show",
        Some(json!({
            "blocks": [
                { "id": "b0", "title": "Vote", "sortOrder": 0 },
                { "id": "b1", "title": "Secret", "sortOrder": 1, "isVisible": false },
                { "id": "b2", "title": "Shop", "sortOrder": 2, "badge": "NEW" }
            ]
        })),
    )
    .await;

    let response = app.request("GET", "/h/live-show", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header("content-type").unwrap().starts_with("text/html"));
    assert_eq!(response.header("x-frame-options"), Some("DENY"));
    assert!(response.header("content-security-policy").unwrap().contains("script-src 'none'"));

    let html = response.text();
    let vote = html.find("Vote").unwrap();
    let shop = html.find("Shop").unwrap();
    assert!(vote < shop);
    assert!(!html.contains("Secret"));
    assert!(html.contains("NEW"));
}

#[tokio::test]
async fn test_unpublished_hub_is_hidden_unless_previewed() {
    let app = TestApp::new().await;
    app.create_hub_with_blocks("Draft Night", &["Soon"], false).await;

    let response = app.request("GET", "/h/draft-night", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.text().contains("Hub not found"));

    let response = app.request("GET", "/h/draft-night?preview=true", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("Soon"));

    let response = app.request("GET", "/h/draft-night?preview=1", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/h/draft-night?preview=0", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_hub_page() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/h/nobody", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.header("content-type").unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn test_page_escapes_content() {
    let app = TestApp::new().await;
    app.create_hub(json!({
        "eventName": "Safe",
        "heroTagline": "<script>alert(1)</script>",
        "isPublished": true,
        "blocks": [{ "title": "x", "url": "javascript:alert(1)" }]
    }))
    .await;

    let html = app.request("GET", "/h/safe", None).await.text();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("javascript:"));
}

#[tokio::test]
async fn test_empty_hub_renders_empty_state() {
    let app = TestApp::new().await;
    app.create_hub(json!({ "eventName": "Empty", "isPublished": true }))
        .await;

    let response = app.request("GET", "/h/empty", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("Nothing here yet"));
}
