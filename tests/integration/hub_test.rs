//! Hub CRUD and reorder over HTTP.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_and_get_hub() {
    let app = TestApp::new().await;

    let created = app.create_hub(json!({ "eventName": "Test Event" })).await;
    assert_eq!(created["slug"], "test-event");

    let response = app.request("GET", "/api/hubs/test-event", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["eventName"], "Test Event");
    assert_eq!(response.body["blocks"], json!([]));
    assert_eq!(response.body["isPublished"], false);
    assert_eq!(response.body["sectionOrder"], json!(["sponsor", "hero", "blocks"]));
}

#[tokio::test]
async fn test_create_without_name_uses_fallback_slug() {
    let app = TestApp::new().await;
    let created = app.create_hub(json!({})).await;
    assert_eq!(created["slug"], "new-hub");
}

#[tokio::test]
async fn test_duplicate_slug_is_rejected() {
    let app = TestApp::new().await;
    app.create_hub(json!({ "eventName": "Finals", "heroTagline": "First" }))
        .await;

    let response = app
        .request("POST", "/api/hubs", Some(json!({ "eventName": "Finals", "heroTagline": "Second" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let stored = app.request("GET", "/api/hubs/finals", None).await;
    assert_eq!(stored.body["heroTagline"], "First");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .request_raw("POST", "/api/hubs", "application/json", b"{not json".to_vec())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app.request("POST", "/api/hubs", Some(json!([1, 2]))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_long_event_name_rejected_despite_mistyped_slug() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/hubs",
            Some(json!({ "eventName": "x".repeat(300), "slug": 7 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let listed = app.request("GET", "/api/hubs", None).await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn test_get_missing_hub() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/hubs/nope", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
    assert!(response.body["message"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn test_list_filters_by_query() {
    let app = TestApp::new().await;
    app.create_hub(json!({ "eventName": "Volleyverse" })).await;
    app.create_hub(json!({ "eventName": "Court Kings" })).await;

    let response = app.request("GET", "/api/hubs", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 2);

    let response = app.request("GET", "/api/hubs?q=VOLLEY", None).await;
    let hubs = response.body.as_array().unwrap();
    assert_eq!(hubs.len(), 1);
    assert_eq!(hubs[0]["slug"], "volleyverse");
}

#[tokio::test]
async fn test_update_replaces_fields_and_blocks() {
    let app = TestApp::new().await;
    app.create_hub_with_blocks("Cup", &["A", "B"], false).await;

    let response = app
        .request(
            "PUT",
            "/api/hubs/cup",
            Some(json!({ "heroTagline": "Game day", "blocks": [] })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["heroTagline"], "Game day");
    assert_eq!(response.body["blocks"], json!([]));

    let stored = app.request("GET", "/api/hubs/cup", None).await;
    assert_eq!(stored.body["blocks"], json!([]));
    assert_eq!(stored.body["eventName"], "Cup");
}

#[tokio::test]
async fn test_update_missing_hub() {
    let app = TestApp::new().await;
    let response = app
        .request("PUT", "/api/hubs/ghost", Some(json!({ "heroTagline": "x" })))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rename_slug() {
    let app = TestApp::new().await;
    app.create_hub(json!({ "eventName": "Old Name" })).await;
    app.create_hub(json!({ "eventName": "Taken" })).await;

    let response = app
        .request("PUT", "/api/hubs/old-name", Some(json!({ "slug": "taken" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("PUT", "/api/hubs/old-name", Some(json!({ "slug": "Not A Slug" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("PUT", "/api/hubs/old-name", Some(json!({ "slug": "new-name" })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["slug"], "new-name");

    let old = app.request("GET", "/api/hubs/old-name", None).await;
    assert_eq!(old.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_hub() {
    let app = TestApp::new().await;
    app.create_hub(json!({ "eventName": "Gone" })).await;

    let response = app.request("DELETE", "/api/hubs/gone", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true }));

    let response = app.request("DELETE", "/api/hubs/gone", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reorder_blocks() {
    let app = TestApp::new().await;
    app.create_hub_with_blocks("Order", &["A", "B", "C", "D"], false)
        .await;

    let response = app
        .request(
            "POST",
            "/api/hubs/order/reorder",
            Some(json!({ "target": "blocks", "from": 0, "to": 2 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let blocks = response.body["blocks"].as_array().unwrap();
    let titles: Vec<&str> = blocks.iter().map(|b| b["title"].as_str().unwrap()).collect();
    let orders: Vec<i64> = blocks.iter().map(|b| b["sortOrder"].as_i64().unwrap()).collect();
    assert_eq!(titles, ["B", "C", "A", "D"]);
    assert_eq!(orders, [0, 1, 2, 3]);

    let stored = app.request("GET", "/api/hubs/order", None).await;
    assert_eq!(stored.body["blocks"][2]["title"], "A");
}

#[tokio::test]
async fn test_reorder_sections_and_noop() {
    let app = TestApp::new().await;
    app.create_hub(json!({ "eventName": "Sections" })).await;

    let response = app
        .request(
            "POST",
            "/api/hubs/sections/reorder",
            Some(json!({ "target": "sections", "from": 2, "to": 0 })),
        )
        .await;
    assert_eq!(response.body["sectionOrder"], json!(["blocks", "sponsor", "hero"]));

    let response = app
        .request(
            "POST",
            "/api/hubs/sections/reorder",
            Some(json!({ "target": "sections", "from": 0, "to": 9 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["sectionOrder"], json!(["blocks", "sponsor", "hero"]));

    let response = app
        .request(
            "POST",
            "/api/hubs/sections/reorder",
            Some(json!({ "target": "sections", "from": -1, "to": 0 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["sectionOrder"], json!(["blocks", "sponsor", "hero"]));

    let response = app
        .request(
            "POST",
            "/api/hubs/sections/reorder",
            Some(json!({ "target": "pages", "from": 0, "to": 1 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["checks"]["store"]["backend"], "file");
    assert_eq!(response.body["checks"]["storage"]["backend"], "local");
}
