//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use hub_core::config::{AppConfig, DatabaseConfig, StoreBackend};
use hub_database::{DatabasePool, PgHubStore};

const BOUNDARY: &str = "hub-test-boundary";

/// A migrated PostgreSQL store, or `None` when `DATABASE_URL` is unset.
///
/// Tests that take this share one database, so each uses its own slugs.
pub async fn pg_store() -> Option<(PgHubStore, PgPool)> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
        return None;
    };

    let config = DatabaseConfig {
        url,
        max_connections: 4,
        min_connections: 0,
        ..Default::default()
    };
    let db = DatabasePool::connect(&config)
        .await
        .expect("Failed to connect to test database");
    hub_database::migration::run_migrations(db.pool())
        .await
        .expect("Failed to run migrations");

    let pool = db.into_pool();
    Some((PgHubStore::new(pool.clone()), pool))
}

/// A slug no other test run uses.
pub fn unique_slug(stem: &str) -> String {
    format!("{stem}-{}", &uuid::Uuid::new_v4().simple().to_string()[..8])
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Holds the store file and uploads for the lifetime of the test
    pub dir: TempDir,
}

/// A response with its body read
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub bytes: Vec<u8>,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
}

impl TestResponse {
    /// Body as UTF-8 text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// A header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    /// Create a new test application with empty storage
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.store.backend = StoreBackend::File;
        config.store.file_path = dir.path().join("hubs.json").display().to_string();
        config.storage.local.root_path = dir.path().join("uploads").display().to_string();

        let state = hub_api::build_state(config.clone())
            .await
            .expect("Failed to build app state");
        let router = hub_api::build_app(state);

        Self {
            router,
            config,
            dir,
        }
    }

    /// Send a JSON request
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a request with a raw body and content type
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", content_type)
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// POST a multipart form with one file field to `/api/upload`
    pub async fn upload(
        &self,
        field: &str,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> TestResponse {
        let mut body = Vec::with_capacity(data.len() + 256);
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        self.request_raw(
            "POST",
            "/api/upload",
            &format!("multipart/form-data; boundary={BOUNDARY}"),
            body,
        )
        .await
    }

    /// Create a hub and return its JSON
    pub async fn create_hub(&self, body: Value) -> Value {
        let response = self.request("POST", "/api/hubs", Some(body)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text());
        response.body
    }

    /// Create a hub with titled blocks, optionally published
    pub async fn create_hub_with_blocks(&self, name: &str, titles: &[&str], published: bool) -> Value {
        let blocks: Vec<Value> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                json!({
                    "id": format!("b{i}"),
                    "title": title,
                    "url": format!("https://example.com/{i}"),
                    "sortOrder": i,
                })
            })
            .collect();

        self.create_hub(json!({
            "eventName": name,
            "blocks": blocks,
            "isPublished": published,
        }))
        .await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            bytes,
            body,
        }
    }
}
