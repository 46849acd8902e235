//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use hub_core::config::AppConfig;
use hub_service::{HubService, UploadService};

/// Shared dependencies, passed to every handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Hub CRUD, reorder, and publishing.
    pub hub_service: Arc<HubService>,
    /// Image uploads.
    pub upload_service: Arc<UploadService>,
}
