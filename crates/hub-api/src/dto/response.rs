//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when every dependency is healthy, else `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Per-dependency checks.
    pub checks: HealthChecks,
}

/// Individual health checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthChecks {
    /// Hub store status.
    pub store: ComponentHealth,
    /// Upload storage status.
    pub storage: ComponentHealth,
}

/// Status of one dependency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// `ok` or `error`.
    pub status: String,
    /// Backend or provider name.
    pub backend: String,
    /// Failure detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always `true`.
    pub success: bool,
}
