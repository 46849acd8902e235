//! # hub-api
//!
//! HTTP layer for Interaction Hub built on Axum.
//!
//! Serves the admin JSON API under `/api`, uploaded images under
//! `/uploads`, and the server-rendered fan page at `/h/{slug}`. Errors
//! from every layer are mapped to HTTP responses once, in [`error`].

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
