//! PostgreSQL repository implementations.

pub mod hub;

pub use hub::PgHubStore;
