//! # hub-database
//!
//! Persistence for hubs. [`HubStore`] is the single seam the service layer
//! talks to; it is implemented by a PostgreSQL repository and by a flat
//! JSON file store. [`open_store`] picks one from configuration.

pub mod connection;
pub mod flatfile;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use flatfile::JsonFileHubStore;
pub use repositories::PgHubStore;
pub use store::{open_store, HubStore};
