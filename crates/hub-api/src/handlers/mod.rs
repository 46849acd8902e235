//! Route handlers.

pub mod health;
pub mod hub;
pub mod page;
pub mod upload;
