//! # hub-entity
//!
//! Domain models for Interaction Hub. A [`Hub`] is one branded landing page
//! made of ordered [`Block`]s. This crate also owns the pure logic around
//! those models: slug derivation, the normalization shim that accepts
//! legacy stored shapes, list reordering, and the editor draft.
//!
//! Database row types derive `sqlx::FromRow` and live in [`hub::row`].

pub mod draft;
pub mod hub;
pub mod normalize;
pub mod reorder;
pub mod slug;

pub use draft::HubDraft;
pub use hub::{AspectRatio, Block, BlockPatch, Hub, HubUpdate, Section, SocialLink, SocialPlatform};
pub use normalize::{normalize_hub, SchemaVersion};
