//! Hub domain entities.

pub mod block;
pub mod model;
pub mod row;
pub mod section;
pub mod social;

pub use block::{AspectRatio, Block, BlockPatch};
pub use model::{Hub, HubUpdate};
pub use row::{BlockRow, HubRow};
pub use section::Section;
pub use social::{SocialLink, SocialPlatform};
