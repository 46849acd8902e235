//! Database row types for the `hubs` and `blocks` tables.
//!
//! Columns are snake_case; the conversion into [`Hub`] is the only place the
//! database shape meets the camelCase domain model.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use super::block::{AspectRatio, Block};
use super::model::Hub;
use crate::normalize;

/// A row of the `hubs` table.
#[derive(Debug, Clone, FromRow)]
pub struct HubRow {
    /// Surrogate key referenced by `blocks.hub_id`.
    pub id: Uuid,
    /// Unique slug.
    pub slug: String,
    /// Event name.
    pub event_name: String,
    /// Logo image.
    pub logo_url: String,
    /// Hero image.
    pub hero_image_url: String,
    /// Sponsor banner image.
    pub sponsor_banner_url: String,
    /// Sponsor link.
    pub sponsor_link: String,
    /// Block color.
    pub block_color: String,
    /// Background color.
    pub background_color: String,
    /// Heading font.
    pub header_font: String,
    /// Body font.
    pub body_font: String,
    /// Custom font stylesheet.
    pub custom_font_url: String,
    /// Hero headline.
    pub hero_tagline: String,
    /// Hero subtext.
    pub hero_subtext: String,
    /// JSONB array of `{platform, url}`.
    pub social_links: Value,
    /// JSONB array of section names.
    pub section_order: Value,
    /// Publish flag.
    pub is_published: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last save time.
    pub updated_at: DateTime<Utc>,
}

impl HubRow {
    /// Assemble the domain hub from this row and its block rows.
    ///
    /// Blocks are expected in `sort_order` order; they are renumbered so the
    /// result always has contiguous positions.
    pub fn into_hub(self, blocks: Vec<BlockRow>) -> Hub {
        let mut blocks: Vec<Block> = blocks.into_iter().map(BlockRow::into_block).collect();
        crate::reorder::sort_and_renumber(&mut blocks);

        Hub {
            slug: self.slug,
            event_name: self.event_name,
            logo_url: self.logo_url,
            hero_image_url: self.hero_image_url,
            sponsor_banner_url: self.sponsor_banner_url,
            sponsor_link: self.sponsor_link,
            block_color: self.block_color,
            background_color: self.background_color,
            header_font: self.header_font,
            body_font: self.body_font,
            custom_font_url: self.custom_font_url,
            hero_tagline: self.hero_tagline,
            hero_subtext: self.hero_subtext,
            social_links: normalize::social_links_from_value(&self.social_links),
            blocks,
            section_order: normalize::section_order_from_value(&self.section_order),
            is_published: self.is_published,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A row of the `blocks` table.
#[derive(Debug, Clone, FromRow)]
pub struct BlockRow {
    /// Owning hub.
    pub hub_id: Uuid,
    /// Block id, unique per hub.
    pub id: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Image reference.
    pub image_url: String,
    /// Destination link.
    pub url: String,
    /// Aspect ratio preset as stored (`1:1`, `16:9`, `9:16`).
    pub aspect_ratio: String,
    /// Accent color.
    pub accent_color: String,
    /// Optional badge.
    pub badge: Option<String>,
    /// Visibility flag.
    pub is_visible: bool,
    /// Position within the hub.
    pub sort_order: i32,
}

impl BlockRow {
    /// Convert into the domain block.
    pub fn into_block(self) -> Block {
        Block {
            id: self.id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            url: self.url,
            aspect_ratio: AspectRatio::parse(&self.aspect_ratio).unwrap_or_default(),
            accent_color: self.accent_color,
            badge: self.badge.filter(|b| !b.is_empty()),
            is_visible: self.is_visible,
            sort_order: self.sort_order,
        }
    }
}
