//! Hub entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::block::Block;
use super::section::Section;
use super::social::SocialLink;
use crate::reorder;

/// Event name given to hubs created without one.
pub const DEFAULT_EVENT_NAME: &str = "New Event";
/// Block background color used when a hub doesn't declare one.
pub const DEFAULT_BLOCK_COLOR: &str = "#FF10A8";
/// Page background color used when a hub doesn't declare one.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#0A0A0F";
/// Font family used when a hub doesn't declare one.
pub const DEFAULT_FONT: &str = "Outfit";

/// A single branded landing page configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hub {
    /// Unique URL-safe identifier.
    pub slug: String,
    /// Display name of the event.
    pub event_name: String,
    /// Logo image reference.
    pub logo_url: String,
    /// Full-width hero background image.
    pub hero_image_url: String,
    /// Sponsor banner image.
    pub sponsor_banner_url: String,
    /// Where the sponsor banner links to.
    pub sponsor_link: String,
    /// Background color of block captions.
    pub block_color: String,
    /// Page background color.
    pub background_color: String,
    /// Font family for headings.
    pub header_font: String,
    /// Font family for body text.
    pub body_font: String,
    /// Optional stylesheet URL for a custom font.
    pub custom_font_url: String,
    /// Hero headline.
    pub hero_tagline: String,
    /// Hero supporting text.
    pub hero_subtext: String,
    /// Footer social links.
    pub social_links: Vec<SocialLink>,
    /// Content blocks in display order.
    pub blocks: Vec<Block>,
    /// Order of the page sections.
    pub section_order: Vec<Section>,
    /// Whether the fan-facing page is live.
    pub is_published: bool,
    /// When the hub was created.
    pub created_at: DateTime<Utc>,
    /// When the hub was last saved.
    pub updated_at: DateTime<Utc>,
}

impl Default for Hub {
    fn default() -> Self {
        Self {
            slug: String::new(),
            event_name: DEFAULT_EVENT_NAME.to_string(),
            logo_url: String::new(),
            hero_image_url: String::new(),
            sponsor_banner_url: String::new(),
            sponsor_link: String::new(),
            block_color: DEFAULT_BLOCK_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            header_font: DEFAULT_FONT.to_string(),
            body_font: DEFAULT_FONT.to_string(),
            custom_font_url: String::new(),
            hero_tagline: String::new(),
            hero_subtext: String::new(),
            social_links: Vec::new(),
            blocks: Vec::new(),
            section_order: Section::default_order(),
            is_published: false,
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
        }
    }
}

impl Hub {
    /// Create a hub with default branding.
    pub fn new(slug: impl Into<String>, event_name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            event_name: event_name.into(),
            ..Self::default()
        }
    }

    /// Blocks that should be rendered, in display order.
    pub fn visible_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.is_visible)
    }

    /// Find a block by id.
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Move a block from one position to another.
    ///
    /// Returns `false` (and leaves the hub untouched) when the move is a
    /// no-op or either index is out of range.
    pub fn reorder_blocks(&mut self, from: usize, to: usize) -> bool {
        if !reorder::is_effective_move(self.blocks.len(), from, to) {
            return false;
        }
        self.blocks = reorder::reorder_blocks(&self.blocks, from, to);
        true
    }

    /// Move a page section from one position to another.
    pub fn reorder_sections(&mut self, from: usize, to: usize) -> bool {
        if !reorder::is_effective_move(self.section_order.len(), from, to) {
            return false;
        }
        self.section_order = reorder::move_item(&self.section_order, from, to);
        true
    }

    /// Apply an update. Present fields replace the current values; a
    /// present block list replaces the whole block set. An empty slug is
    /// ignored.
    pub fn apply(&mut self, update: HubUpdate) {
        let HubUpdate {
            slug,
            event_name,
            logo_url,
            hero_image_url,
            sponsor_banner_url,
            sponsor_link,
            block_color,
            background_color,
            header_font,
            body_font,
            custom_font_url,
            hero_tagline,
            hero_subtext,
            social_links,
            blocks,
            section_order,
            is_published,
        } = update;

        macro_rules! set {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = $field { self.$field = value; })*
            };
        }

        if let Some(slug) = slug.filter(|s| !s.is_empty()) {
            self.slug = slug;
        }
        set!(
            event_name,
            logo_url,
            hero_image_url,
            sponsor_banner_url,
            sponsor_link,
            block_color,
            background_color,
            header_font,
            body_font,
            custom_font_url,
            hero_tagline,
            hero_subtext,
            social_links,
            is_published,
        );

        if let Some(mut blocks) = blocks {
            reorder::sort_and_renumber(&mut blocks);
            self.blocks = blocks;
        }
        if let Some(order) = section_order {
            self.section_order = Section::complete_order(order);
        }
    }
}

/// Update payload for a hub. `None` fields are left untouched.
///
/// The editor always sends every field (full-document replacement), but the
/// persistence layer accepts partial updates as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubUpdate {
    /// New slug (rename).
    pub slug: Option<String>,
    /// New event name.
    pub event_name: Option<String>,
    /// New logo.
    pub logo_url: Option<String>,
    /// New hero image.
    pub hero_image_url: Option<String>,
    /// New sponsor banner.
    pub sponsor_banner_url: Option<String>,
    /// New sponsor link.
    pub sponsor_link: Option<String>,
    /// New block color.
    pub block_color: Option<String>,
    /// New background color.
    pub background_color: Option<String>,
    /// New heading font.
    pub header_font: Option<String>,
    /// New body font.
    pub body_font: Option<String>,
    /// New custom font stylesheet.
    pub custom_font_url: Option<String>,
    /// New hero headline.
    pub hero_tagline: Option<String>,
    /// New hero subtext.
    pub hero_subtext: Option<String>,
    /// Replacement social links.
    pub social_links: Option<Vec<SocialLink>>,
    /// Replacement block set.
    pub blocks: Option<Vec<Block>>,
    /// Replacement section order.
    pub section_order: Option<Vec<Section>>,
    /// New publish state.
    pub is_published: Option<bool>,
}

impl HubUpdate {
    /// A full-document update carrying every field of `hub`.
    pub fn replace_with(hub: &Hub) -> Self {
        Self {
            slug: Some(hub.slug.clone()),
            event_name: Some(hub.event_name.clone()),
            logo_url: Some(hub.logo_url.clone()),
            hero_image_url: Some(hub.hero_image_url.clone()),
            sponsor_banner_url: Some(hub.sponsor_banner_url.clone()),
            sponsor_link: Some(hub.sponsor_link.clone()),
            block_color: Some(hub.block_color.clone()),
            background_color: Some(hub.background_color.clone()),
            header_font: Some(hub.header_font.clone()),
            body_font: Some(hub.body_font.clone()),
            custom_font_url: Some(hub.custom_font_url.clone()),
            hero_tagline: Some(hub.hero_tagline.clone()),
            hero_subtext: Some(hub.hero_subtext.clone()),
            social_links: Some(hub.social_links.clone()),
            blocks: Some(hub.blocks.clone()),
            section_order: Some(hub.section_order.clone()),
            is_published: Some(hub.is_published),
        }
    }

    /// Slug the update renames the hub to, if it differs from `current`.
    pub fn renamed_slug(&self, current: &str) -> Option<&str> {
        self.slug
            .as_deref()
            .filter(|s| !s.is_empty() && *s != current)
    }
}
