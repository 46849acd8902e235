//! Normalization of stored hub documents.
//!
//! Hubs have been persisted in two shapes over time: the current one with a
//! `blocks` array, and the legacy one with `actionCards` (`icon`, `link`,
//! `linkType`) plus a handful of renamed branding fields. Every read goes
//! through [`normalize_hub`], which accepts either and always produces the
//! canonical [`Hub`]. The function is total and idempotent: values of the
//! wrong JSON type are treated as absent and a canonical hub normalizes to
//! itself.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use hub_core::{AppError, AppResult};
use serde_json::{Map, Value};

use crate::hub::block::DEFAULT_ACCENT_COLOR;
use crate::hub::model::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_BLOCK_COLOR, DEFAULT_EVENT_NAME, DEFAULT_FONT,
};
use crate::hub::{AspectRatio, Block, Hub, HubUpdate, Section, SocialLink, SocialPlatform};
use crate::reorder;
use crate::slug;

const WHATSAPP_PREFIX: &str = "https://wa.me/";

/// Which block array a stored document carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// `blocks` array with `url` links.
    Current,
    /// `actionCards` array with `link`/`linkType`.
    Legacy,
    /// Neither array is present.
    Empty,
}

impl SchemaVersion {
    /// Detect the schema of a raw document. A `blocks` array wins over an
    /// `actionCards` array when both are present.
    pub fn detect(raw: &Value) -> Self {
        if raw.get("blocks").is_some_and(Value::is_array) {
            Self::Current
        } else if raw.get("actionCards").is_some_and(Value::is_array) {
            Self::Legacy
        } else {
            Self::Empty
        }
    }

    fn blocks_key(&self) -> Option<&'static str> {
        match self {
            Self::Current => Some("blocks"),
            Self::Legacy => Some("actionCards"),
            Self::Empty => None,
        }
    }
}

/// Normalize any hub-like JSON value into the canonical [`Hub`].
pub fn normalize_hub(raw: &Value) -> Hub {
    let empty = Map::new();
    let obj = raw.as_object().unwrap_or(&empty);

    let event_name = string(obj, &["eventName"]);
    let slug = slug::derive_slug(string(obj, &["slug"]).as_deref(), event_name.as_deref());

    let updated_at = timestamp(obj, "updatedAt");
    let created_at = timestamp(obj, "createdAt").or(updated_at);

    let blocks = SchemaVersion::detect(raw)
        .blocks_key()
        .and_then(|key| obj.get(key))
        .map(blocks_from_value)
        .unwrap_or_default();

    Hub {
        slug,
        event_name: event_name.unwrap_or_else(|| DEFAULT_EVENT_NAME.to_string()),
        logo_url: string(obj, &["logoUrl"]).unwrap_or_default(),
        hero_image_url: string(obj, &["heroImageUrl", "homepageImageUrl"]).unwrap_or_default(),
        sponsor_banner_url: string(obj, &["sponsorBannerUrl"]).unwrap_or_default(),
        sponsor_link: string(obj, &["sponsorLink"]).unwrap_or_default(),
        block_color: non_empty(obj, &["blockColor", "primaryColor"], DEFAULT_BLOCK_COLOR),
        background_color: non_empty(obj, &["backgroundColor"], DEFAULT_BACKGROUND_COLOR),
        header_font: non_empty(
            obj,
            &["headerFont", "fontFamilyHeading", "fontFamily"],
            DEFAULT_FONT,
        ),
        body_font: non_empty(obj, &["bodyFont", "fontFamily"], DEFAULT_FONT),
        custom_font_url: string(obj, &["customFontUrl"]).unwrap_or_default(),
        hero_tagline: string(obj, &["heroTagline"]).unwrap_or_default(),
        hero_subtext: string(obj, &["heroSubtext"]).unwrap_or_default(),
        social_links: obj
            .get("socialLinks")
            .map(social_links_from_value)
            .unwrap_or_default(),
        blocks,
        section_order: obj
            .get("sectionOrder")
            .map(section_order_from_value)
            .unwrap_or_else(Section::default_order),
        is_published: obj
            .get("isPublished")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        created_at: created_at.unwrap_or_default(),
        updated_at: updated_at.unwrap_or_default(),
    }
}

impl HubUpdate {
    /// Read an update payload with the same leniency as [`normalize_hub`],
    /// keeping only the fields that are present.
    ///
    /// A payload that is not a JSON object is a validation error.
    pub fn from_json(raw: &Value) -> AppResult<Self> {
        let obj = raw
            .as_object()
            .ok_or_else(|| AppError::validation("Hub payload must be a JSON object"))?;

        let blocks = SchemaVersion::detect(raw)
            .blocks_key()
            .and_then(|key| obj.get(key))
            .map(blocks_from_value);

        Ok(Self {
            slug: string(obj, &["slug"]).map(|s| s.trim().to_string()),
            event_name: string(obj, &["eventName"]),
            logo_url: string(obj, &["logoUrl"]),
            hero_image_url: string(obj, &["heroImageUrl", "homepageImageUrl"]),
            sponsor_banner_url: string(obj, &["sponsorBannerUrl"]),
            sponsor_link: string(obj, &["sponsorLink"]),
            block_color: present_or_default(obj, &["blockColor", "primaryColor"], DEFAULT_BLOCK_COLOR),
            background_color: present_or_default(obj, &["backgroundColor"], DEFAULT_BACKGROUND_COLOR),
            header_font: present_or_default(
                obj,
                &["headerFont", "fontFamilyHeading", "fontFamily"],
                DEFAULT_FONT,
            ),
            body_font: present_or_default(obj, &["bodyFont", "fontFamily"], DEFAULT_FONT),
            custom_font_url: string(obj, &["customFontUrl"]),
            hero_tagline: string(obj, &["heroTagline"]),
            hero_subtext: string(obj, &["heroSubtext"]),
            social_links: obj
                .get("socialLinks")
                .filter(|v| v.is_array())
                .map(social_links_from_value),
            blocks,
            section_order: obj
                .get("sectionOrder")
                .filter(|v| v.is_array())
                .map(section_order_from_value),
            is_published: obj.get("isPublished").and_then(Value::as_bool),
        })
    }
}

/// Read a social link array. Non-object entries are skipped and unknown
/// platforms become `website`.
pub fn social_links_from_value(raw: &Value) -> Vec<SocialLink> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_object)
        .map(|link| SocialLink {
            platform: string(link, &["platform"])
                .map(|p| SocialPlatform::parse_lenient(&p))
                .unwrap_or(SocialPlatform::Website),
            url: string(link, &["url"]).unwrap_or_default(),
        })
        .collect()
}

/// Read a section order. Unknown names are dropped and the result is
/// completed with any missing section.
pub fn section_order_from_value(raw: &Value) -> Vec<Section> {
    let Some(items) = raw.as_array() else {
        return Section::default_order();
    };
    Section::complete_order(items.iter().filter_map(Value::as_str).filter_map(Section::parse))
}

/// Read a block array (current or legacy entries), sort it by declared
/// position, renumber it, and make ids unique.
pub fn blocks_from_value(raw: &Value) -> Vec<Block> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut blocks: Vec<Block> = items
        .iter()
        .filter_map(Value::as_object)
        .enumerate()
        .map(|(pos, obj)| {
            let mut block = block_from_object(obj, pos);
            block.id = unique_id(&mut seen, string(obj, &["id"]), pos);
            block
        })
        .collect();

    reorder::sort_and_renumber(&mut blocks);
    blocks
}

fn block_from_object(obj: &Map<String, Value>, pos: usize) -> Block {
    let mut url = string(obj, &["url", "link"]).unwrap_or_default();
    if string(obj, &["linkType"]).as_deref() == Some("whatsapp")
        && !url.is_empty()
        && !url.contains("wa.me")
    {
        url = format!("{WHATSAPP_PREFIX}{url}");
    }

    Block {
        id: String::new(),
        title: string(obj, &["title"]).unwrap_or_default(),
        description: string(obj, &["description"]).unwrap_or_default(),
        image_url: string(obj, &["imageUrl"]).unwrap_or_default(),
        url,
        aspect_ratio: string(obj, &["aspectRatio"])
            .and_then(|r| AspectRatio::parse(&r))
            .unwrap_or_default(),
        accent_color: non_empty(obj, &["accentColor"], DEFAULT_ACCENT_COLOR),
        badge: string(obj, &["badge"]).filter(|b| !b.trim().is_empty()),
        is_visible: obj.get("isVisible").and_then(Value::as_bool).unwrap_or(true),
        sort_order: obj
            .get("sortOrder")
            .and_then(sort_position)
            .unwrap_or(pos as i32),
    }
}

fn unique_id(seen: &mut HashSet<String>, declared: Option<String>, pos: usize) -> String {
    let mut id = declared
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| format!("block_{pos}"));
    while seen.contains(&id) {
        id = format!("{id}-{pos}");
    }
    seen.insert(id.clone());
    id
}

fn sort_position(value: &Value) -> Option<i32> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .and_then(|n| i32::try_from(n).ok())
}

fn string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn non_empty(obj: &Map<String, Value>, keys: &[&str], default: &str) -> String {
    keys.iter()
        .find_map(|key| {
            obj.get(*key)
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or(default)
        .to_string()
}

fn present_or_default(obj: &Map<String, Value>, keys: &[&str], default: &str) -> Option<String> {
    keys.iter()
        .any(|key| obj.get(*key).is_some_and(Value::is_string))
        .then(|| non_empty(obj, keys, default))
}

fn timestamp(obj: &Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    obj.get(key)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
