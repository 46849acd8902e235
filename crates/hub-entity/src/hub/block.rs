//! Content block model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Accent color applied to blocks that don't declare one.
pub const DEFAULT_ACCENT_COLOR: &str = "#FF10A8";

/// Declared aspect ratio of a block's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// Square image, rendered side-by-side with the text.
    #[default]
    #[serde(rename = "1:1")]
    Square,
    /// Landscape image, rendered stacked above the text.
    #[serde(rename = "16:9")]
    Landscape,
    /// Portrait image, rendered stacked above the text.
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    /// All presets, in the order the editor offers them.
    pub const ALL: [AspectRatio; 3] = [Self::Square, Self::Landscape, Self::Portrait];

    /// Wire representation of the preset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
        }
    }

    /// Parse a preset, returning `None` for anything unrecognised.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1:1" => Some(Self::Square),
            "16:9" => Some(Self::Landscape),
            "9:16" => Some(Self::Portrait),
            _ => None,
        }
    }

    /// Whether blocks with this ratio render image and text side-by-side.
    pub fn is_side_by_side(&self) -> bool {
        matches!(self, Self::Square)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One interactive content unit on a hub page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Identifier, unique within the owning hub.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Short supporting text.
    pub description: String,
    /// Image reference (URL or upload path).
    pub image_url: String,
    /// Destination link.
    pub url: String,
    /// Declared image aspect ratio.
    pub aspect_ratio: AspectRatio,
    /// Accent color as a CSS color string.
    pub accent_color: String,
    /// Optional badge such as `LIVE` or `NEW`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Hidden blocks stay in the editor but are not rendered.
    pub is_visible: bool,
    /// Zero-based display position.
    pub sort_order: i32,
}

impl Block {
    /// A block as the editor creates it when "Add Block" is pressed.
    pub fn new(id: impl Into<String>, sort_order: i32) -> Self {
        Self {
            id: id.into(),
            title: "New Block".to_string(),
            description: "Tap to interact".to_string(),
            image_url: String::new(),
            url: String::new(),
            aspect_ratio: AspectRatio::default(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            badge: None,
            is_visible: true,
            sort_order,
        }
    }

    /// Apply a partial edit.
    pub fn apply(&mut self, patch: BlockPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(aspect_ratio) = patch.aspect_ratio {
            self.aspect_ratio = aspect_ratio;
        }
        if let Some(accent_color) = patch.accent_color {
            self.accent_color = accent_color;
        }
        if let Some(badge) = patch.badge {
            self.badge = badge.filter(|b| !b.trim().is_empty());
        }
        if let Some(is_visible) = patch.is_visible {
            self.is_visible = is_visible;
        }
    }
}

/// Partial edit of a block's content. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New image reference.
    pub image_url: Option<String>,
    /// New destination link.
    pub url: Option<String>,
    /// New aspect ratio.
    pub aspect_ratio: Option<AspectRatio>,
    /// New accent color.
    pub accent_color: Option<String>,
    /// `Some(None)` clears the badge.
    pub badge: Option<Option<String>>,
    /// New visibility.
    pub is_visible: Option<bool>,
}
