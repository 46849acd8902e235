//! Top-level page sections and their configurable order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One region of the fan-facing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Sponsor banner.
    Sponsor,
    /// Logo, hero image, tagline, and subtext.
    Hero,
    /// The block list.
    Blocks,
}

impl Section {
    /// Order used when a hub does not declare one.
    pub const DEFAULT_ORDER: [Section; 3] = [Self::Sponsor, Self::Hero, Self::Blocks];

    /// Parse a section name. `cards` is the legacy name of `blocks`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sponsor" => Some(Self::Sponsor),
            "hero" => Some(Self::Hero),
            "blocks" | "cards" => Some(Self::Blocks),
            _ => None,
        }
    }

    /// The default section order as an owned list.
    pub fn default_order() -> Vec<Section> {
        Self::DEFAULT_ORDER.to_vec()
    }

    /// Make an order complete: drop duplicates, then append any missing
    /// sections in default order.
    pub fn complete_order(order: impl IntoIterator<Item = Section>) -> Vec<Section> {
        let mut out: Vec<Section> = Vec::with_capacity(Self::DEFAULT_ORDER.len());
        for section in order {
            if !out.contains(&section) {
                out.push(section);
            }
        }
        for section in Self::DEFAULT_ORDER {
            if !out.contains(&section) {
                out.push(section);
            }
        }
        out
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sponsor => write!(f, "sponsor"),
            Self::Hero => write!(f, "hero"),
            Self::Blocks => write!(f, "blocks"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_cards_name() {
        assert_eq!(Section::parse("cards"), Some(Section::Blocks));
        assert_eq!(Section::parse("footer"), None);
    }

    #[test]
    fn test_complete_order_dedupes_and_fills() {
        let order = Section::complete_order([Section::Blocks, Section::Blocks, Section::Hero]);
        assert_eq!(order, vec![Section::Blocks, Section::Hero, Section::Sponsor]);
    }
}
