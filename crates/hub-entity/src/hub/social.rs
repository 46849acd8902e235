//! Social links shown in the hub footer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported social platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    /// X / Twitter.
    #[default]
    Twitter,
    /// Instagram.
    Instagram,
    /// TikTok.
    Tiktok,
    /// YouTube.
    Youtube,
    /// Facebook.
    Facebook,
    /// LinkedIn.
    Linkedin,
    /// WhatsApp.
    Whatsapp,
    /// Any other website.
    Website,
}

impl SocialPlatform {
    /// All platforms, in picker order.
    pub const ALL: [SocialPlatform; 8] = [
        Self::Twitter,
        Self::Instagram,
        Self::Tiktok,
        Self::Youtube,
        Self::Facebook,
        Self::Linkedin,
        Self::Whatsapp,
        Self::Website,
    ];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Tiktok => "tiktok",
            Self::Youtube => "youtube",
            Self::Facebook => "facebook",
            Self::Linkedin => "linkedin",
            Self::Whatsapp => "whatsapp",
            Self::Website => "website",
        }
    }

    /// Human label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::Tiktok => "TikTok",
            Self::Youtube => "YouTube",
            Self::Facebook => "Facebook",
            Self::Linkedin => "LinkedIn",
            Self::Whatsapp => "WhatsApp",
            Self::Website => "Website",
        }
    }

    /// Parse a platform name; unknown names fall back to `Website`.
    pub fn parse_lenient(raw: &str) -> Self {
        let raw = raw.trim().to_ascii_lowercase();
        match raw.as_str() {
            "x" => Self::Twitter,
            _ => Self::ALL
                .into_iter()
                .find(|p| p.as_str() == raw)
                .unwrap_or(Self::Website),
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link to one of the event's social profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform the link points at.
    pub platform: SocialPlatform,
    /// Profile URL. May be empty while the operator is still editing.
    pub url: String,
}

impl SocialLink {
    /// A blank link, as the editor adds it.
    pub fn blank() -> Self {
        Self {
            platform: SocialPlatform::default(),
            url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient() {
        assert_eq!(SocialPlatform::parse_lenient("Instagram"), SocialPlatform::Instagram);
        assert_eq!(SocialPlatform::parse_lenient("x"), SocialPlatform::Twitter);
        assert_eq!(SocialPlatform::parse_lenient("myspace"), SocialPlatform::Website);
    }
}
