//! Server-side HTML for the fan-facing hub page.
//!
//! Text goes through maud, which escapes everything it interpolates. Values
//! that land in attributes or CSS are additionally passed through the
//! allow-list helpers below, since escaping alone does not stop a
//! `javascript:` URL or a `;}` in a color.

mod block;
mod page;

pub use page::{not_found_page, render_hub};

/// Return `url` if it uses a scheme safe to place in `href`/`src`.
///
/// Accepted: `https://`, `http://`, root-relative paths, `mailto:` and
/// `tel:`. Anything else, including protocol-relative `//host`, is dropped.
pub fn safe_url(url: &str) -> Option<&str> {
    let url = url.trim();
    if url.is_empty() || url.chars().any(char::is_control) {
        return None;
    }
    let lower = url.to_ascii_lowercase();
    let allowed = lower.starts_with("https://")
        || lower.starts_with("http://")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || (lower.starts_with('/') && !lower.starts_with("//"));
    allowed.then_some(url)
}

/// A CSS color value, or `fallback` when `raw` is not a plain color.
///
/// Allows hex colors, `rgb()/rgba()/hsl()/hsla()` with numeric arguments,
/// and bare keywords.
pub fn css_color<'a>(raw: &'a str, fallback: &'a str) -> &'a str {
    let value = raw.trim();
    if value.is_empty() || value.len() > 64 {
        return fallback;
    }

    let ok = if let Some(hex) = value.strip_prefix('#') {
        matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else if let Some((func, rest)) = value.split_once('(') {
        matches!(func, "rgb" | "rgba" | "hsl" | "hsla")
            && rest.ends_with(')')
            && rest[..rest.len() - 1]
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ' ' | '%' | '/'))
    } else {
        value.chars().all(|c| c.is_ascii_alphabetic())
    };

    if ok { value } else { fallback }
}

/// A font family name reduced to letters, digits, spaces, and dashes.
pub fn font_family(raw: &str, fallback: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-'))
        .collect();
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned
    }
}

/// Google Fonts stylesheet URL for one or two families.
pub fn google_fonts_url(families: &[&str]) -> String {
    let mut url = String::from("https://fonts.googleapis.com/css2?");
    let mut seen: Vec<&str> = Vec::with_capacity(families.len());
    for family in families {
        if family.is_empty() || seen.contains(family) {
            continue;
        }
        seen.push(family);
        url.push_str("family=");
        url.push_str(&family.replace(' ', "+"));
        url.push_str(":wght@300;400;500;600;700&");
    }
    url.push_str("display=swap");
    url
}
