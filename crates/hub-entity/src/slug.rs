//! Slug derivation and validation.
//!
//! A slug is lowercase ASCII alphanumerics separated by single dashes,
//! with no leading or trailing dash.

/// Slug used when nothing else yields one.
pub const FALLBACK_SLUG: &str = "new-hub";

/// Derive a slug from free text: lowercase, collapse every run of
/// non-alphanumeric characters to one `-`, trim dashes.
///
/// `"Test Event"` becomes `"test-event"`.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Sanitize slug input typed into the editor.
///
/// Typed dashes act as separators like any other punctuation, so the result
/// always satisfies [`is_valid_slug`] or is empty.
pub fn sanitize_slug_input(input: &str) -> String {
    slugify(input)
}

/// Whether `slug` is already in canonical slug form.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Pick the slug for a new hub: an explicit slug if given, else the event
/// name, else [`FALLBACK_SLUG`]. Candidates that slugify to nothing are
/// skipped.
pub fn derive_slug(explicit: Option<&str>, event_name: Option<&str>) -> String {
    [explicit, event_name]
        .into_iter()
        .flatten()
        .map(slugify)
        .find(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_SLUG.to_string())
}
