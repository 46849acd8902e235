//! Upload checks: content-type allow-list and size ceiling.

use hub_core::config::StorageConfig;
use hub_core::error::AppError;
use hub_core::result::AppResult;

/// Validates an upload before it reaches the storage provider.
#[derive(Debug, Clone)]
pub struct UploadValidator {
    allowed_mime_types: Vec<String>,
    max_bytes: u64,
}

impl UploadValidator {
    /// Validator with an explicit allow-list and ceiling.
    pub fn new(allowed_mime_types: Vec<String>, max_bytes: u64) -> Self {
        Self {
            allowed_mime_types: allowed_mime_types
                .into_iter()
                .map(|m| m.trim().to_ascii_lowercase())
                .collect(),
            max_bytes,
        }
    }

    /// Validator for the `[storage]` section.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.allowed_mime_types.clone(), config.max_upload_size_bytes)
    }

    /// Largest accepted upload in bytes.
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Check the declared content type and the payload size.
    pub fn validate(&self, content_type: &str, size: u64) -> AppResult<()> {
        if !self.is_allowed(content_type) {
            return Err(AppError::upload_rejected(format!(
                "Invalid file type. Allowed: {}",
                self.allowed_labels()
            )));
        }
        if size > self.max_bytes {
            return Err(self.too_large());
        }
        Ok(())
    }

    /// The rejection returned for oversized uploads.
    pub fn too_large(&self) -> AppError {
        AppError::upload_rejected(format!("File too large. Max {}", human_size(self.max_bytes)))
    }

    /// Whether a content type (parameters ignored) is on the allow-list.
    pub fn is_allowed(&self, content_type: &str) -> bool {
        let essence = essence(content_type);
        self.allowed_mime_types.iter().any(|m| *m == essence)
    }

    fn allowed_labels(&self) -> String {
        self.allowed_mime_types
            .iter()
            .map(|m| mime_label(m))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// `image/svg+xml; charset=utf-8` → `image/svg+xml`.
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// File extension stored for an accepted content type. Types outside the
/// built-in set use their alphanumeric subtype, or `bin`.
pub fn extension_for(content_type: &str) -> String {
    let essence = essence(content_type);
    match essence.as_str() {
        "image/png" => "png".to_string(),
        "image/jpeg" => "jpg".to_string(),
        "image/svg+xml" => "svg".to_string(),
        "image/webp" => "webp".to_string(),
        "image/gif" => "gif".to_string(),
        other => {
            let subtype: String = other
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .chars()
                .take_while(char::is_ascii_alphanumeric)
                .take(8)
                .collect();
            if subtype.is_empty() {
                "bin".to_string()
            } else {
                subtype
            }
        }
    }
}

fn mime_label(mime: &str) -> String {
    match mime {
        "image/png" => "PNG".to_string(),
        "image/jpeg" => "JPG".to_string(),
        "image/svg+xml" => "SVG".to_string(),
        "image/webp" => "WebP".to_string(),
        "image/gif" => "GIF".to_string(),
        other => other
            .rsplit('/')
            .next()
            .unwrap_or(other)
            .to_ascii_uppercase(),
    }
}

fn human_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if bytes >= MB && bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else if bytes >= MB {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{}KB", bytes / KB)
    } else {
        format!("{bytes} bytes")
    }
}
