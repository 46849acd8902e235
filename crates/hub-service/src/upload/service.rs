//! Upload service: validate, name, and store an image.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use hub_core::error::AppError;
use hub_core::result::AppResult;
use hub_core::traits::storage::StorageProvider;

use super::validator::{UploadValidator, extension_for};

/// A file received from the client.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Original file name. Only logged; the stored name is generated.
    pub file_name: Option<String>,
    /// Declared content type.
    pub content_type: Option<String>,
    /// File content.
    pub data: Bytes,
}

/// Where an upload ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    /// URL the image can be referenced by.
    pub url: String,
    /// Generated file name.
    pub filename: String,
}

/// Stores validated images through the configured provider.
#[derive(Debug, Clone)]
pub struct UploadService {
    provider: Arc<dyn StorageProvider>,
    validator: UploadValidator,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(provider: Arc<dyn StorageProvider>, validator: UploadValidator) -> Self {
        Self {
            provider,
            validator,
        }
    }

    /// The provider uploads are written to.
    pub fn provider(&self) -> &Arc<dyn StorageProvider> {
        &self.provider
    }

    /// Largest accepted upload in bytes.
    pub fn max_bytes(&self) -> u64 {
        self.validator.max_bytes()
    }

    /// The rejection for a body cut off by the request size limit.
    pub fn too_large(&self) -> AppError {
        self.validator.too_large()
    }

    /// Validate and store one file. `None` or an empty body means no file
    /// was sent.
    pub async fn upload(&self, file: Option<UploadRequest>) -> AppResult<UploadedFile> {
        let file = file
            .filter(|f| !f.data.is_empty())
            .ok_or_else(|| AppError::upload_rejected("No file provided"))?;

        let content_type = file.content_type.as_deref().unwrap_or_default();
        self.validator
            .validate(content_type, file.data.len() as u64)?;

        let filename = generate_filename(content_type);
        let size = file.data.len();
        let stored = self.provider.put(&filename, file.data, content_type).await?;

        info!(
            filename = %filename,
            original = file.file_name.as_deref().unwrap_or_default(),
            content_type,
            bytes = size,
            provider = self.provider.provider_type(),
            "Upload stored"
        );
        Ok(UploadedFile {
            url: stored.url,
            filename,
        })
    }
}

/// `<millis>-<6 chars>.<ext>`, the extension derived from the validated
/// content type so the file is served back as that type.
pub fn generate_filename(content_type: &str) -> String {
    let ext = extension_for(content_type);
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}.{ext}", Utc::now().timestamp_millis(), &suffix[..6])
}
