//! Image upload handler.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;

use hub_core::error::AppError;
use hub_service::{UploadRequest, UploadedFile};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/upload, a multipart form with a single `file` field
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadedFile>, ApiError> {
    let service = &state.upload_service;
    // Not a multipart body at all: treat as no file.
    let Ok(mut multipart) = multipart else {
        return Err(AppError::upload_rejected("No file provided").into());
    };

    let multipart_error = |e: MultipartError| -> ApiError {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            service.too_large().into()
        } else {
            AppError::upload_rejected(format!("Malformed upload: {}", e.body_text())).into()
        }
    };

    let mut file = None;
    while let Some(field) = multipart.next_field().await.map_err(&multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await.map_err(&multipart_error)?;
        file = Some(UploadRequest {
            file_name,
            content_type,
            data,
        });
        break;
    }

    Ok(Json(service.upload(file).await?))
}
