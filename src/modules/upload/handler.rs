use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{debug, warn};

use crate::common::error::AppError;
use crate::common::response::{ApiError, ApiSuccess, ErrorResponse};
use crate::state::AppState;
use super::dto::{UploadRequest, UploadResponse, VideoFile};
use super::service::{MISSING_FILE, UploadService};

pub const UPLOAD_FAILED: &str = "An error occurred while processing your request.";
pub const UPLOAD_TOO_LARGE: &str = "Video exceeds the maximum upload size.";
const VIDEO_FIELD: &str = "video";

/// Upload and compress a video
///
/// Stores both the original and the compressed version.
#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = super::dto::VideoUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Video uploaded and compressed", body = UploadResponse),
        (status = 400, description = "Missing file or not a video", body = ErrorResponse),
        (status = 413, description = "Video larger than the upload limit", body = ErrorResponse),
        (status = 500, description = "Transcode or storage failure", body = ErrorResponse)
    ),
    tag = "Video Upload"
)]
pub async fn upload_video(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> impl IntoResponse {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(e) => {
            warn!(error = %e, "Upload body rejected");
            return ApiError::new(rejected_body(e.status()), UPLOAD_FAILED).into_response();
        }
    };

    let req = match read_upload(multipart).await {
        Ok(req) => req,
        Err(e) => return ApiError::new(e, UPLOAD_FAILED).into_response(),
    };

    match UploadService::ingest(&state, req).await {
        Ok(outcome) => {
            debug!(original = %outcome.original_key, compressed = %outcome.compressed_key, "Upload complete");
            ApiSuccess(UploadResponse::from(&outcome), StatusCode::OK).into_response()
        }
        Err(e) => ApiError::new(e, UPLOAD_FAILED).into_response(),
    }
}

/// Buffers the `video` field; other fields are skipped.
async fn read_upload(mut multipart: Multipart) -> Result<UploadRequest, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(VIDEO_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(multipart_error)?;

        return Ok(UploadRequest {
            video: Some(VideoFile {
                file_name,
                content_type,
                bytes,
            }),
        });
    }

    Ok(UploadRequest::default())
}

fn multipart_error(e: MultipartError) -> AppError {
    warn!(error = %e, "Malformed multipart body");
    rejected_body(e.status())
}

/// Parser wording stays in the logs; the caller gets the stable messages.
fn rejected_body(status: StatusCode) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(UPLOAD_TOO_LARGE.to_string())
    } else {
        AppError::invalid_input(MISSING_FILE)
    }
}
