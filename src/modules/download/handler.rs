use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::common::response::{ApiError, ApiSuccess, ErrorResponse};
use crate::state::AppState;
use super::dto::DownloadLinkResponse;
use super::service::DownloadService;

pub const DOWNLOAD_FAILED: &str = "Failed to download video";

/// Get video download links
///
/// Returns signed links for the original and/or compressed video.
#[utoipa::path(
    get,
    path = "/download/{filename}",
    params(
        ("filename" = String, Path, description = "The filename of the video")
    ),
    responses(
        (status = 200, description = "Links for the stored variants", body = DownloadLinkResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Video Download"
)]
pub async fn download_video(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    match DownloadService::resolve(&state, &filename).await {
        Ok(res) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => ApiError::new(e, DOWNLOAD_FAILED).into_response(),
    }
}
