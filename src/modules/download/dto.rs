use serde::Serialize;
use utoipa::ToSchema;

pub const ALL_AVAILABLE: &str =
    "Videos fetched successfully! Click the links to download the video";
pub const COMPRESSED_MISSING: &str =
    "Compressed video is not available. Click the link below to download the original video.";
pub const ORIGINAL_MISSING: &str =
    "Original video is not available. Click the link below to download the compressed video.";

#[derive(Debug, Serialize, ToSchema)]
pub struct DownloadLinkResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Videos fetched successfully! Click the links to download the video")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "https://s3.amazonaws.com/bucket-name/compressed/video.mp4")]
    pub compressed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "https://s3.amazonaws.com/bucket-name/original/video.mp4")]
    pub original: Option<String>,
}
