use utoipa::OpenApi;

use crate::common::response::ErrorResponse;
use crate::modules::download::dto::DownloadLinkResponse;
use crate::modules::upload::dto::{UploadResponse, VideoUploadForm};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Video Compressor API",
        version = "1.0.0",
        description = "Upload a video, get it compressed, and fetch signed download links"
    ),
    paths(
        crate::modules::upload::handler::upload_video,
        crate::modules::download::handler::download_video,
    ),
    components(
        schemas(UploadResponse, VideoUploadForm, DownloadLinkResponse, ErrorResponse)
    ),
    tags(
        (name = "Video Upload", description = "API for uploading a video"),
        (name = "Video Download", description = "API for fetching video download links")
    )
)]
pub struct ApiDoc;
