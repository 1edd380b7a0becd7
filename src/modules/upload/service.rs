use bytes::Bytes;
use tracing::{error, info, instrument};

use crate::common::error::AppError;
use crate::common::staging::StagingWorkspace;
use crate::common::storage_key::{StorageKeyStem, Variant};
use crate::state::AppState;
use super::dto::{IngestOutcome, SizeReduction, UploadRequest, VideoFile};

pub const MISSING_FILE: &str = "Please upload a video file.";
pub const INVALID_FORMAT: &str = "Invalid file format. Only video files are allowed.";
pub const MISSING_FILENAME: &str = "Uploaded video must have a filename.";

const STAGED_ORIGINAL: &str = "original";
const STAGED_COMPRESSED: &str = "compressed.mp4";
const COMPRESSED_CONTENT_TYPE: &str = "video/mp4";

pub struct UploadService;

impl UploadService {
    /// Stage, transcode, measure and store one uploaded video.
    ///
    /// Whatever happens after validation, the request's staging workspace is
    /// released before this returns.
    #[instrument(skip_all)]
    pub async fn ingest(state: &AppState, req: UploadRequest) -> Result<IngestOutcome, AppError> {
        let video = Self::validate(req)?;
        let stem = StorageKeyStem::from_filename(&video.file_name);

        info!(
            file_name = %video.file_name,
            content_type = %video.content_type,
            size_bytes = video.bytes.len(),
            "📦 Received video upload"
        );

        let mut workspace = state.staging.workspace().await?;
        let result = Self::process(state, &mut workspace, &video, &stem).await;

        if let Err(e) = workspace.release().await {
            error!(error = %e, "Failed to release staging workspace");
        }

        result
    }

    fn validate(req: UploadRequest) -> Result<VideoFile, AppError> {
        let video = match req.video {
            Some(video) if !video.bytes.is_empty() => video,
            _ => return Err(AppError::invalid_input(MISSING_FILE)),
        };

        if !video.content_type.starts_with("video/") {
            return Err(AppError::invalid_input(INVALID_FORMAT));
        }

        if video.file_name.is_empty() {
            return Err(AppError::invalid_input(MISSING_FILENAME));
        }

        Ok(video)
    }

    async fn process(
        state: &AppState,
        workspace: &mut StagingWorkspace,
        video: &VideoFile,
        stem: &StorageKeyStem,
    ) -> Result<IngestOutcome, AppError> {
        let original = workspace.stage(STAGED_ORIGINAL, &video.bytes).await?;
        let output = workspace.output_path(STAGED_COMPRESSED);

        info!(input = %original.path.display(), "🎥 Transcoding");
        state.transcoder.transcode(&original.path, &output).await?;

        let compressed = workspace.adopt(output).await?;
        let compressed_bytes = Bytes::from(tokio::fs::read(&compressed.path).await?);

        let reduction = SizeReduction {
            original_bytes: original.size,
            compressed_bytes: compressed.size,
        };

        let original_key = stem.key(Variant::Original);
        let compressed_key = stem.key(Variant::Compressed);

        // Both writes always run to completion; a failure in one does not undo the other.
        let (original_put, compressed_put) = tokio::join!(
            state
                .storage
                .put(&original_key, video.bytes.clone(), &video.content_type),
            state
                .storage
                .put(&compressed_key, compressed_bytes, COMPRESSED_CONTENT_TYPE),
        );
        original_put?;
        compressed_put?;

        info!(
            %original_key,
            %compressed_key,
            original_bytes = reduction.original_bytes,
            compressed_bytes = reduction.compressed_bytes,
            reduced = %reduction,
            "✅ Video stored"
        );

        Ok(IngestOutcome {
            reduction,
            original_key,
            compressed_key,
        })
    }
}
