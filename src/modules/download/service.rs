use tracing::{debug, info, instrument};

use crate::common::error::AppError;
use crate::common::storage_key::Variant;
use crate::state::AppState;
use super::dto::{ALL_AVAILABLE, COMPRESSED_MISSING, DownloadLinkResponse, ORIGINAL_MISSING};

pub const VIDEO_NOT_FOUND: &str = "Video not found";

pub struct DownloadService;

impl DownloadService {
    /// Signed links for whichever variants of `filename` are stored.
    #[instrument(skip(state))]
    pub async fn resolve(state: &AppState, filename: &str) -> Result<DownloadLinkResponse, AppError> {
        let compressed_key = Variant::Compressed.key_for(filename);
        let original_key = Variant::Original.key_for(filename);

        let (compressed_exists, original_exists) = tokio::join!(
            state.storage.exists(&compressed_key),
            state.storage.exists(&original_key),
        );
        let (compressed_exists, original_exists) = (compressed_exists?, original_exists?);
        debug!(compressed_exists, original_exists, "Probed variants");

        if !compressed_exists && !original_exists {
            return Err(AppError::NotFound(VIDEO_NOT_FOUND.to_string()));
        }

        let ttl = state.config.signed_url_ttl();
        let mut response = DownloadLinkResponse {
            success: true,
            message: ALL_AVAILABLE.to_string(),
            compressed: None,
            original: None,
        };

        // Compressed is judged first, so a missing original has the last word.
        if compressed_exists {
            response.compressed = Some(state.storage.signed_get(&compressed_key, ttl).await?);
        } else {
            response.message = COMPRESSED_MISSING.to_string();
        }

        if original_exists {
            response.original = Some(state.storage.signed_get(&original_key, ttl).await?);
        } else {
            response.message = ORIGINAL_MISSING.to_string();
        }

        info!(
            compressed = response.compressed.is_some(),
            original = response.original.is_some(),
            "🔗 Download links issued"
        );
        Ok(response)
    }
}
