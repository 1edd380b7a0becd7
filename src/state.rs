use std::sync::Arc;

use crate::common::staging::StagingArea;
use crate::config::settings::AppConfig;
use crate::infrastructure::storage::BlobStore;
use crate::infrastructure::transcoder::Transcoder;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub storage: Arc<dyn BlobStore>,
    pub transcoder: Arc<dyn Transcoder>,
    pub staging: StagingArea,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn BlobStore>,
        transcoder: Arc<dyn Transcoder>,
    ) -> Self {
        let staging = StagingArea::new(config.staging_dir.clone());
        Self {
            config,
            storage,
            transcoder,
            staging,
        }
    }
}
