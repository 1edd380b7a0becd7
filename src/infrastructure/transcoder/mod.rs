use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

pub mod ffmpeg;

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("failed to launch transcoder: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("transcoder exited with {status}: {stderr}")]
    Exited { status: String, stderr: String },

    #[error("transcoder produced no output at {0}")]
    MissingOutput(String),
}

/// Compresses the video at `input` into `output` using the fixed H.264 profile.
///
/// Resolves exactly once: `Ok` means `output` exists and is complete.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError>;
}
