use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::settings::AppConfig;
use crate::infrastructure::storage::memory::MemoryStorage;
use crate::infrastructure::transcoder::{TranscodeError, Transcoder};
use crate::state::AppState;

pub enum Script {
    /// Writes an output of this many bytes.
    Produce(usize),
    Fail,
}

/// Transcoder double that remembers what it was handed.
pub struct ScriptedTranscoder {
    script: Script,
    pub inputs: Mutex<Vec<(PathBuf, Vec<u8>)>>,
}

impl ScriptedTranscoder {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }
}

#[async_trait]
impl Transcoder for ScriptedTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        let staged = tokio::fs::read(input).await?;
        self.inputs.lock().unwrap().push((input.to_path_buf(), staged));

        match self.script {
            Script::Produce(size) => {
                tokio::fs::write(output, vec![0u8; size]).await?;
                Ok(())
            }
            Script::Fail => {
                // leave a partial file behind, as a crashed encoder would
                tokio::fs::write(output, b"partial").await?;
                Err(TranscodeError::Exited {
                    status: "exit status: 1".to_string(),
                    stderr: "Invalid data found when processing input".to_string(),
                })
            }
        }
    }
}

pub fn test_config(staging_dir: &Path) -> AppConfig {
    AppConfig {
        server_port: 0,
        s3_bucket: "videos".to_string(),
        s3_endpoint: None,
        aws_region: "us-east-1".to_string(),
        aws_access_key: "test".to_string(),
        aws_secret_key: "test".to_string(),
        staging_dir: staging_dir.to_path_buf(),
        ffmpeg_path: "ffmpeg".to_string(),
        signed_url_ttl_secs: 900,
        max_upload_bytes: 16 * 1024 * 1024,
    }
}

pub fn test_state(
    staging_dir: &Path,
    storage: Arc<MemoryStorage>,
    transcoder: Arc<ScriptedTranscoder>,
) -> AppState {
    AppState::new(test_config(staging_dir), storage, transcoder)
}

pub fn staging_entries(root: &Path) -> usize {
    std::fs::read_dir(root).map(|d| d.count()).unwrap_or(0)
}
