use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::env::{self, EnvKey};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_STAGING_DIR: &str = "temp";
const DEFAULT_FFMPEG: &str = "ffmpeg";
// Matches the presign default of the AWS SDKs.
const DEFAULT_SIGNED_URL_TTL_SECS: u64 = 900;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 512 * 1024 * 1024;

#[derive(Debug, Error)]
#[error("missing required environment variable {0}")]
pub struct ConfigError(pub &'static str);

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub s3_bucket: String,
    pub s3_endpoint: Option<String>,
    pub aws_region: String,
    pub aws_access_key: String,
    pub aws_secret_key: String,
    pub staging_dir: PathBuf,
    pub ffmpeg_path: String,
    pub signed_url_ttl_secs: u64,
    pub max_upload_bytes: usize,
}

impl AppConfig {
    /// Reads the process environment once. Called at startup only.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, DEFAULT_PORT),
            s3_bucket: required(EnvKey::S3Bucket)?,
            s3_endpoint: env::get_optional(EnvKey::S3Endpoint),
            aws_region: env::get_or(EnvKey::AwsRegion, DEFAULT_REGION),
            aws_access_key: required(EnvKey::AwsAccessKey)?,
            aws_secret_key: required(EnvKey::AwsSecretKey)?,
            staging_dir: PathBuf::from(env::get_or(EnvKey::StagingDir, DEFAULT_STAGING_DIR)),
            ffmpeg_path: env::get_or(EnvKey::FfmpegPath, DEFAULT_FFMPEG),
            signed_url_ttl_secs: env::get_parsed(
                EnvKey::SignedUrlTtlSecs,
                DEFAULT_SIGNED_URL_TTL_SECS,
            ),
            max_upload_bytes: env::get_parsed(EnvKey::MaxUploadBytes, DEFAULT_MAX_UPLOAD_BYTES),
        })
    }

    pub fn signed_url_ttl(&self) -> Duration {
        Duration::from_secs(self.signed_url_ttl_secs)
    }
}

fn required(key: EnvKey) -> Result<String, ConfigError> {
    let name = key.as_str();
    env::get_optional(key).ok_or(ConfigError(name))
}
