use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub mod s3;
#[cfg(test)]
pub mod memory;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to upload {key}: {reason}")]
    UploadFailed { key: String, reason: String },

    #[error("failed to probe {key}: {reason}")]
    ProbeFailed { key: String, reason: String },

    #[error("failed to sign url for {key}: {reason}")]
    SigningFailed { key: String, reason: String },
}

/// Key-addressed object store holding both variants of every video.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Writes `body` at `key`, overwriting whatever was there.
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StorageError>;

    /// Metadata-only existence check.
    async fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// Time-limited GET url for `key`. Callers only ask for keys they saw exist.
    async fn signed_get(&self, key: &str, ttl: Duration) -> Result<String, StorageError>;
}
