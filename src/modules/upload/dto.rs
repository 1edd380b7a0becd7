use std::fmt;

use bytes::Bytes;
use serde::Serialize;
use utoipa::ToSchema;

/// What the HTTP layer extracted from the multipart body.
#[derive(Debug, Default)]
pub struct UploadRequest {
    pub video: Option<VideoFile>,
}

#[derive(Debug, Clone)]
pub struct VideoFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Percentage of the original size saved by compression. Negative when the
/// compressed output came out larger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeReduction {
    pub original_bytes: u64,
    pub compressed_bytes: u64,
}

impl SizeReduction {
    pub fn percent(&self) -> f64 {
        (self.original_bytes as f64 - self.compressed_bytes as f64) / self.original_bytes as f64
            * 100.0
    }
}

impl fmt::Display for SizeReduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.percent())
    }
}

#[derive(Debug)]
pub struct IngestOutcome {
    pub reduction: SizeReduction,
    pub original_key: String,
    pub compressed_key: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Video uploaded and compressed")]
    pub message: String,
    #[schema(example = "50.00%")]
    pub reduced: String,
}

impl From<&IngestOutcome> for UploadResponse {
    fn from(outcome: &IngestOutcome) -> Self {
        Self {
            success: true,
            message: "Video uploaded and compressed".to_string(),
            reduced: outcome.reduction.to_string(),
        }
    }
}

/// Multipart schema for the API docs.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct VideoUploadForm {
    /// The video file to upload and compress.
    #[schema(value_type = String, format = Binary)]
    pub video: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_formats_two_decimals() {
        let r = SizeReduction {
            original_bytes: 10_000_000,
            compressed_bytes: 6_000_000,
        };
        assert_eq!(r.to_string(), "40.00%");

        let r = SizeReduction {
            original_bytes: 3,
            compressed_bytes: 2,
        };
        assert_eq!(r.to_string(), "33.33%");
    }

    #[test]
    fn test_inflation_is_negative_not_an_error() {
        let r = SizeReduction {
            original_bytes: 100,
            compressed_bytes: 125,
        };
        assert_eq!(r.to_string(), "-25.00%");
    }
}
