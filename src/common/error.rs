use axum::http::StatusCode;
use thiserror::Error;

use crate::infrastructure::storage::StorageError;
use crate::infrastructure::transcoder::TranscodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    TranscodeFailed,
    StorageFailed,
    NotFound,
    PayloadTooLarge,
    Internal,
}

impl ErrorKind {
    /// The only place a failure is turned into an HTTP status.
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorKind::TranscodeFailed | ErrorKind::StorageFailed | ErrorKind::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the error text is safe and useful to show the caller as-is.
    pub fn is_client_facing(self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidInput | ErrorKind::NotFound | ErrorKind::PayloadTooLarge
        )
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("transcode failed: {0}")]
    TranscodeFailed(#[from] TranscodeError),

    #[error("storage failed: {0}")]
    StorageFailed(#[from] StorageError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("staging failed: {0}")]
    Staging(#[from] std::io::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidInput(_) => ErrorKind::InvalidInput,
            AppError::TranscodeFailed(_) => ErrorKind::TranscodeFailed,
            AppError::StorageFailed(_) => ErrorKind::StorageFailed,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::PayloadTooLarge(_) => ErrorKind::PayloadTooLarge,
            AppError::Staging(_) => ErrorKind::Internal,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::InvalidInput(message.into())
    }
}
