use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::common::error::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

pub struct ApiSuccess<T>(pub T, pub StatusCode);

impl<T> IntoResponse for ApiSuccess<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let (body, status) = (self.0, self.1);
        (status, Json(body)).into_response()
    }
}

/// Boundary wrapper: the error plus the message a route shows for server faults.
pub struct ApiError {
    pub error: AppError,
    pub fallback: &'static str,
}

impl ApiError {
    pub fn new(error: AppError, fallback: &'static str) -> Self {
        Self { error, fallback }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.error.kind();
        let status = kind.status_code();

        let message = if kind.is_client_facing() {
            warn!(?kind, error = %self.error, "Request rejected");
            self.error.to_string()
        } else {
            error!(?kind, error = %self.error, "Request failed");
            self.fallback.to_string()
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
