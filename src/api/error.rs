use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::advisor::AdvisorError;

/// Message returned for any failure the client cannot act on
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An internal server error occurred. Please check the data and try again.";

/// Message returned when the roof photo cannot be used
pub const IMAGE_ERROR_MESSAGE: &str = "Could not process the uploaded image.";

/// API error types that can be returned from handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Error response that gets serialized to JSON
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_)
            | ApiError::ValidationError(_)
            | ApiError::ImageProcessing(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client
    fn public_message(&self) -> String {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::ValidationError(msg)
            | ApiError::PayloadTooLarge(msg) => msg.clone(),
            ApiError::ImageProcessing(_) => IMAGE_ERROR_MESSAGE.to_string(),
            ApiError::InternalError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::InternalError(_) => tracing::error!(error = %self, "API error occurred"),
            ApiError::ImageProcessing(_) => tracing::warn!(error = %self, "Roof photo rejected"),
            _ => tracing::debug!(error = %self, "Client error"),
        }

        let error_response = ErrorResponse {
            error: self.public_message(),
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<AdvisorError> for ApiError {
    fn from(error: AdvisorError) -> Self {
        match error {
            AdvisorError::Roof(e) => ApiError::ImageProcessing(e.to_string()),
            AdvisorError::Location(e) => ApiError::ValidationError(e.to_string()),
            AdvisorError::Analysis(e) => ApiError::ValidationError(e.to_string()),
            AdvisorError::Task(e) => ApiError::InternalError(e.to_string()),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge("Upload exceeds the size limit".to_string());
        }
        ApiError::BadRequest(format!("Malformed form data: {}", error.body_text()))
    }
}
