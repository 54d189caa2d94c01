//! HTTP-facing error type

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use rref_core::{ErrorCategory, RrefError};
use thiserror::Error;

use crate::payload::ErrorResponse;

/// Errors returned by the HTTP handlers
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Decoding or reduction failed
    #[error("{0}")]
    Rref(RrefError),
    /// The endpoint exists but not for this method
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    /// The request body is over the configured limit
    #[error("Payload Too Large")]
    PayloadTooLarge,
}

impl From<RrefError> for ApiError {
    fn from(err: RrefError) -> Self {
        ApiError::Rref(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Rref(err) => match err.category() {
                ErrorCategory::Client => StatusCode::BAD_REQUEST,
                ErrorCategory::Server => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
