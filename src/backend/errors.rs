//! # Backend API Errors
//!
//! Error types for the in-memory hero backend.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hero::{HeroError, HeroId};
use crate::observability::{log_event_with_fields, Event};

/// Result type for backend operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Backend API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No hero with the given id
    #[error("Hero {0} not found")]
    NotFound(HeroId),

    /// Invalid request body
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Model validation failure
    #[error("{0}")]
    Hero(#[from] HeroError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Hero(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        log_event_with_fields(
            Event::ApiRequestRejected,
            &[("status", status.as_str()), ("reason", self.to_string().as_str())],
        );
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
