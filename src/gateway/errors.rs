//! # Gateway Errors
//!
//! Every failed gateway call is classified into one [`ErrorKind`] so that
//! callers can tell "zero results" apart from "request failed".

use std::fmt;

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::ErrorResponse;

use super::transport::{ApiResponse, TransportError};

/// Classification of a failed gateway call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request never produced a response (connection refused, timeout, ...)
    Network,
    /// Backend answered 404
    NotFound,
    /// Request rejected as invalid, locally or by the backend (4xx)
    Validation,
    /// Backend failed (5xx)
    Server,
    /// Response body did not match the expected shape
    Decode,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Validation => "validation",
            ErrorKind::Server => "server",
            ErrorKind::Decode => "decode",
        }
    }

    fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::NOT_FOUND {
            ErrorKind::NotFound
        } else if status.is_client_error() {
            ErrorKind::Validation
        } else {
            ErrorKind::Server
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified gateway failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatewayError {
    kind: ErrorKind,
    status: Option<u16>,
    message: String,
}

impl GatewayError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
        }
    }

    /// Build from a non-success backend response
    pub fn from_response(response: &ApiResponse) -> Self {
        let status = response.status;
        let detail = serde_json::from_slice::<ErrorResponse>(&response.body)
            .map(|body| body.error)
            .unwrap_or_else(|_| String::from_utf8_lossy(&response.body).trim().to_string());

        let mut message = format!(
            "HTTP {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Status")
        );
        if !detail.is_empty() {
            message.push_str(": ");
            message.push_str(&detail);
        }

        Self {
            kind: ErrorKind::from_status(status),
            status: Some(status.as_u16()),
            message,
        }
    }

    /// Build from a body that failed to deserialize
    pub fn decode(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Decode, format!("Malformed response body: {}", err))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status, when the backend answered at all
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TransportError> for GatewayError {
    fn from(err: TransportError) -> Self {
        let kind = match err {
            TransportError::Network(_) => ErrorKind::Network,
            TransportError::InvalidRequest(_) => ErrorKind::Validation,
        };
        Self::new(kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: StatusCode, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_kind_from_status() {
        assert_eq!(ErrorKind::from_status(StatusCode::NOT_FOUND), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(StatusCode::BAD_REQUEST), ErrorKind::Validation);
        assert_eq!(ErrorKind::from_status(StatusCode::CONFLICT), ErrorKind::Validation);
        assert_eq!(
            ErrorKind::from_status(StatusCode::SERVICE_UNAVAILABLE),
            ErrorKind::Server
        );
    }

    #[test]
    fn test_from_response_uses_error_body() {
        let err = GatewayError::from_response(&response(
            StatusCode::NOT_FOUND,
            r#"{"error":"Hero 99 not found","code":404}"#,
        ));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.message(), "HTTP 404 Not Found: Hero 99 not found");
    }

    #[test]
    fn test_from_response_plain_text_body() {
        let err = GatewayError::from_response(&response(StatusCode::BAD_GATEWAY, "upstream down\n"));
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway: upstream down");
    }

    #[test]
    fn test_from_response_empty_body() {
        let err = GatewayError::from_response(&response(StatusCode::INTERNAL_SERVER_ERROR, ""));
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error");
    }

    #[test]
    fn test_transport_errors() {
        let err = GatewayError::from(TransportError::Network("connection refused".to_string()));
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.status(), None);
    }
}
