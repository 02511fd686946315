//! Error handling module for the site backend.
//!
//! Maps failures to HTTP status codes and the `{ "error": ... }` body the front end reads.
//! Upstream detail is logged, never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::notion::NotionError;

/// Fixed client-facing messages.
pub mod messages {
    pub const MISSING_SLUG: &str = "Missing slug parameter";
    pub const INVALID_QUERY: &str = "Invalid query string";
    pub const POST_NOT_FOUND: &str = "Post not found";
    pub const POSTS_FAILED: &str = "Failed to fetch posts";
    pub const POST_FAILED: &str = "Failed to fetch post";
    pub const COUNTRIES_FAILED: &str = "Failed to fetch countries";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Invalid or missing request input
    BadRequest(String),
    /// Resource not found
    NotFound(String),
    /// Upstream call or projection failed
    Upstream {
        message: &'static str,
        source: NotionError,
    },
}

impl AppError {
    /// Wrap an upstream failure with the fixed message shown to clients.
    pub fn upstream(message: &'static str) -> impl FnOnce(NotionError) -> AppError {
        move |source| AppError::Upstream { message, source }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message.
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Upstream { message, .. } => message.to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Upstream { message, source } => write!(f, "{}: {}", message, source),
            _ => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Upstream { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Upstream { message, source } = &self {
            tracing::error!("{}: {}", message, source);
        }

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::BadRequest(messages::MISSING_SLUG.to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound(messages::POST_NOT_FOUND.to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::upstream(messages::POSTS_FAILED)(NotionError::Transport("boom".into()))
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_detail_not_in_message() {
        let err = AppError::upstream(messages::COUNTRIES_FAILED)(NotionError::Status {
            status: 401,
            message: "unauthorized: API token is invalid.".into(),
        });

        assert_eq!(err.message(), "Failed to fetch countries");
        assert!(err.to_string().contains("API token is invalid"));
    }
}
