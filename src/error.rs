//! Application error type and its HTTP mapping.
//!
//! Service operations return [`AppError`]. The HTTP layer turns it into a JSON
//! body of the form `{"error": {"code": "...", "message": "..."}}`. Messages
//! are fixed per kind; the underlying cause of internal failures only goes to
//! the server log.

use std::error::Error as StdError;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::url_validator::UrlValidationError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable code and human-readable message of a failed request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("URL cannot be empty")]
    EmptyUrl,

    #[error("invalid URL: {0}")]
    InvalidUrl(#[source] UrlValidationError),

    #[error("link not found")]
    LinkNotFound,

    /// No route matches the request path.
    #[error("no route for this path")]
    RouteNotFound,

    #[error("method not allowed for this path")]
    MethodNotAllowed,

    #[error("failed to generate a unique code after {attempts} attempts")]
    CodeGenerationExhausted { attempts: usize },

    /// Request could not be decoded (malformed JSON, wrong content type, ...).
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl AppError {
    /// Wraps an unexpected failure with the operation it interrupted.
    pub fn internal(
        context: &'static str,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self::Internal {
            context,
            source: source.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyUrl | Self::InvalidUrl(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::LinkNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::CodeGenerationExhausted { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing code and message. Never includes internal detail.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message) = match self {
            Self::EmptyUrl => ("empty_url", "url is required"),
            Self::InvalidUrl(_) => ("invalid_url", "invalid url format"),
            Self::BadRequest(_) => ("bad_request", "invalid request body"),
            Self::LinkNotFound => ("not_found", "link not found"),
            Self::RouteNotFound => ("not_found", "not found"),
            Self::MethodNotAllowed => ("method_not_allowed", "method not allowed"),
            Self::CodeGenerationExhausted { .. } | Self::Internal { .. } => {
                ("internal_error", "internal server error")
            }
        };

        ErrorInfo { code, message }
    }
}

impl From<UrlValidationError> for AppError {
    fn from(err: UrlValidationError) -> Self {
        match err {
            UrlValidationError::Empty => Self::EmptyUrl,
            other => Self::InvalidUrl(other),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
