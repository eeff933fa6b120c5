//! Error types for the dashboard gateway.
//!
//! [`ViewerError`] is what a request handler returns. It renders as a
//! small HTML page with the matching status code. [`GatewayError`] covers
//! the service lifecycle (config, bind, serve).

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use dashboard_catalog::ArtifactError;
use serde::Serialize;
use thiserror::Error;

use crate::http::page::render_error_page;

/// Request-level error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Unknown view, image or download
    NotFound,
    /// Artifact name failed validation
    InvalidName,
    /// Request exceeded its deadline
    Timeout,
    /// Anything else
    Internal,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidName => StatusCode::BAD_REQUEST,
            ErrorCode::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error returned to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerError {
    pub code: ErrorCode,
    pub message: String,
}

impl ViewerError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn unknown_view(slug: &str) -> Self {
        Self::new(ErrorCode::NotFound, format!("Vista desconocida: {}", slug))
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Timeout, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl std::fmt::Display for ViewerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.status().as_u16(), self.message)
    }
}

impl std::error::Error for ViewerError {}

impl From<ArtifactError> for ViewerError {
    fn from(err: ArtifactError) -> Self {
        match &err {
            ArtifactError::NotFound { .. } | ArtifactError::NotInCatalog(_) => {
                Self::new(ErrorCode::NotFound, err.to_string())
            }
            ArtifactError::InvalidArtifactName(_) => {
                Self::new(ErrorCode::InvalidName, err.to_string())
            }
            ArtifactError::Io { .. } => Self::internal(err.to_string()),
        }
    }
}

impl IntoResponse for ViewerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = render_error_page(status, &self.message);
        (
            status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

/// Service lifecycle errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Serving failed after bind
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::domain::config::ConfigError> for GatewayError {
    fn from(err: crate::domain::config::ConfigError) -> Self {
        GatewayError::Config(err.to_string())
    }
}
