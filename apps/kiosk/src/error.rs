//! # Kiosk Errors
//!
//! Two error types live here:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  KioskError   startup and stream failures (config, catalog, stdio)     │
//! │               → logged, process exits                                  │
//! │                                                                         │
//! │  ApiError     a single command failed                                   │
//! │               → serialized into the response, loop keeps going          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use serde::Serialize;
use summer_core::CoreError;
use thiserror::Error;

/// Failures that stop the kiosk.
#[derive(Debug, Error)]
pub enum KioskError {
    #[error("failed to read menu catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("menu catalog {path} is not valid JSON: {source}")]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned from a command.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Menu item not found: matcha"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item, variation or add-on id not in the menu
    NotFound,

    /// Malformed command or invalid input
    ValidationError,

    /// Item is flagged unavailable
    ItemUnavailable,

    /// Internal error
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ItemNotFound(_)
            | CoreError::VariationNotFound { .. }
            | CoreError::AddOnNotFound { .. } => ErrorCode::NotFound,
            CoreError::ItemUnavailable { .. } => ErrorCode::ItemUnavailable,
            CoreError::Validation(_) | CoreError::QuantityTooLarge { .. } => {
                ErrorCode::ValidationError
            }
        };
        let message = match err {
            CoreError::Validation(e) => e.to_string(),
            other => other.to_string(),
        };
        ApiError::new(code, message)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Failed to serialize response: {}", err);
        ApiError::internal("Failed to serialize response")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
