//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! 内部詳細は`Display`でログにのみ出力し、クライアントには
//! `external_message()`の固定文言だけを返す。

use axum::http::StatusCode;
use thiserror::Error;

/// URL monitor error type
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Caller input failed validation (e.g. missing url)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Identifier is not well-formed for the store's id scheme
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Datastore connection or operation failure
    #[error("Database error: {0}")]
    Database(String),

    /// Request body exceeded the size limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Outbound HTTP error while probing (log-only, never sent to API clients)
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Outbound request exceeded its timeout (log-only, never sent to API clients)
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MonitorError {
    /// Returns a safe error message for external clients.
    ///
    /// Full details are available through `Display` and belong in server logs only.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "URL is required",
            Self::InvalidId(_) => "Invalid URL id",
            Self::NotFound(_) => "URL not found",
            Self::PayloadTooLarge(_) => "Request body too large",
            Self::Database(_) => "Datastore unavailable",
            Self::Http(_) | Self::Timeout(_) | Self::Config(_) | Self::Internal(_) => {
                "Internal server error"
            }
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Http(_) | Self::Timeout(_) | Self::Config(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<sqlx::Error> for MonitorError {
    fn from(err: sqlx::Error) -> Self {
        MonitorError::Database(err.to_string())
    }
}

impl From<reqwest::Error> for MonitorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MonitorError::Timeout(err.to_string())
        } else {
            MonitorError::Http(err.to_string())
        }
    }
}

/// Result type alias
pub type MonitorResult<T> = Result<T, MonitorError>;
