//! Error types for the Lightstep API client
//!
//! Provides structured error types for all API operations.

use thiserror::Error;

/// Sentinel status code reported when the request failed before any
/// response was received.
pub const UNKNOWN_STATUS_CODE: i32 = -1;

/// Errors that can occur when interacting with the Lightstep API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed before a response was received (connection refused,
    /// timeout, TLS failure, body read aborted mid-stream)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// API returned a non-2xx response
    #[error("API error ({status} {status_text}): {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
        /// Raw response body, kept verbatim for diagnostics
        body: String,
    },

    /// Response was received but its body could not be decoded
    #[error("failed to decode response (HTTP {status}): {message}")]
    Decode {
        /// HTTP status code of the response that failed to decode
        status: u16,
        /// Decoder diagnostic
        message: String,
        /// Raw response body
        body: String,
    },
}

impl ApiError {
    /// HTTP status code carried by this error, or [`UNKNOWN_STATUS_CODE`]
    /// if the connection failed before a response was received.
    ///
    /// Callers use this to treat specific statuses as success, e.g. a 204
    /// on delete or a 404 on a read of an already-removed resource.
    pub fn status_code(&self) -> i32 {
        match self {
            ApiError::Transport(_) => UNKNOWN_STATUS_CODE,
            ApiError::Status { status, .. } => i32::from(*status),
            ApiError::Decode { status, .. } => i32::from(*status),
        }
    }

    /// Raw response body carried by this error, if a response was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Transport(_) => None,
            ApiError::Status { body, .. } => Some(body),
            ApiError::Decode { body, .. } => Some(body),
        }
    }
}

/// Result type alias for Lightstep API operations
pub type Result<T> = std::result::Result<T, ApiError>;
