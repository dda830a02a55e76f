//! # Client Error Types
//!
//! Unified error handling for Affinity API operations.

use serde_json::Value;
use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error taxonomy for Affinity API operations.
///
/// The `Display` strings double as the user-visible `error` message the MCP
/// tool layer surfaces, so their wording is part of the tool contract.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No bearer credential configured. Checked per call, before any
    /// network I/O.
    #[error("AFFINITY_API_KEY environment variable is not set")]
    MissingApiKey,

    /// Input rejected before a request was built (range or enum check).
    #[error("{0}")]
    InvalidInput(String),

    /// Upstream answered 400.
    #[error("Bad request")]
    BadRequest {
        /// Parsed JSON error body returned by the upstream API.
        details: Value,
    },

    /// Upstream answered 403.
    #[error("Forbidden - check permissions")]
    Forbidden {
        /// Parsed JSON error body returned by the upstream API.
        details: Value,
    },

    /// Upstream answered something other than 200/400/403.
    #[error("API request failed with status {status}")]
    ApiError {
        status: u16,
        /// Raw response text; not assumed to be JSON.
        body: String,
    },

    /// Network-level failure: timeout, DNS, connection reset.
    #[error("Request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl ClientError {
    /// Create a validation error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an API error from an unexpected HTTP response
    pub fn api_error(status: u16, body: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            body: body.into(),
        }
    }

    /// Structured diagnostic payload accompanying the error message, if any.
    #[must_use]
    pub fn details(&self) -> Option<Value> {
        match self {
            ClientError::BadRequest { details } | ClientError::Forbidden { details } => {
                Some(details.clone())
            }
            ClientError::ApiError { body, .. } => Some(Value::String(body.clone())),
            _ => None,
        }
    }

    /// Check if error is recoverable (worth retrying)
    ///
    /// This client never retries on its own; the classification is for
    /// callers that layer their own policy on top.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::HttpError(e) => e.is_timeout() || e.is_connect(),
            ClientError::ApiError { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
