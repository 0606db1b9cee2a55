//! Error types for image search requests
//!
//! Every failure at the fetch boundary is classified so the picker can show
//! what went wrong and offer a retry where one makes sense.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for image search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Error types for image search operations
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// Query was empty or whitespace-only
    #[error("Search query cannot be empty or whitespace-only")]
    EmptyQuery,

    /// Query exceeds the accepted length
    #[error("Search query is too long ({length} characters, maximum {max})")]
    QueryTooLong { length: usize, max: usize },

    /// Transport-level failure (DNS, connect, TLS, reset)
    #[error("Image search request failed: {0}")]
    Request(String),

    /// Request exceeded the configured timeout
    #[error("Image search request timed out")]
    Timeout,

    /// Access key rejected
    #[error("Unsplash rejected the access key (HTTP {0})")]
    Unauthorized(u16),

    /// Hourly request quota exhausted
    #[error("Unsplash rate limit exceeded")]
    RateLimited,

    /// Any other non-success status
    #[error("Image search returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not the expected JSON shape
    #[error("Failed to decode image search response: {0}")]
    Decode(String),
}

/// Coarse classification of a [`SearchError`], exposed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidQuery,
    Network,
    Timeout,
    Unauthorized,
    RateLimited,
    Server,
    Client,
    Decode,
}

impl SearchError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            SearchError::EmptyQuery | SearchError::QueryTooLong { .. } => FailureKind::InvalidQuery,
            SearchError::Request(_) => FailureKind::Network,
            SearchError::Timeout => FailureKind::Timeout,
            SearchError::Unauthorized(_) => FailureKind::Unauthorized,
            SearchError::RateLimited => FailureKind::RateLimited,
            SearchError::Status { status, .. } if *status >= 500 => FailureKind::Server,
            SearchError::Status { .. } => FailureKind::Client,
            SearchError::Decode(_) => FailureKind::Decode,
        }
    }

    /// Check if the failure is transient and a retry may succeed
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self.kind(),
            FailureKind::Network | FailureKind::Timeout | FailureKind::RateLimited | FailureKind::Server
        )
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SearchError::Timeout
        } else if error.is_decode() {
            SearchError::Decode(error.to_string())
        } else {
            SearchError::Request(error.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(error: serde_json::Error) -> Self {
        SearchError::Decode(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_transient_client_errors_are_not() {
        let server = SearchError::Status {
            status: 503,
            body: "unavailable".into(),
        };
        assert_eq!(server.kind(), FailureKind::Server);
        assert!(server.is_transient());

        let client = SearchError::Status {
            status: 400,
            body: "bad".into(),
        };
        assert_eq!(client.kind(), FailureKind::Client);
        assert!(!client.is_transient());

        assert!(SearchError::Timeout.is_transient());
        assert!(SearchError::RateLimited.is_transient());
        assert!(!SearchError::Unauthorized(401).is_transient());
        assert!(!SearchError::EmptyQuery.is_transient());
    }
}
