//! Paginated search state owned by the controller

use serde::{Deserialize, Serialize};

use crate::image_search::{FailureKind, ImageResult, SearchError};

/// Why the last fetch failed, kept until the next request or reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFailure {
    pub kind: FailureKind,
    pub message: String,
    /// Whether retrying the same page may succeed
    pub retryable: bool,
}

impl From<&SearchError> for SearchFailure {
    fn from(error: &SearchError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
            retryable: error.is_transient(),
        }
    }
}

/// Coarse phase of a search, derived from [`SearchState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No committed query
    Idle,
    /// Fetching, or more pages remain
    Searching,
    /// Every page for the query has been loaded
    Exhausted,
    /// The last fetch failed
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Committed (debounced) query; empty means no search is active
    pub query: String,
    /// 1-based index of the current page
    pub page: u32,
    /// Total pages from the last successful response; 0 before any
    /// response and 1 after a reset
    pub total_pages: u32,
    /// Accumulated results, earlier pages first
    pub results: Vec<ImageResult>,
    pub is_loading: bool,
    pub last_error: Option<SearchFailure>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_pages: 0,
            results: Vec::new(),
            is_loading: false,
            last_error: None,
        }
    }
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State right after a reset to `query`
    #[must_use]
    pub fn reset(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            total_pages: 1,
            results: Vec::new(),
            is_loading: false,
            last_error: None,
        }
    }

    /// More pages exist beyond the current one
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// A load-more request would be honoured right now
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.has_more() && !self.is_loading && self.last_error.is_none()
    }

    /// A retry request would be honoured right now
    ///
    /// Only failures marked retryable qualify; a rejected key or invalid
    /// query fails the same way again.
    #[must_use]
    pub fn can_retry(&self) -> bool {
        self.last_error.as_ref().is_some_and(|f| f.retryable)
            && !self.is_loading
            && !self.query.is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        if self.query.is_empty() {
            SearchPhase::Idle
        } else if self.last_error.is_some() {
            SearchPhase::Failed
        } else if self.is_loading || self.has_more() {
            SearchPhase::Searching
        } else {
            SearchPhase::Exhausted
        }
    }
}
