//! Core configuration types for image search
//!
//! This module contains the `SearchConfig` struct that defines the parameters
//! shared by the image search client and the incremental search controller.

use serde::Serialize;
use url::Url;

/// Main configuration struct for image search
///
/// Serializable for diagnostics (the credential is omitted); construct it
/// through [`SearchConfig::builder`] or [`SearchConfig::from_env`].
#[derive(Debug, Clone, Serialize)]
pub struct SearchConfig {
    /// Static client credential sent as the `client_id` query parameter.
    ///
    /// **INVARIANT:** Never empty (checked in the builder).
    #[serde(skip_serializing)]
    pub(crate) client_id: String,

    /// API base URL, always ending in `/`
    pub(crate) api_base: Url,

    /// Results requested per page.
    /// Default: 15, Range: 1-30
    pub(crate) per_page: u32,

    /// Quiet interval in milliseconds before typed text is committed.
    /// Default: 500
    pub(crate) debounce_ms: u64,

    /// Timeout in seconds for a single search request
    ///
    /// A request that exceeds it is reported as a timeout failure and can be
    /// retried from the picker.
    ///
    /// Default: 10 seconds
    pub(crate) request_timeout_secs: u64,

    pub(crate) user_agent: String,
}
