//! Type-safe builder for `SearchConfig` using the typestate pattern
//!
//! The credential is the only required field; `build()` is not available
//! until it has been provided.

use std::marker::PhantomData;

use crate::utils::{
    DEFAULT_API_BASE, DEFAULT_DEBOUNCE_MS, DEFAULT_PER_PAGE, DEFAULT_REQUEST_TIMEOUT_SECS,
    MAX_PER_PAGE, USER_AGENT, parse_api_base,
};

use super::errors::{ConfigError, ConfigResult};
use super::types::SearchConfig;

// Type state for the builder
pub struct WithClientId;

pub struct SearchConfigBuilder<State = ()> {
    pub(crate) client_id: Option<String>,
    pub(crate) api_base: String,
    pub(crate) per_page: u32,
    pub(crate) debounce_ms: u64,
    pub(crate) request_timeout_secs: u64,
    pub(crate) user_agent: String,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for SearchConfigBuilder<()> {
    fn default() -> Self {
        Self {
            client_id: None,
            api_base: DEFAULT_API_BASE.to_string(),
            per_page: DEFAULT_PER_PAGE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl SearchConfig {
    /// Create a builder for configuring a `SearchConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> SearchConfigBuilder<()> {
        SearchConfigBuilder::default()
    }
}

impl SearchConfigBuilder<()> {
    pub fn client_id(self, client_id: impl Into<String>) -> SearchConfigBuilder<WithClientId> {
        SearchConfigBuilder {
            client_id: Some(client_id.into().trim().to_string()),
            api_base: self.api_base,
            per_page: self.per_page,
            debounce_ms: self.debounce_ms,
            request_timeout_secs: self.request_timeout_secs,
            user_agent: self.user_agent,
            _phantom: PhantomData,
        }
    }
}

// Build method only available once the credential is set
impl SearchConfigBuilder<WithClientId> {
    pub fn build(self) -> ConfigResult<SearchConfig> {
        let client_id = self
            .client_id
            .filter(|id| !id.is_empty())
            .ok_or(ConfigError::MissingCredential(crate::utils::ENV_ACCESS_KEY))?;

        let api_base = parse_api_base(&self.api_base).map_err(|e| ConfigError::InvalidApiBase {
            url: self.api_base.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(api_base.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiBase {
                url: self.api_base,
                reason: format!("unsupported scheme '{}'", api_base.scheme()),
            });
        }

        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(ConfigError::InvalidValue {
                field: "per_page",
                message: format!("must be between 1 and {MAX_PER_PAGE}, got {}", self.per_page),
            });
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(SearchConfig {
            client_id,
            api_base,
            per_page: self.per_page,
            debounce_ms: self.debounce_ms,
            request_timeout_secs: self.request_timeout_secs,
            user_agent: self.user_agent,
        })
    }
}
