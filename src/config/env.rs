//! Environment-driven configuration
//!
//! The binary reads its settings from the environment; everything except the
//! access key falls back to the builder defaults.

use std::env;
use std::str::FromStr;

use crate::utils::{ENV_ACCESS_KEY, ENV_API_URL, ENV_DEBOUNCE_MS, ENV_REQUEST_TIMEOUT_SECS};

use super::errors::{ConfigError, ConfigResult};
use super::types::SearchConfig;

impl SearchConfig {
    /// Build a configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] when `UNSPLASH_ACCESS_KEY` is
    /// unset, or a validation error for malformed overrides.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    ///
    /// Split out from [`SearchConfig::from_env`] so tests do not have to
    /// mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = lookup(ENV_ACCESS_KEY)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingCredential(ENV_ACCESS_KEY))?;

        let mut builder = SearchConfig::builder().client_id(client_id);

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            builder = builder.api_base(url);
        }
        if let Some(raw) = lookup(ENV_DEBOUNCE_MS) {
            builder = builder.debounce_ms(parse_number(ENV_DEBOUNCE_MS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            builder = builder.request_timeout_secs(parse_number(ENV_REQUEST_TIMEOUT_SECS, &raw)?);
        }

        builder.build()
    }
}

fn parse_number<T>(field: &'static str, raw: &str) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidValue {
            field,
            message: format!("'{raw}': {e}"),
        })
}
