//! Error types for configuration loading and validation

use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// No access key was supplied
    #[error("Unsplash access key is required (set {0})")]
    MissingCredential(&'static str),

    /// API base URL could not be parsed or is not http(s)
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidApiBase { url: String, reason: String },

    /// A numeric setting is outside its allowed range
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
}
