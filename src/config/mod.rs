//! Configuration module for the image search client
//!
//! This module provides the `SearchConfig` struct and its type-safe builder
//! for configuring image search with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod env;
pub mod errors;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{SearchConfigBuilder, WithClientId};
pub use errors::{ConfigError, ConfigResult};
pub use types::SearchConfig;
