//! Shared configuration constants for the class catalog
//!
//! Default values used by the configuration builder and the image search
//! client, kept in one place to avoid magic numbers.

/// Unsplash REST API base URL
pub const DEFAULT_API_BASE: &str = "https://api.unsplash.com";

/// Path of the photo search endpoint, relative to the API base
pub const SEARCH_PHOTOS_PATH: &str = "search/photos";

/// Results requested per page
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Largest `per_page` the Unsplash search endpoint accepts
pub const MAX_PER_PAGE: u32 = 30;

/// Quiet interval before typed text becomes the committed query
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Per-request timeout for image search calls
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Upper bound on a committed query, in characters
pub const MAX_QUERY_LENGTH: usize = 500;

/// User agent sent with every API request
pub const USER_AGENT: &str = concat!("class-catalog/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the Unsplash access key
pub const ENV_ACCESS_KEY: &str = "UNSPLASH_ACCESS_KEY";

/// Environment variable overriding the API base URL
pub const ENV_API_URL: &str = "UNSPLASH_API_URL";

/// Environment variable overriding the debounce interval (milliseconds)
pub const ENV_DEBOUNCE_MS: &str = "CATALOG_DEBOUNCE_MS";

/// Environment variable overriding the request timeout (seconds)
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "CATALOG_REQUEST_TIMEOUT_SECS";
