//! Image search against the Unsplash photo search API
//!
//! The [`ImageSearchClient`] trait is the seam the incremental search
//! controller fetches through; [`UnsplashClient`] is the HTTP implementation.
//! Tests substitute scripted clients.

mod client;
mod errors;
mod types;

// Re-export public types
pub use client::{ImageSearchClient, UnsplashClient};
pub use errors::{FailureKind, SearchError, SearchResult};
pub use types::{ImageResult, PhotoData, PhotoUrls, SearchPage, SearchRequest, SearchResponse};
