//! Wire and domain types for image search

use serde::{Deserialize, Serialize};

/// One photo in an Unsplash search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoData {
    pub urls: PhotoUrls,

    /// Unsplash sends `null` for photos without a description
    #[serde(default)]
    pub alt_description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub regular: String,
}

/// Body of a successful `GET /search/photos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    pub total_pages: u32,
    #[serde(default)]
    pub results: Vec<PhotoData>,
}

/// A selectable image result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    pub image_url: String,
    /// May be empty
    pub alt_text: String,
}

impl ImageResult {
    #[must_use]
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}

impl From<PhotoData> for ImageResult {
    fn from(photo: PhotoData) -> Self {
        Self {
            image_url: photo.urls.regular,
            alt_text: photo.alt_description.unwrap_or_default(),
        }
    }
}

/// One page of results, as handed to the search controller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    pub total: u64,
    pub total_pages: u32,
    pub results: Vec<ImageResult>,
}

impl SearchPage {
    #[must_use]
    pub fn new(total_pages: u32, results: Vec<ImageResult>) -> Self {
        Self {
            total: results.len() as u64,
            total_pages,
            results,
        }
    }
}

impl From<SearchResponse> for SearchPage {
    fn from(response: SearchResponse) -> Self {
        Self {
            total: response.total,
            total_pages: response.total_pages,
            results: response.results.into_iter().map(ImageResult::from).collect(),
        }
    }
}

/// Parameters of a single page fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// 1-based
    pub page: u32,
    pub per_page: u32,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>, page: u32, per_page: u32) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
            per_page,
        }
    }
}
