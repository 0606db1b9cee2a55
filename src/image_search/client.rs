//! HTTP client for the Unsplash photo search endpoint

use std::future::Future;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::errors::{SearchError, SearchResult};
use super::types::{SearchPage, SearchRequest, SearchResponse};
use crate::config::SearchConfig;
use crate::utils::{MAX_QUERY_LENGTH, SEARCH_PHOTOS_PATH};

/// Longest error body kept in [`SearchError::Status`]
const MAX_ERROR_BODY: usize = 200;

/// Source of paginated image results
///
/// The returned future must be `Send` because the controller runs each fetch
/// on its own tokio task.
pub trait ImageSearchClient: Send + Sync + 'static {
    fn search(&self, request: SearchRequest) -> impl Future<Output = SearchResult<SearchPage>> + Send;
}

impl<C: ImageSearchClient> ImageSearchClient for Arc<C> {
    fn search(&self, request: SearchRequest) -> impl Future<Output = SearchResult<SearchPage>> + Send {
        self.as_ref().search(request)
    }
}

/// `reqwest`-backed client for `GET {api_base}/search/photos`
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    http: Client,
    config: SearchConfig,
}

impl UnsplashClient {
    /// Build a client with the configured timeout and user agent
    ///
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialised.
    pub fn new(config: SearchConfig) -> SearchResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Full request URL for a page fetch, with the query URL-escaped
    pub fn search_url(&self, request: &SearchRequest) -> SearchResult<Url> {
        let mut url = self
            .config
            .api_base()
            .join(SEARCH_PHOTOS_PATH)
            .map_err(|e| SearchError::Request(format!("Failed to build search URL: {e}")))?;

        url.query_pairs_mut()
            .append_pair("page", &request.page.to_string())
            .append_pair("per_page", &request.per_page.to_string())
            .append_pair("query", &request.query)
            .append_pair("client_id", self.config.client_id());

        Ok(url)
    }
}

/// Validate a query before spending a request on it
fn validate_query(query: &str) -> SearchResult<()> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    let length = trimmed.chars().count();
    if length > MAX_QUERY_LENGTH {
        return Err(SearchError::QueryTooLong {
            length,
            max: MAX_QUERY_LENGTH,
        });
    }
    Ok(())
}

/// Map a non-success status to a classified error
fn classify_status(status: StatusCode, body: String) -> SearchError {
    match status.as_u16() {
        429 => SearchError::RateLimited,
        // Unsplash reports an exhausted quota as 403 with a plain-text body
        403 if body.contains("Rate Limit Exceeded") => SearchError::RateLimited,
        code @ (401 | 403) => SearchError::Unauthorized(code),
        code => SearchError::Status {
            status: code,
            body: body.chars().take(MAX_ERROR_BODY).collect(),
        },
    }
}

impl ImageSearchClient for UnsplashClient {
    async fn search(&self, request: SearchRequest) -> SearchResult<SearchPage> {
        validate_query(&request.query)?;
        let url = self.search_url(&request)?;

        debug!(query = %request.query, page = request.page, "Requesting image search page");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = classify_status(status, body);
            warn!(
                query = %request.query,
                page = request.page,
                status = status.as_u16(),
                error = %error,
                "Image search returned an error status"
            );
            return Err(error);
        }

        let bytes = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&bytes)?;
        let page = SearchPage::from(parsed);

        debug!(
            query = %request.query,
            page = request.page,
            results = page.results.len(),
            total_pages = page.total_pages,
            "Image search page received"
        );

        Ok(page)
    }
}
