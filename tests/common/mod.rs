//! Test utilities shared by the integration tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use class_catalog::config::SearchConfig;
use class_catalog::image_search::{
    ImageResult, ImageSearchClient, SearchPage, SearchRequest, SearchResult,
};

/// Canned answer for one `(query, page)` pair
#[derive(Clone)]
struct Reply {
    delay: Duration,
    result: SearchResult<SearchPage>,
}

/// Image search client answering from a script and recording every request
///
/// Unscripted requests succeed with an empty page.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<HashMap<(String, u32), Reply>>,
    requests: Mutex<Vec<SearchRequest>>,
}

#[allow(dead_code)]
impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, query: &str, page: u32, result: SearchResult<SearchPage>) {
        self.respond_after(query, page, Duration::ZERO, result);
    }

    pub fn respond_after(
        &self,
        query: &str,
        page: u32,
        delay: Duration,
        result: SearchResult<SearchPage>,
    ) {
        self.replies
            .lock()
            .unwrap()
            .insert((query.to_string(), page), Reply { delay, result });
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested_pages(&self) -> Vec<(String, u32)> {
        self.requests()
            .into_iter()
            .map(|r| (r.query, r.page))
            .collect()
    }
}

impl ImageSearchClient for ScriptedClient {
    async fn search(&self, request: SearchRequest) -> SearchResult<SearchPage> {
        self.requests.lock().unwrap().push(request.clone());

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(&(request.query.clone(), request.page))
            .cloned();

        match reply {
            Some(reply) => {
                if !reply.delay.is_zero() {
                    tokio::time::sleep(reply.delay).await;
                }
                reply.result
            }
            None => Ok(SearchPage::default()),
        }
    }
}

/// Image result with a predictable URL
#[allow(dead_code)]
pub fn img(name: &str) -> ImageResult {
    ImageResult::new(format!("https://img/{name}"), format!("photo {name}"))
}

#[allow(dead_code)]
pub fn page(total_pages: u32, names: &[&str]) -> SearchPage {
    SearchPage::new(total_pages, names.iter().map(|n| img(n)).collect())
}

/// Config with the default 500 ms debounce and a dummy credential
#[allow(dead_code)]
pub fn test_config() -> SearchConfig {
    SearchConfig::builder()
        .client_id("test-access-key")
        .build()
        .unwrap()
}
