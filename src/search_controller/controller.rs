//! Incremental search controller
//!
//! Turns raw keystroke-level query text into a debounced, paginated,
//! accumulating fetch sequence against an [`ImageSearchClient`].
//!
//! # Request sequencing
//!
//! Every fetch is tagged with a sequence number. Only the outcome of the most
//! recently issued fetch is applied; anything else is reported as
//! [`SearchEvent::StaleResponseDiscarded`]. A reset also aborts the in-flight
//! fetch task, so in practice stale outcomes only appear when a response
//! races the abort.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::image_search::{ImageSearchClient, SearchPage, SearchRequest, SearchResult};
use crate::runtime::{Debouncer, create_channel};

use super::reducer::{SearchAction, reduce};
use super::state::{SearchFailure, SearchState};

/// Receives the URL of the image the user picked
pub type SelectionHandler = Box<dyn FnMut(String) + Send + Sync + 'static>;

/// What [`SearchController::next_event`] applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The debounced query changed and the state was reset; a fetch for
    /// page 1 is in flight unless the query is empty
    QueryCommitted { query: String },
    /// A page arrived and was merged into the results
    PageLoaded {
        page: u32,
        total_pages: u32,
        received: usize,
    },
    /// The latest fetch failed; see `SearchState::last_error`
    FetchFailed { page: u32, failure: SearchFailure },
    /// An outcome for a superseded request arrived and was ignored
    StaleResponseDiscarded { seq: u64 },
}

struct InFlight {
    seq: u64,
    request: SearchRequest,
    handle: JoinHandle<()>,
}

struct FetchOutcome {
    seq: u64,
    result: SearchResult<SearchPage>,
}

pub struct SearchController<C: ImageSearchClient> {
    client: Arc<C>,
    per_page: u32,
    state: SearchState,
    raw_text: String,
    debouncer: Debouncer<String>,
    last_seq: u64,
    in_flight: Option<InFlight>,
    outcome_sender: mpsc::UnboundedSender<FetchOutcome>,
    outcome_receiver: mpsc::UnboundedReceiver<FetchOutcome>,
    on_select: SelectionHandler,
}

impl<C: ImageSearchClient> SearchController<C> {
    /// Create a controller in the initial idle state
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(client: C, config: &SearchConfig) -> Self {
        Self::with_client(Arc::new(client), config)
    }

    pub fn with_client(client: Arc<C>, config: &SearchConfig) -> Self {
        let (outcome_sender, outcome_receiver) = create_channel();
        Self {
            client,
            per_page: config.per_page(),
            state: SearchState::new(),
            raw_text: String::new(),
            debouncer: Debouncer::new(config.debounce_interval()),
            last_seq: 0,
            in_flight: None,
            outcome_sender,
            outcome_receiver,
            on_select: Box::new(|_| {}),
        }
    }

    /// Install the selection surface callback
    #[must_use]
    pub fn on_select<F>(mut self, handler: F) -> Self
    where
        F: FnMut(String) + Send + Sync + 'static,
    {
        self.on_select = Box::new(handler);
        self
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Text as typed, before debouncing
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Record a keystroke; the text is committed once input goes quiet
    pub fn on_query_text_change(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.raw_text.clone_from(&text);
        self.debouncer.push(text);
    }

    /// Fetch the next page, if one exists and nothing is in flight
    ///
    /// Returns `false` (and changes nothing) when the request is not valid in
    /// the current state.
    pub fn on_load_more_requested(&mut self) -> bool {
        if !self.state.can_load_more() {
            debug!(
                page = self.state.page,
                total_pages = self.state.total_pages,
                is_loading = self.state.is_loading,
                "Ignoring load-more request"
            );
            return false;
        }
        self.dispatch(SearchAction::LoadMore);
        self.issue_fetch();
        true
    }

    /// Re-issue the failed fetch for the current query and page
    pub fn on_retry_requested(&mut self) -> bool {
        if !self.state.can_retry() {
            debug!("Ignoring retry request, nothing to retry");
            return false;
        }
        info!(query = %self.state.query, page = self.state.page, "Retrying image search");
        self.issue_fetch();
        true
    }

    /// Reset everything and hand `image_url` to the selection surface
    pub fn on_image_selected(&mut self, image_url: impl Into<String>) {
        let image_url = image_url.into();
        info!(url = %image_url, "Image selected");
        self.close();
        (self.on_select)(image_url);
    }

    /// Drop pending input and in-flight work and return to the idle state
    pub fn close(&mut self) {
        self.debouncer.cancel();
        self.raw_text.clear();
        self.abort_in_flight();
        self.dispatch(SearchAction::Reset {
            query: String::new(),
        });
    }

    /// Wait for the next committed query or fetch outcome and apply it
    ///
    /// Cancel-safe; intended to be polled from the presentation loop's
    /// `tokio::select!`. Returns `None` only if the controller's internal
    /// channels have shut down.
    pub async fn next_event(&mut self) -> Option<SearchEvent> {
        loop {
            tokio::select! {
                committed = self.debouncer.recv() => {
                    let query = committed?;
                    if let Some(event) = self.commit_query(query) {
                        return Some(event);
                    }
                }
                outcome = self.outcome_receiver.recv() => {
                    return Some(self.apply_outcome(outcome?));
                }
            }
        }
    }

    /// Apply a committed query immediately, bypassing the debouncer
    ///
    /// Whitespace-only text commits as the empty query. Returns `None` when
    /// the result equals the current committed query.
    pub fn commit_query(&mut self, query: String) -> Option<SearchEvent> {
        let query = if query.trim().is_empty() {
            String::new()
        } else {
            query
        };
        if query == self.state.query {
            debug!(query = %query, "Committed query unchanged");
            return None;
        }

        info!(query = %query, "Search query committed");
        self.abort_in_flight();
        self.dispatch(SearchAction::Reset {
            query: query.clone(),
        });

        if !query.is_empty() {
            self.issue_fetch();
        }

        Some(SearchEvent::QueryCommitted { query })
    }

    fn dispatch(&mut self, action: SearchAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    fn issue_fetch(&mut self) {
        self.abort_in_flight();
        self.dispatch(SearchAction::Init);

        self.last_seq += 1;
        let seq = self.last_seq;
        let request = SearchRequest::new(self.state.query.clone(), self.state.page, self.per_page);

        debug!(seq, query = %request.query, page = request.page, "Issuing image search");

        let client = Arc::clone(&self.client);
        let sender = self.outcome_sender.clone();
        let task_request = request.clone();
        let handle = tokio::spawn(async move {
            let result = client.search(task_request).await;
            // The receiver is owned by the controller; if it is gone the
            // picker was closed and the outcome has no audience.
            let _ = sender.send(FetchOutcome { seq, result });
        });

        self.in_flight = Some(InFlight {
            seq,
            request,
            handle,
        });
    }

    fn abort_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!(
                seq = in_flight.seq,
                query = %in_flight.request.query,
                page = in_flight.request.page,
                "Aborting in-flight image search"
            );
            in_flight.handle.abort();
        }
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) -> SearchEvent {
        let is_current = self
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.seq == outcome.seq);
        if !is_current {
            debug!(seq = outcome.seq, latest = self.last_seq, "Discarding stale search response");
            return SearchEvent::StaleResponseDiscarded { seq: outcome.seq };
        }
        self.in_flight = None;

        let page = self.state.page;
        match outcome.result {
            Ok(result_page) => {
                let received = result_page.results.len();
                self.dispatch(SearchAction::Success(result_page));
                debug!(
                    query = %self.state.query,
                    page,
                    received,
                    total_pages = self.state.total_pages,
                    accumulated = self.state.results.len(),
                    "Search page applied"
                );
                SearchEvent::PageLoaded {
                    page,
                    total_pages: self.state.total_pages,
                    received,
                }
            }
            Err(error) => {
                let failure = SearchFailure::from(&error);
                warn!(query = %self.state.query, page, error = %error, "Image search failed");
                self.dispatch(SearchAction::Failure(failure.clone()));
                SearchEvent::FetchFailed { page, failure }
            }
        }
    }
}

impl<C: ImageSearchClient> Drop for SearchController<C> {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}
