//! Pure state transitions for the search controller
//!
//! `reduce` is total over every action and never performs I/O; the
//! controller decides when to dispatch and which requests to issue.

use crate::image_search::SearchPage;

use super::state::{SearchFailure, SearchState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// A request for the current page is about to be issued
    Init,
    /// The latest request succeeded
    Success(SearchPage),
    /// The latest request failed
    Failure(SearchFailure),
    /// Advance to the next page
    LoadMore,
    /// Clear accumulated results and start over with `query`
    Reset { query: String },
}

#[must_use]
pub fn reduce(state: SearchState, action: SearchAction) -> SearchState {
    match action {
        SearchAction::Init => SearchState {
            is_loading: true,
            last_error: None,
            ..state
        },
        SearchAction::Success(page) => {
            let results = if state.page == 1 {
                page.results
            } else {
                let mut results = state.results;
                results.extend(page.results);
                results
            };
            SearchState {
                results,
                total_pages: page.total_pages,
                is_loading: false,
                last_error: None,
                ..state
            }
        }
        SearchAction::Failure(failure) => SearchState {
            is_loading: false,
            last_error: Some(failure),
            ..state
        },
        SearchAction::LoadMore => {
            if !state.can_load_more() {
                return state;
            }
            SearchState {
                page: state.page + 1,
                is_loading: true,
                ..state
            }
        }
        SearchAction::Reset { query } => SearchState::reset(query),
    }
}
