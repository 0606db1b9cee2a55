pub mod catalog;
pub mod cli;
pub mod config;
pub mod image_search;
pub mod logging;
pub mod runtime;
pub mod search_controller;
pub mod utils;

pub use catalog::{CatalogError, ClassCatalog, ClassDraft, ClassRecord, ClassType};
pub use config::{ConfigError, SearchConfig};
pub use image_search::{
    FailureKind, ImageResult, ImageSearchClient, SearchError, SearchPage, SearchRequest,
    UnsplashClient,
};
pub use runtime::Debouncer;
pub use search_controller::{
    SearchAction, SearchController, SearchEvent, SearchFailure, SearchPhase, SearchState,
};
