//! Incremental image search for the class form's image picker
//!
//! The controller is decomposed into:
//!
//! - `state` - the paginated search state and its derived phase
//! - `reducer` - pure transitions over `SearchAction`
//! - `controller` - debouncing, request sequencing and cancellation
//!
//! # Example
//!
//! ```no_run
//! use class_catalog::config::SearchConfig;
//! use class_catalog::image_search::UnsplashClient;
//! use class_catalog::search_controller::{SearchController, SearchEvent};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = SearchConfig::from_env()?;
//! let client = UnsplashClient::new(config.clone())?;
//! let mut picker = SearchController::new(client, &config)
//!     .on_select(|url| println!("picked {url}"));
//!
//! picker.on_query_text_change("mountain");
//! while let Some(event) = picker.next_event().await {
//!     if let SearchEvent::PageLoaded { .. } = event {
//!         let first = picker.state().results[0].image_url.clone();
//!         picker.on_image_selected(first);
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod controller;
mod reducer;
mod state;

pub use controller::{SearchController, SearchEvent, SelectionHandler};
pub use reducer::{SearchAction, reduce};
pub use state::{SearchFailure, SearchPhase, SearchState};
