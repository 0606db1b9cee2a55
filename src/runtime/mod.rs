//! Async primitives shared by the search controller
//!
//! Both primitives here are single-owner: they are driven through `&mut self`
//! from the task that owns the picker, and only their timers and fetches run
//! on spawned tasks.

pub mod debounce;

pub use debounce::Debouncer;

/// Create channel with optimal configuration
#[inline(always)]
#[must_use]
pub fn create_channel<T>() -> (
    tokio::sync::mpsc::UnboundedSender<T>,
    tokio::sync::mpsc::UnboundedReceiver<T>,
) {
    tokio::sync::mpsc::unbounded_channel()
}
