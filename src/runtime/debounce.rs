//! Timer-based debouncing
//!
//! A [`Debouncer`] accepts values at any rate and emits a value only after no
//! newer value has been pushed for the quiet interval. Each push restarts the
//! timer; [`Debouncer::cancel`] drops whatever is pending.
//!
//! Emissions are tagged with a generation number. A timer that fires in the
//! same instant a newer value is pushed may still reach the channel; its
//! generation no longer matches and [`Debouncer::recv`] skips it.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::create_channel;

pub struct Debouncer<T> {
    interval: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    sender: mpsc::UnboundedSender<(u64, T)>,
    receiver: mpsc::UnboundedReceiver<(u64, T)>,
}

impl<T: Send + 'static> Debouncer<T> {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        let (sender, receiver) = create_channel();
        Self {
            interval,
            generation: 0,
            pending: None,
            sender,
            receiver,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule `value` for emission, superseding anything pending
    ///
    /// Must be called from within a tokio runtime.
    pub fn push(&mut self, value: T) {
        self.cancel();
        let generation = self.generation;
        let interval = self.interval;
        let sender = self.sender.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            // Receiver lives as long as the debouncer; a send error means it
            // was dropped and there is nobody left to notify.
            let _ = sender.send((generation, value));
        }));
    }

    /// Drop the pending value, if any
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// True while a pushed value has not been received or cancelled yet
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Wait for the next settled value
    ///
    /// Pends forever while nothing is scheduled, which makes it suitable as a
    /// `tokio::select!` branch. Cancel-safe.
    pub async fn recv(&mut self) -> Option<T> {
        loop {
            let (generation, value) = self.receiver.recv().await?;
            if generation == self.generation {
                self.pending = None;
                return Some(value);
            }
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
