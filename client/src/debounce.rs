//! Debouncing: of the calls scheduled within one window, only the most
//! recent one fires.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Generation-counter debouncer.
///
/// Every call to [`acquire`](Self::acquire) bumps the generation and
/// waits out the window; a call fires only if it is still the newest
/// when its window elapses. Clones share the same generation.
#[derive(Clone)]
pub struct Debouncer {
    window: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Wait out the debounce window. Returns true if no newer call
    /// arrived in the meantime, i.e. this call should execute.
    pub async fn acquire(&self) -> bool {
        let claim = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.window).await;
        self.generation.load(Ordering::SeqCst) == claim
    }
}
