//! Skeleton timing for slow loaders.
//!
//! A loader that settles within `pending_after` never shows a skeleton.
//! Once the skeleton is up it stays for at least `min_display`, so a load
//! finishing just after the threshold does not flash.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::Instant;

/// When to show a pending view and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPolicy {
    pub pending_after: Duration,
    pub min_display: Duration,
}

impl PendingPolicy {
    /// Timing used by the todo detail page.
    pub const TODO_DETAIL: Self = Self {
        pending_after: Duration::from_millis(500),
        min_display: Duration::from_millis(200),
    };

    /// Race `load` against the pending threshold.
    pub async fn race<F: Future>(self, load: F) -> Raced<F> {
        let mut load = Box::pin(load);
        tokio::select! {
            output = &mut load => Raced::Ready(output),
            () = tokio::time::sleep(self.pending_after) => Raced::Pending(PendingLoad {
                load,
                shown_at: Instant::now(),
                min_display: self.min_display,
            }),
        }
    }
}

/// Outcome of [`PendingPolicy::race`].
pub enum Raced<F: Future> {
    /// The loader beat the threshold.
    Ready(F::Output),
    /// The threshold passed first; show the pending view now.
    Pending(PendingLoad<F>),
}

/// A load still running after its pending view went up.
pub struct PendingLoad<F: Future> {
    load: Pin<Box<F>>,
    shown_at: Instant,
    min_display: Duration,
}

impl<F: Future> PendingLoad<F> {
    /// Wait for the loader, holding the result back until the pending view
    /// has been visible for the minimum display time.
    pub async fn finish(self) -> F::Output {
        let output = self.load.await;
        tokio::time::sleep_until(self.shown_at + self.min_display).await;
        output
    }
}
