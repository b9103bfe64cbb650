//! Stale-response protection for page fetches.
//!
//! Each page owns a [`RequestGuard`]. Every fetch takes a token; when the
//! response arrives it is applied only if no newer fetch was started and
//! the page has not been torn down.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
struct GuardState {
    latest: AtomicU64,
    retired: AtomicBool,
}

#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    inner: Arc<GuardState>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding any in flight.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.inner.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a response for `token` may still be applied.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.is_live() && self.inner.latest.load(Ordering::SeqCst) == token.0
    }

    pub fn is_live(&self) -> bool {
        !self.inner.retired.load(Ordering::SeqCst)
    }

    /// Called when the owning page unmounts. Every outstanding token is dead.
    pub fn retire(&self) {
        self.inner.retired.store(true, Ordering::SeqCst);
    }

    /// Await `fut` under a fresh token, returning its output only if the
    /// token is still current when it completes.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        let token = self.issue();
        let output = fut.await;
        self.is_current(token).then_some(output)
    }
}
