//! Fixed-interval request pacing
//!
//! The NationStates API allows 50 requests per 30 seconds per client and
//! locks out clients that go over. Spacing request starts 650 ms apart keeps
//! a sequential client under that with some headroom.

use async_trait::async_trait;
use endorse_application::{NoRateLimit, RateLimiter};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Default spacing between two requests
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(650);

/// Gate that lets one request through per `interval`.
///
/// Backed by a single-cell GCRA quota: the first acquire returns
/// immediately, and each later acquire waits until `interval` has passed
/// since the previous one was let through.
pub struct FixedIntervalGate {
    interval: Duration,
    limiter: Governor<NotKeyed, InMemoryState, DefaultClock>,
}

impl FixedIntervalGate {
    /// `None` for a zero interval, which needs no gate at all
    pub fn new(interval: Duration) -> Option<Self> {
        let quota = Quota::with_period(interval)?;
        Some(Self {
            interval,
            limiter: Governor::direct(quota),
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[async_trait]
impl RateLimiter for FixedIntervalGate {
    async fn acquire(&self) {
        if self.limiter.check().is_err() {
            trace!("Rate limit: waiting for the next {:?} slot", self.interval);
            self.limiter.until_ready().await;
        }
    }
}

/// Rate limiter for the given request interval; zero disables pacing
pub fn request_gate(interval: Duration) -> Arc<dyn RateLimiter> {
    match FixedIntervalGate::new(interval) {
        Some(gate) => Arc::new(gate),
        None => Arc::new(NoRateLimit),
    }
}
