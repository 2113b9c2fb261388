//! Rate limiting port
//!
//! The upstream API bans clients that exceed its request rate. Every request
//! the use case makes is preceded by [`RateLimiter::acquire`].

use async_trait::async_trait;

/// Gate that paces upstream requests
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Wait until the next request may be sent
    async fn acquire(&self);
}

/// Limiter that never waits (tests, offline fakes)
pub struct NoRateLimit;

#[async_trait]
impl RateLimiter for NoRateLimit {
    async fn acquire(&self) {}
}
