//! Application layer for nation-endorse
//!
//! This crate contains the endorsement use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ScanConfig, ScanFailurePolicy};
pub use ports::{
    nation_api::{ApiError, NationApi},
    progress::{NoProgress, ScanProgressNotifier},
    rate_limiter::{NoRateLimit, RateLimiter},
};
pub use use_cases::find_endorsable::{
    FindEndorsableError, FindEndorsableInput, FindEndorsableUseCase, ScanOutcome,
};
