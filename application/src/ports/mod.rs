//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod nation_api;
pub mod progress;
pub mod rate_limiter;
