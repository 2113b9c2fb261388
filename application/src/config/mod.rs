//! Application-level configuration.
//!
//! - [`ScanConfig`] — how the endorsement scan treats per-peer failures

pub mod scan_config;

pub use scan_config::{ScanConfig, ScanFailurePolicy};
