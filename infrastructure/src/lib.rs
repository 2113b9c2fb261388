//! Infrastructure layer for nation-endorse
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the NationStates HTTP client, the request pacing gate,
//! and configuration file loading.

pub mod config;
pub mod nationstates;
pub mod rate_limit;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigWarning, FileApiConfig, FileConfig, FileOutputConfig, FileReportConfig,
    FileScanConfig,
};
pub use nationstates::{
    client::{ClientError, DEFAULT_BASE_URL, NationStatesClient, default_user_agent},
    xml::{ExtractError, extract_list},
};
pub use rate_limit::{DEFAULT_REQUEST_INTERVAL, FixedIntervalGate, request_gate};
