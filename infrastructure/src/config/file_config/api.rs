//! API configuration from TOML (`[api]` section)

use crate::nationstates::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::rate_limit::DEFAULT_REQUEST_INTERVAL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw API configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// `api.cgi` endpoint
    pub base_url: String,
    /// Replaces the default `nation-endorse/<version> (by: <nation>)`
    pub user_agent: Option<String>,
    /// Minimum spacing between two requests
    pub request_interval_ms: u64,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl FileApiConfig {
    pub fn request_interval(&self) -> Duration {
        Duration::from_millis(self.request_interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured User-Agent, ignoring blank values
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent
            .as_deref()
            .map(str::trim)
            .filter(|ua| !ua.is_empty())
    }
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
            request_interval_ms: DEFAULT_REQUEST_INTERVAL.as_millis() as u64,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_interval(), Duration::from_millis(650));
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.user_agent(), None);
    }

    #[test]
    fn test_blank_user_agent_ignored() {
        let config = FileApiConfig {
            user_agent: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.user_agent(), None);
    }
}
