//! Scan behavior settings.

use serde::{Deserialize, Serialize};

/// What the scan does when one peer's endorsement lookup fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanFailurePolicy {
    /// Stop the whole run with the peer's error (default)
    #[default]
    Abort,
    /// Record the peer as skipped and keep going
    Skip,
}

impl std::str::FromStr for ScanFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(format!("unknown failure policy '{}' (expected abort or skip)", other)),
        }
    }
}

/// Endorsement scan configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub on_error: ScanFailurePolicy,
}

impl ScanConfig {
    pub fn with_failure_policy(mut self, policy: ScanFailurePolicy) -> Self {
        self.on_error = policy;
        self
    }
}
