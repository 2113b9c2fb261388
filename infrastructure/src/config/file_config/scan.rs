//! Scan configuration from TOML (`[scan]` section)

use endorse_application::{ScanConfig, ScanFailurePolicy};
use serde::{Deserialize, Serialize};

/// Raw scan configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScanConfig {
    /// `abort` or `skip`
    pub on_error: ScanFailurePolicy,
    /// Nations never to list (merged with `--exclude`)
    pub exclude: Vec<String>,
}

impl FileScanConfig {
    pub fn to_scan_config(&self) -> ScanConfig {
        ScanConfig::default().with_failure_policy(self.on_error)
    }
}
