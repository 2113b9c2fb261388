//! Report configuration from TOML (`[report]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File the HTML report is written to unless configured otherwise
pub const DEFAULT_HTML_PATH: &str = "to_endorse_nation.html";

/// Raw report configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReportConfig {
    /// Where the HTML page is written (overwritten on every run)
    pub html_path: PathBuf,
    /// Pause between two tabs opened by the page's button
    pub open_delay_ms: u64,
    /// Write the HTML page at all
    pub write_html: bool,
}

impl Default for FileReportConfig {
    fn default() -> Self {
        Self {
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
            open_delay_ms: 500,
            write_html: true,
        }
    }
}
