//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod output;
mod report;
mod scan;

pub use api::FileApiConfig;
pub use output::FileOutputConfig;
pub use report::FileReportConfig;
pub use scan::FileScanConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// NationStates API access
    pub api: FileApiConfig,
    /// Endorsement scan behavior
    pub scan: FileScanConfig,
    /// HTML report settings
    pub report: FileReportConfig,
    /// Console output settings
    pub output: FileOutputConfig,
}

/// A configuration value that is accepted but probably wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.api.base_url.trim().is_empty() {
            warnings.push(ConfigWarning {
                field: "api.base_url",
                message: "empty, requests will fail".to_string(),
            });
        }

        if self.api.request_interval_ms == 0 {
            warnings.push(ConfigWarning {
                field: "api.request_interval_ms",
                message: "0 disables pacing; the API locks out clients above 50 requests per 30s"
                    .to_string(),
            });
        }

        if self.api.timeout_secs == 0 {
            warnings.push(ConfigWarning {
                field: "api.timeout_secs",
                message: "0 makes every request time out immediately".to_string(),
            });
        }

        if let Some(ua) = &self.api.user_agent
            && ua.trim().is_empty()
        {
            warnings.push(ConfigWarning {
                field: "api.user_agent",
                message: "empty, the default User-Agent will be used".to_string(),
            });
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use endorse_application::ScanFailurePolicy;
    use endorse_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
user_agent = "my-script (by: testlandia)"
request_interval_ms = 1000
timeout_secs = 10

[scan]
on_error = "skip"
exclude = ["Puppet One", "puppet_two"]

[report]
html_path = "out/endorse.html"
open_delay_ms = 750
write_html = false

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.user_agent.as_deref(), Some("my-script (by: testlandia)"));
        assert_eq!(config.api.request_interval_ms, 1000);
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.scan.on_error, ScanFailurePolicy::Skip);
        assert_eq!(config.scan.exclude.len(), 2);
        assert_eq!(config.report.html_path.to_str(), Some("out/endorse.html"));
        assert_eq!(config.report.open_delay_ms, 750);
        assert!(!config.report.write_html);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[report]
open_delay_ms = 250
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.report.open_delay_ms, 250);
        // Defaults should apply
        assert_eq!(config.api.request_interval_ms, 650);
        assert!(config.report.write_html);
        assert_eq!(config.scan.on_error, ScanFailurePolicy::Abort);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_flags_zero_interval_and_blank_url() {
        let mut config = FileConfig::default();
        config.api.request_interval_ms = 0;
        config.api.base_url = " ".to_string();
        let fields: Vec<_> = config.validate().iter().map(|w| w.field).collect();
        assert_eq!(fields, vec!["api.base_url", "api.request_interval_ms"]);
    }
}
