//! Configuration file loading for nation-endorse
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NATION_ENDORSE_*` environment variables (`NATION_ENDORSE_API__TIMEOUT_SECS=10`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./endorse.toml` or `./.endorse.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/nation-endorse/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top of the merged result by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigWarning, FileApiConfig, FileConfig, FileOutputConfig, FileReportConfig, FileScanConfig,
};
pub use loader::{ConfigError, ConfigLoader};
