//! CLI command definitions

use clap::{Parser, ValueEnum};
use endorse_application::ScanFailurePolicy;
use endorse_domain::OutputFormat;
use std::path::PathBuf;

/// Console report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// `<nation>: <url>` lines
    Text,
    /// JSON document
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// What to do when one nation's endorsements cannot be fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicyArg {
    /// Stop the run
    Abort,
    /// Skip the nation and keep scanning
    Skip,
}

impl From<FailurePolicyArg> for ScanFailurePolicy {
    fn from(arg: FailurePolicyArg) -> Self {
        match arg {
            FailurePolicyArg::Abort => ScanFailurePolicy::Abort,
            FailurePolicyArg::Skip => ScanFailurePolicy::Skip,
        }
    }
}

/// CLI arguments for nation-endorse
#[derive(Parser, Debug)]
#[command(name = "nation-endorse")]
#[command(author, version, about = "Utility to return a list of nations to endorse")]
#[command(long_about = r#"
Lists the World Assembly nations in your region that you have not endorsed yet.

Looks up your region, fetches its WA members, and checks each member's
endorsement list (one request every 650 ms to respect the API rate limit).
Prints the nations with their profile links and writes an HTML page with a
button that opens every link in turn.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./endorse.toml      Project-level config
3. ~/.config/nation-endorse/config.toml   Global config

Example:
  nation-endorse "My Nation"
  nation-endorse my_nation -e "Puppet One" puppet_two -d 1000
  nation-endorse my_nation --on-error skip --output json --no-html
"#)]
pub struct Cli {
    /// Your nation
    #[arg(required_unless_present = "show_config")]
    pub nation: Option<String>,

    /// Nations to leave out of the list
    #[arg(short, long, value_name = "NATION", num_args = 1.., action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Delay between opening links in the HTML page, in milliseconds [default: 500]
    #[arg(short, long, value_name = "MS")]
    pub delay: Option<u64>,

    /// Behavior when a nation's endorsements cannot be fetched [default: abort]
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_error: Option<FailurePolicyArg>,

    /// Console report format [default: text]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Where to write the HTML page [default: to_endorse_nation.html]
    #[arg(long, value_name = "PATH")]
    pub html_path: Option<PathBuf>,

    /// Do not write the HTML page
    #[arg(long)]
    pub no_html: bool,

    /// Minimum spacing between API requests, in milliseconds [default: 650]
    #[arg(long, value_name = "MS")]
    pub request_interval: Option<u64>,

    /// User-Agent sent to the API [default: nation-endorse/<version> (by: <nation>)]
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
