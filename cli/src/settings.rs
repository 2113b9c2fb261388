//! Run settings: file configuration with command-line overrides applied

use endorse_application::ScanConfig;
use endorse_domain::{NationName, OutputFormat};
use endorse_infrastructure::{FileConfig, default_user_agent};
use endorse_presentation::Cli;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

/// Everything one run needs, after merging flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub subject: NationName,
    /// Subject as typed on the command line, shown in the page title
    pub display_name: String,
    pub exclusions: BTreeSet<NationName>,
    pub scan: ScanConfig,
    pub base_url: String,
    pub user_agent: String,
    pub request_interval: Duration,
    pub timeout: Duration,
    pub output: OutputFormat,
    pub color: bool,
    /// `None` when no HTML page should be written
    pub html_path: Option<PathBuf>,
    pub open_delay_ms: u64,
}

impl RunSettings {
    /// Flags win over file values; exclusions from both are combined.
    pub fn resolve(subject: NationName, cli: &Cli, file: &FileConfig) -> Self {
        let display_name = cli
            .nation
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| subject.to_string());

        let exclusions = NationName::set_from(file.scan.exclude.iter().chain(cli.exclude.iter()));

        let mut scan = file.scan.to_scan_config();
        if let Some(policy) = cli.on_error {
            scan = scan.with_failure_policy(policy.into());
        }

        let user_agent = cli
            .user_agent
            .as_deref()
            .map(str::trim)
            .filter(|ua| !ua.is_empty())
            .or(file.api.user_agent())
            .map(str::to_string)
            .unwrap_or_else(|| default_user_agent(&subject));

        let request_interval = cli
            .request_interval
            .map(Duration::from_millis)
            .unwrap_or_else(|| file.api.request_interval());

        let html_path = if cli.no_html || !file.report.write_html {
            None
        } else {
            Some(
                cli.html_path
                    .clone()
                    .unwrap_or_else(|| file.report.html_path.clone()),
            )
        };

        Self {
            subject,
            display_name,
            exclusions,
            scan,
            base_url: file.api.base_url.clone(),
            user_agent,
            request_interval,
            timeout: file.api.timeout(),
            output: cli.output.map(Into::into).unwrap_or(file.output.format),
            color: file.output.color && !cli.no_color,
            html_path,
            open_delay_ms: cli.delay.unwrap_or(file.report.open_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use endorse_application::ScanFailurePolicy;

    fn resolve(args: &[&str], file: &FileConfig) -> RunSettings {
        let mut argv = vec!["nation-endorse"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        let subject = NationName::new(cli.nation.as_deref().unwrap()).unwrap();
        RunSettings::resolve(subject, &cli, file)
    }

    #[test]
    fn test_defaults() {
        let settings = resolve(&["My Nation"], &FileConfig::default());
        assert_eq!(settings.subject.as_str(), "my_nation");
        assert_eq!(settings.display_name, "My Nation");
        assert!(settings.exclusions.is_empty());
        assert_eq!(settings.scan.on_error, ScanFailurePolicy::Abort);
        assert_eq!(settings.request_interval, Duration::from_millis(650));
        assert_eq!(settings.open_delay_ms, 500);
        assert_eq!(settings.output, OutputFormat::Text);
        assert_eq!(
            settings.html_path,
            Some(PathBuf::from("to_endorse_nation.html"))
        );
        assert!(settings.user_agent.contains("(by: my_nation)"));
        assert!(settings.color);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = FileConfig::default();
        file.report.open_delay_ms = 900;
        file.api.user_agent = Some("file-agent".to_string());
        file.api.request_interval_ms = 1000;

        let settings = resolve(
            &[
                "me",
                "-d",
                "200",
                "--user-agent",
                "flag-agent",
                "--request-interval",
                "700",
                "--on-error",
                "skip",
                "--output",
                "json",
                "--html-path",
                "out.html",
                "--no-color",
            ],
            &file,
        );
        assert_eq!(settings.open_delay_ms, 200);
        assert_eq!(settings.user_agent, "flag-agent");
        assert_eq!(settings.request_interval, Duration::from_millis(700));
        assert_eq!(settings.scan.on_error, ScanFailurePolicy::Skip);
        assert_eq!(settings.output, OutputFormat::Json);
        assert_eq!(settings.html_path, Some(PathBuf::from("out.html")));
        assert!(!settings.color);
    }

    #[test]
    fn test_file_values_used_without_flags() {
        let mut file = FileConfig::default();
        file.api.user_agent = Some("file-agent".to_string());
        file.scan.on_error = ScanFailurePolicy::Skip;
        let settings = resolve(&["me"], &file);
        assert_eq!(settings.user_agent, "file-agent");
        assert_eq!(settings.scan.on_error, ScanFailurePolicy::Skip);
    }

    #[test]
    fn test_exclusions_combined_and_normalized() {
        let mut file = FileConfig::default();
        file.scan.exclude = vec!["Puppet One".to_string()];
        let settings = resolve(&["me", "-e", "puppet_one", "Puppet Two"], &file);
        let names: Vec<_> = settings.exclusions.iter().map(NationName::as_str).collect();
        assert_eq!(names, vec!["puppet_one", "puppet_two"]);
    }

    #[test]
    fn test_html_disabled() {
        assert_eq!(resolve(&["me", "--no-html"], &FileConfig::default()).html_path, None);

        let mut file = FileConfig::default();
        file.report.write_html = false;
        assert_eq!(resolve(&["me"], &file).html_path, None);
    }
}
