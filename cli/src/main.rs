//! CLI entrypoint for nation-endorse
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use endorse_application::{
    FindEndorsableInput, FindEndorsableUseCase, NoProgress, ScanProgressNotifier,
};
use endorse_domain::{NationName, OutputFormat};
use endorse_infrastructure::{ConfigLoader, NationStatesClient, request_gate};
use endorse_presentation::{Cli, ConsoleFormatter, ProgressReporter, ReportEmitter, SimpleProgress};
use settings::RunSettings;
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let start = Instant::now();

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    for warning in file_config.validate() {
        warn!("Config: {}", warning);
    }

    let nation = cli
        .nation
        .as_deref()
        .context("A nation is required")?;
    let subject = NationName::new(nation)?;
    let settings = RunSettings::resolve(subject, &cli, &file_config);

    if !settings.color {
        colored::control::set_override(false);
    }

    info!("Starting nation-endorse for {}", settings.subject);

    // === Dependency Injection ===
    let client = Arc::new(
        NationStatesClient::new(&settings.base_url, &settings.user_agent, settings.timeout)
            .context("Failed to set up the API client")?,
    );
    let use_case = FindEndorsableUseCase::new(client, request_gate(settings.request_interval));

    let input = FindEndorsableInput::new(settings.subject.clone())
        .with_exclusions(settings.exclusions.iter().cloned())
        .with_config(settings.scan.clone());

    // Ctrl-C during the lookups fails the run; during the scan, whatever was
    // checked so far is still reported
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted");
                cancel.cancel();
            }
        }
    });

    let progress: Box<dyn ScanProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let report = use_case
        .execute_with_progress(input, progress.as_ref(), &cancel)
        .await?;

    // === Output ===
    let rendered = ReportEmitter::emit_report(
        &report,
        &settings.display_name,
        &settings.exclusions,
        settings.open_delay_ms,
    );

    match settings.output {
        OutputFormat::Text => print!("{}", ConsoleFormatter::format(&report, &rendered.links)),
        OutputFormat::Json => println!(
            "{}",
            ConsoleFormatter::format_json(&report, &rendered.links)
                .context("Failed to serialize report")?
        ),
    }

    if report.is_vacant() {
        warn!("Nothing was checked; leaving the HTML page untouched");
    } else if let Some(path) = &settings.html_path {
        std::fs::write(path, &rendered.html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
    }

    if settings.output == OutputFormat::Text {
        println!("{}", ConsoleFormatter::elapsed_line(start.elapsed()));
    }

    Ok(())
}
