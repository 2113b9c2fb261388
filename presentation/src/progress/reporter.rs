//! Progress reporting for endorsement scans

use colored::Colorize;
use endorse_application::{ApiError, ScanProgressNotifier};
use endorse_domain::{NationName, RegionId};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Reports scan progress with a progress bar on stderr
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::hidden();
        bar.set_style(Self::scan_style());
        bar.set_prefix("Checking");
        Self { bar }
    }

    fn scan_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanProgressNotifier for ProgressReporter {
    fn on_region_resolved(&self, region: &RegionId) {
        self.bar.set_prefix(region.to_string());
    }

    fn on_scan_start(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
        self.bar.set_message("Starting...");
        self.bar.set_draw_target(ProgressDrawTarget::stderr());
    }

    fn on_peer_checked(&self, peer: &NationName, checked: usize, _total: usize, eligible: bool) {
        let status = if eligible {
            format!("{} {}", "+".green(), peer)
        } else {
            format!("{} {}", "-".dimmed(), peer)
        };
        self.bar.set_message(status);
        self.bar.set_position(checked as u64);
    }

    fn on_peer_skipped(&self, peer: &NationName, checked: usize, _total: usize, _error: &ApiError) {
        self.bar.set_message(format!("{} {}", "x".red(), peer));
        self.bar.set_position(checked as u64);
    }

    fn on_scan_complete(&self, eligible: usize) {
        self.bar
            .finish_with_message(format!("{} endorsable", eligible.to_string().green()));
    }
}

/// Simple line-based progress (no fancy UI), for non-terminal stderr
pub struct SimpleProgress;

impl ScanProgressNotifier for SimpleProgress {
    fn on_region_resolved(&self, region: &RegionId) {
        eprintln!("{} Region: {}", "->".cyan(), region.to_string().bold());
    }

    fn on_scan_start(&self, total: usize) {
        eprintln!("{} Checking {} nation(s)", "->".cyan(), total);
    }

    fn on_peer_checked(&self, peer: &NationName, checked: usize, total: usize, eligible: bool) {
        if eligible {
            eprintln!("  [{}/{}] {} {}", checked, total, "+".green(), peer);
        } else {
            eprintln!("  [{}/{}] {} {}", checked, total, "-".dimmed(), peer);
        }
    }

    fn on_peer_skipped(&self, peer: &NationName, checked: usize, total: usize, error: &ApiError) {
        eprintln!("  [{}/{}] {} {} ({})", checked, total, "x".red(), peer, error);
    }

    fn on_scan_complete(&self, eligible: usize) {
        eprintln!("{} {} endorsable", "->".cyan(), eligible);
    }
}
