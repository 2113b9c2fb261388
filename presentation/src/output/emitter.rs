//! Report emitter: eligible nations to console text and HTML page

use super::console::ConsoleFormatter;
use super::html::{HtmlPage, HtmlRenderer};
use endorse_domain::{EndorsementReport, NationName, SkippedPeer, sorted_unique};
use serde::Serialize;
use std::collections::BTreeSet;

/// A nation and the link to its profile page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileLink {
    pub nation: NationName,
    pub url: String,
}

impl ProfileLink {
    pub fn new(nation: NationName) -> Self {
        let url = nation.profile_url();
        Self { nation, url }
    }
}

/// Both renderings of one report
#[derive(Debug, Clone)]
pub struct RenderedReport {
    /// Links in ascending nation order
    pub links: Vec<ProfileLink>,
    /// One `<nation>: <url>` line per link, empty when there are none
    pub console: String,
    pub html: String,
}

/// Builds the console and HTML outputs from the same sorted link list
pub struct ReportEmitter;

impl ReportEmitter {
    /// Render a list of eligible nations.
    ///
    /// The list is sorted and deduplicated here, so output order never
    /// depends on the order the nations were checked in. `subject` is shown
    /// as given in the page title.
    pub fn emit(
        eligible: &[NationName],
        subject: &str,
        exclusions: &BTreeSet<NationName>,
        delay_ms: u64,
    ) -> RenderedReport {
        Self::render(eligible, subject, exclusions, &[], false, delay_ms)
    }

    /// Render a full scan report, including skipped nations and interruption
    pub fn emit_report(
        report: &EndorsementReport,
        subject: &str,
        exclusions: &BTreeSet<NationName>,
        delay_ms: u64,
    ) -> RenderedReport {
        Self::render(
            report.eligible(),
            subject,
            exclusions,
            &report.skipped,
            report.interrupted,
            delay_ms,
        )
    }

    fn render(
        eligible: &[NationName],
        subject: &str,
        exclusions: &BTreeSet<NationName>,
        skipped: &[SkippedPeer],
        interrupted: bool,
        delay_ms: u64,
    ) -> RenderedReport {
        let links: Vec<ProfileLink> = sorted_unique(eligible.iter().cloned())
            .into_iter()
            .map(ProfileLink::new)
            .collect();
        let exclusions: Vec<NationName> = exclusions.iter().cloned().collect();

        let console = ConsoleFormatter::link_lines(&links);
        let html = HtmlRenderer::render(&HtmlPage {
            subject,
            links: &links,
            exclusions: &exclusions,
            skipped,
            interrupted,
            delay_ms,
        });

        RenderedReport {
            links,
            console,
            html,
        }
    }
}
