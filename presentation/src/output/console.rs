//! Console output formatter for endorsement reports

use super::emitter::ProfileLink;
use colored::Colorize;
use endorse_domain::{EndorsementReport, NationName, SkippedPeer};
use serde::Serialize;
use std::time::Duration;

/// Formats endorsement reports for console display
pub struct ConsoleFormatter;

/// JSON shape of a report
#[derive(Serialize)]
struct JsonReport<'a> {
    subject: &'a NationName,
    region: &'a str,
    candidates: usize,
    checked: usize,
    endorsable: &'a [ProfileLink],
    skipped: &'a [SkippedPeer],
    interrupted: bool,
}

impl ConsoleFormatter {
    /// One `<nation>: <url>` line per link
    pub fn link_lines(links: &[ProfileLink]) -> String {
        links
            .iter()
            .map(|link| format!("{}: {}\n", link.nation, link.url))
            .collect()
    }

    /// Human-readable report: header, link lines, then any warnings
    pub fn format(report: &EndorsementReport, links: &[ProfileLink]) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Nations you can endorse:".cyan().bold()));
        output.push_str(&Self::link_lines(links));

        if links.is_empty() {
            output.push_str(&format!("{}\n", "  (none)".dimmed()));
        }

        if !report.skipped.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                format!("Could not check {} nation(s):", report.skipped.len())
                    .yellow()
                    .bold()
            ));
            for skipped in &report.skipped {
                output.push_str(&format!("  {} ({})\n", skipped.nation, skipped.reason));
            }
        }

        if report.interrupted {
            output.push_str(&format!(
                "\n{}\n",
                "Scan interrupted; the list above is incomplete.".yellow()
            ));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(
        report: &EndorsementReport,
        links: &[ProfileLink],
    ) -> Result<String, serde_json::Error> {
        let json = JsonReport {
            subject: &report.subject,
            region: report.region.as_str(),
            candidates: report.candidates,
            checked: report.checked,
            endorsable: links,
            skipped: &report.skipped,
            interrupted: report.interrupted,
        };
        serde_json::to_string_pretty(&json)
    }

    /// `Time taken: H:MM:SS.mmm`
    pub fn elapsed_line(elapsed: Duration) -> String {
        let total_secs = elapsed.as_secs();
        format!(
            "Time taken: {}:{:02}:{:02}.{:03}",
            total_secs / 3600,
            (total_secs / 60) % 60,
            total_secs % 60,
            elapsed.subsec_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use endorse_domain::RegionId;

    fn report(eligible: &[&str]) -> (EndorsementReport, Vec<ProfileLink>) {
        let report = EndorsementReport::new(
            NationName::new("me").unwrap(),
            RegionId::new("Lazarus").unwrap(),
            5,
            eligible.iter().map(|n| NationName::new(n).unwrap()),
        );
        let links = report.eligible().iter().cloned().map(ProfileLink::new).collect();
        (report, links)
    }

    #[test]
    fn test_link_lines() {
        let (_, links) = report(&["b", "a"]);
        assert_eq!(
            ConsoleFormatter::link_lines(&links),
            "a: https://www.nationstates.net/nation=a\nb: https://www.nationstates.net/nation=b\n"
        );
    }

    #[test]
    fn test_format_contains_lines_and_warnings() {
        let (report, links) = report(&["a"]);
        let report = report
            .with_skipped(vec![SkippedPeer {
                nation: NationName::new("flaky").unwrap(),
                reason: "HTTP 503 Service Unavailable".into(),
            }])
            .mark_interrupted(1);
        let text = ConsoleFormatter::format(&report, &links);
        assert!(text.contains("Nations you can endorse:"));
        assert!(text.contains("a: https://www.nationstates.net/nation=a\n"));
        assert!(text.contains("flaky (HTTP 503 Service Unavailable)"));
        assert!(text.contains("incomplete"));
    }

    #[test]
    fn test_format_empty() {
        let (report, links) = report(&[]);
        let text = ConsoleFormatter::format(&report, &links);
        assert!(text.contains("(none)"));
        assert!(!text.contains("https://"));
    }

    #[test]
    fn test_format_json() {
        let (report, links) = report(&["a"]);
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&report, &links).unwrap()).unwrap();
        assert_eq!(json["subject"], "me");
        assert_eq!(json["region"], "Lazarus");
        assert_eq!(json["candidates"], 5);
        assert_eq!(json["checked"], 5);
        assert_eq!(json["endorsable"][0]["nation"], "a");
        assert_eq!(
            json["endorsable"][0]["url"],
            "https://www.nationstates.net/nation=a"
        );
        assert_eq!(json["interrupted"], false);
    }

    #[test]
    fn test_elapsed_line() {
        assert_eq!(
            ConsoleFormatter::elapsed_line(Duration::from_millis(3_723_045)),
            "Time taken: 1:02:03.045"
        );
        assert_eq!(
            ConsoleFormatter::elapsed_line(Duration::from_millis(650)),
            "Time taken: 0:00:00.650"
        );
    }
}
