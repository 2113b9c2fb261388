//! HTML page renderer
//!
//! The page lists every endorsable nation as a link and carries a button
//! that opens the links one after another, `delay_ms` apart.

use super::emitter::ProfileLink;
use endorse_domain::{NationName, SkippedPeer};
use std::fmt::Write;

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Everything the page shows
pub struct HtmlPage<'a> {
    /// Subject as the user typed it, for the title
    pub subject: &'a str,
    pub links: &'a [ProfileLink],
    pub exclusions: &'a [NationName],
    pub skipped: &'a [SkippedPeer],
    pub interrupted: bool,
    pub delay_ms: u64,
}

/// Renders [`HtmlPage`]s
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn render(page: &HtmlPage<'_>) -> String {
        let subject = escape_html(page.subject);
        let links = Self::link_items(page.links);
        let notes = Self::notes(page);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Nationstates Endorsement List for {subject}</title>
    <script>
        function openLinksWithDelay() {{
            const links = document.querySelectorAll('#nations-to-endorse li a');
            let index = 0;

            function openNextLink() {{
                if (index < links.length) {{
                    window.open(links[index].href, '_blank');
                    index++;
                    setTimeout(openNextLink, {delay});
                }}
            }}

            openNextLink();
        }}
    </script>
</head>
<body>
    <h1>Endorsement List</h1>
{notes}    <ul id="nations-to-endorse">
{links}    </ul>

    <button onclick="openLinksWithDelay()">Open Nation pages</button>
</body>
</html>
"#,
            subject = subject,
            delay = page.delay_ms,
            notes = notes,
            links = links,
        )
    }

    fn link_items(links: &[ProfileLink]) -> String {
        let mut out = String::new();
        for link in links {
            let _ = writeln!(
                out,
                r#"        <li><a href="{}">{}</a></li>"#,
                escape_html(&link.url),
                escape_html(link.nation.as_str())
            );
        }
        out
    }

    fn notes(page: &HtmlPage<'_>) -> String {
        let mut out = String::new();

        if page.interrupted {
            out.push_str(
                "    <p class=\"warning\">The scan was interrupted; this list is incomplete.</p>\n",
            );
        }

        if !page.skipped.is_empty() {
            let names = page
                .skipped
                .iter()
                .map(|s| escape_html(s.nation.as_str()))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "    <p class=\"skipped\">Could not check: {}</p>", names);
        }

        if !page.exclusions.is_empty() {
            let names = page
                .exclusions
                .iter()
                .map(|n| escape_html(n.as_str()))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "    <p class=\"excluded\">Excluded: {}</p>", names);
        }

        out
    }
}
