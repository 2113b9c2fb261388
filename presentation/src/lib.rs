//! Presentation layer for nation-endorse
//!
//! This crate contains CLI definitions, the console and HTML report
//! renderers, and scan progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, FailurePolicyArg, OutputFormatArg};
pub use output::{
    console::ConsoleFormatter,
    emitter::{ProfileLink, RenderedReport, ReportEmitter},
    html::{HtmlRenderer, escape_html},
};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
