//! Report rendering
//!
//! [`emitter::ReportEmitter`] turns the eligible list into both outputs; the
//! console and HTML renderers only format what it hands them, so every
//! nation appears with the same link in both.

pub mod console;
pub mod emitter;
pub mod html;
