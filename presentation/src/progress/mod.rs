//! Scan progress display

pub mod reporter;
