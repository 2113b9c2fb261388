//! Endorsement set logic
//!
//! - [`candidates::candidate_peers`] — region WA members minus subject and exclusions
//! - [`report::EndorsementReport`] — the outcome of a scan

pub mod candidates;
pub mod report;
