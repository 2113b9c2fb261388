//! Progress notification port
//!
//! Defines the interface for reporting progress during an endorsement scan.

use crate::ports::nation_api::ApiError;
use endorse_domain::{NationName, RegionId};

/// Callback for progress updates during a scan
///
/// Implementations live in the presentation layer. Progress is purely
/// observational and never changes the result.
pub trait ScanProgressNotifier: Send + Sync {
    /// Called once the subject's region is known
    fn on_region_resolved(&self, _region: &RegionId) {}

    /// Called before the first endorsement lookup
    fn on_scan_start(&self, total: usize);

    /// Called after a peer's endorsements were checked
    fn on_peer_checked(&self, peer: &NationName, checked: usize, total: usize, eligible: bool);

    /// Called when a peer's lookup failed and the peer was skipped
    fn on_peer_skipped(&self, _peer: &NationName, _checked: usize, _total: usize, _error: &ApiError) {
    }

    /// Called when the scan ends, complete or not
    fn on_scan_complete(&self, eligible: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ScanProgressNotifier for NoProgress {
    fn on_scan_start(&self, _total: usize) {}
    fn on_peer_checked(&self, _peer: &NationName, _checked: usize, _total: usize, _eligible: bool) {}
    fn on_scan_complete(&self, _eligible: usize) {}
}
