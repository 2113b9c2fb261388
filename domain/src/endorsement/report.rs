//! Scan outcome value objects

use crate::nation::name::NationName;
use crate::nation::region::RegionId;
use serde::Serialize;
use std::collections::BTreeSet;

/// A candidate whose endorsement list could not be checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedPeer {
    pub nation: NationName,
    pub reason: String,
}

/// Result of checking every candidate peer (Value Object)
///
/// The eligible list is always sorted and free of duplicates, whatever order
/// the peers were visited in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndorsementReport {
    pub subject: NationName,
    pub region: RegionId,
    /// Number of candidate peers the scan started with
    pub candidates: usize,
    eligible: Vec<NationName>,
    pub skipped: Vec<SkippedPeer>,
    /// Number of candidates whose lookup finished
    pub checked: usize,
    /// Scan stopped before every candidate was checked
    pub interrupted: bool,
}

impl EndorsementReport {
    pub fn new<I>(subject: NationName, region: RegionId, candidates: usize, eligible: I) -> Self
    where
        I: IntoIterator<Item = NationName>,
    {
        Self {
            subject,
            region,
            candidates,
            eligible: sorted_unique(eligible),
            skipped: Vec::new(),
            checked: candidates,
            interrupted: false,
        }
    }

    pub fn with_skipped(mut self, skipped: Vec<SkippedPeer>) -> Self {
        self.skipped = skipped;
        self
    }

    /// Record that the scan stopped after `checked` candidates
    pub fn mark_interrupted(mut self, checked: usize) -> Self {
        self.interrupted = true;
        self.checked = checked.min(self.candidates);
        self
    }

    /// Peers the subject has not endorsed yet, in ascending order
    pub fn eligible(&self) -> &[NationName] {
        &self.eligible
    }

    /// Every candidate was checked successfully
    pub fn is_complete(&self) -> bool {
        !self.interrupted && self.skipped.is_empty()
    }

    /// Interrupted before a single candidate was checked; the report says
    /// nothing about the region
    pub fn is_vacant(&self) -> bool {
        self.interrupted && self.checked == 0
    }
}

/// Sort and deduplicate a list of nations
pub fn sorted_unique<I>(nations: I) -> Vec<NationName>
where
    I: IntoIterator<Item = NationName>,
{
    nations.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}
