//! Find Endorsable use case
//!
//! Resolves the subject's region, lists the region's WA members, and checks
//! each candidate's endorsement list for the subject.

use crate::config::{ScanConfig, ScanFailurePolicy};
use crate::ports::nation_api::{ApiError, NationApi};
use crate::ports::progress::{NoProgress, ScanProgressNotifier};
use crate::ports::rate_limiter::RateLimiter;
use endorse_domain::{
    EndorsementReport, NationName, RegionId, ShardQuery, SkippedPeer, candidate_peers,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while finding endorsable nations
#[derive(Error, Debug)]
pub enum FindEndorsableError {
    #[error("Could not look up the region of {nation}")]
    RegionLookup {
        nation: NationName,
        #[source]
        source: ApiError,
    },

    #[error("Nation {0} has no region (does it exist?)")]
    EmptyResult(NationName),

    #[error("Could not list the WA nations of {region}")]
    MemberLookup {
        region: RegionId,
        #[source]
        source: ApiError,
    },

    #[error("Could not check the endorsements of {nation}")]
    EndorsementLookup {
        nation: NationName,
        #[source]
        source: ApiError,
    },

    #[error("Interrupted before the scan started")]
    Interrupted,
}

impl FindEndorsableError {
    /// The underlying API error, if the failure came from a request
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            FindEndorsableError::RegionLookup { source, .. }
            | FindEndorsableError::MemberLookup { source, .. }
            | FindEndorsableError::EndorsementLookup { source, .. } => Some(source),
            FindEndorsableError::EmptyResult(_) | FindEndorsableError::Interrupted => None,
        }
    }

    /// A required value was missing from an otherwise valid response
    pub fn is_empty_result(&self) -> bool {
        matches!(self, FindEndorsableError::EmptyResult(_))
    }
}

/// Input for the FindEndorsable use case
#[derive(Debug, Clone)]
pub struct FindEndorsableInput {
    /// Nation whose endorsements are being planned
    pub subject: NationName,
    /// Nations never to check or list
    pub exclusions: BTreeSet<NationName>,
    pub config: ScanConfig,
}

impl FindEndorsableInput {
    pub fn new(subject: NationName) -> Self {
        Self {
            subject,
            exclusions: BTreeSet::new(),
            config: ScanConfig::default(),
        }
    }

    pub fn with_exclusions(mut self, exclusions: impl IntoIterator<Item = NationName>) -> Self {
        self.exclusions.extend(exclusions);
        self
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }
}

/// What a scan over the candidate peers produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Peers not yet endorsed by the subject, in visiting order
    pub eligible: Vec<NationName>,
    pub skipped: Vec<SkippedPeer>,
    /// Peers whose lookup finished, successfully or skipped
    pub checked: usize,
    pub interrupted: bool,
}

/// Use case for finding the nations a subject can still endorse
pub struct FindEndorsableUseCase<A: NationApi + 'static> {
    api: Arc<A>,
    limiter: Arc<dyn RateLimiter>,
}

impl<A: NationApi + 'static> FindEndorsableUseCase<A> {
    pub fn new(api: Arc<A>, limiter: Arc<dyn RateLimiter>) -> Self {
        Self { api, limiter }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: FindEndorsableInput,
    ) -> Result<EndorsementReport, FindEndorsableError> {
        self.execute_with_progress(input, &NoProgress, &CancellationToken::new())
            .await
    }

    /// Execute the use case with progress callbacks and cancellation.
    ///
    /// Cancelling during the region or member lookup fails with
    /// [`FindEndorsableError::Interrupted`]. Cancelling during the scan is not
    /// an error: the peers checked so far are returned in a report marked as
    /// interrupted.
    pub async fn execute_with_progress(
        &self,
        input: FindEndorsableInput,
        progress: &dyn ScanProgressNotifier,
        cancel: &CancellationToken,
    ) -> Result<EndorsementReport, FindEndorsableError> {
        info!("Finding endorsable nations for {}", input.subject);

        let lookups = async {
            let region = self.resolve_group(&input.subject).await?;
            progress.on_region_resolved(&region);
            let candidates = self
                .enumerate_candidates(&region, &input.subject, &input.exclusions)
                .await?;
            Ok::<_, FindEndorsableError>((region, candidates))
        };

        let (region, candidates) = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("Cancelled before the scan started");
                return Err(FindEndorsableError::Interrupted);
            }
            result = lookups => result?,
        };

        if cancel.is_cancelled() {
            info!("Cancelled before the scan started");
            return Err(FindEndorsableError::Interrupted);
        }

        let outcome = self
            .scan(&candidates, &input.subject, &input.config, progress, cancel)
            .await?;

        let report = EndorsementReport::new(
            input.subject,
            region,
            candidates.len(),
            outcome.eligible,
        )
        .with_skipped(outcome.skipped);

        Ok(if outcome.interrupted {
            report.mark_interrupted(outcome.checked)
        } else {
            report
        })
    }

    /// Look up the region the subject resides in
    pub async fn resolve_group(&self, subject: &NationName) -> Result<RegionId, FindEndorsableError> {
        let values = self
            .fetch(&ShardQuery::nation_region(subject))
            .await
            .map_err(|source| FindEndorsableError::RegionLookup {
                nation: subject.clone(),
                source,
            })?;

        let region = values
            .into_iter()
            .find_map(|value| RegionId::new(value).ok())
            .ok_or_else(|| FindEndorsableError::EmptyResult(subject.clone()))?;

        info!("{} resides in {}", subject, region);
        Ok(region)
    }

    /// WA members of `region`, minus the subject and the exclusions
    pub async fn enumerate_candidates(
        &self,
        region: &RegionId,
        subject: &NationName,
        exclusions: &BTreeSet<NationName>,
    ) -> Result<BTreeSet<NationName>, FindEndorsableError> {
        let values = self
            .fetch(&ShardQuery::region_wa_nations(region))
            .await
            .map_err(|source| FindEndorsableError::MemberLookup {
                region: region.clone(),
                source,
            })?;

        let members = NationName::set_from(values);
        let candidates = candidate_peers(members.iter().cloned(), subject, exclusions);

        info!(
            "{} has {} WA nations, {} to check",
            region,
            members.len(),
            candidates.len()
        );
        Ok(candidates)
    }

    /// Check every candidate, in ascending name order, for the subject's endorsement
    pub async fn scan(
        &self,
        candidates: &BTreeSet<NationName>,
        subject: &NationName,
        config: &ScanConfig,
        progress: &dyn ScanProgressNotifier,
        cancel: &CancellationToken,
    ) -> Result<ScanOutcome, FindEndorsableError> {
        let total = candidates.len();
        let mut outcome = ScanOutcome::default();

        progress.on_scan_start(total);

        for (index, peer) in candidates.iter().enumerate() {
            let checked = index + 1;

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!("Scan cancelled after {} of {} nations", index, total);
                    outcome.interrupted = true;
                    break;
                }
                result = self.is_endorsable(peer, subject) => result,
            };

            match result {
                Ok(eligible) => {
                    debug!("{}: endorsable = {}", peer, eligible);
                    outcome.checked = checked;
                    if eligible {
                        outcome.eligible.push(peer.clone());
                    }
                    progress.on_peer_checked(peer, checked, total, eligible);
                }
                Err(source) => match config.on_error {
                    ScanFailurePolicy::Abort => {
                        return Err(FindEndorsableError::EndorsementLookup {
                            nation: peer.clone(),
                            source,
                        });
                    }
                    ScanFailurePolicy::Skip => {
                        warn!("Skipping {}: {}", peer, source);
                        outcome.checked = checked;
                        progress.on_peer_skipped(peer, checked, total, &source);
                        outcome.skipped.push(SkippedPeer {
                            nation: peer.clone(),
                            reason: source.to_string(),
                        });
                    }
                },
            }
        }

        progress.on_scan_complete(outcome.eligible.len());
        Ok(outcome)
    }

    /// True when `subject` is absent from `peer`'s endorsement list
    async fn is_endorsable(&self, peer: &NationName, subject: &NationName) -> Result<bool, ApiError> {
        let endorsers = self
            .fetch(&ShardQuery::nation_endorsements(peer))
            .await?;
        Ok(!NationName::set_from(endorsers).contains(subject))
    }

    async fn fetch(&self, query: &ShardQuery) -> Result<Vec<String>, ApiError> {
        self.limiter.acquire().await;
        debug!("Fetching {}", query);
        self.api.fetch_shard(query).await
    }
}
