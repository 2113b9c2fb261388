//! Domain layer for nation-endorse
//!
//! This crate contains the core value objects and the pure set arithmetic
//! behind the endorsement check. It has no dependencies on networking,
//! rendering or configuration files.
//!
//! # Core Concepts
//!
//! - **Nation**: a normalized account identifier ([`NationName`])
//! - **Region**: the affiliation group a nation belongs to ([`RegionId`])
//! - **Shard**: one queryable field of the NationStates API ([`Shard`])
//! - **Candidate peers**: WA members of the region minus the subject and
//!   any exclusions ([`candidate_peers`])
//! - **Report**: the sorted list of peers the subject may still endorse
//!   ([`EndorsementReport`])

pub mod config;
pub mod core;
pub mod endorsement;
pub mod nation;

// Re-export commonly used types
pub use config::OutputFormat;
pub use self::core::error::DomainError;
pub use endorsement::{
    candidates::candidate_peers,
    report::{EndorsementReport, SkippedPeer, sorted_unique},
};
pub use nation::{
    name::{NationName, PROFILE_URL_BASE, normalize},
    region::RegionId,
    shard::{Shard, ShardQuery, ShardTarget},
};
