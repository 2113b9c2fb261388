//! Nation and region identifiers, and the API shards that describe them.
//!
//! - [`name::NationName`] — a normalized nation identifier
//! - [`region::RegionId`] — the region a nation resides in
//! - [`shard::ShardQuery`] — a single `nation=`/`region=` API lookup

pub mod name;
pub mod region;
pub mod shard;
