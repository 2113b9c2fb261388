//! API shards: which field of which entity to fetch

use super::name::NationName;
use super::region::RegionId;

/// A queryable API field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shard {
    /// Region a nation resides in (single value)
    Region,
    /// World Assembly members of a region (comma separated)
    WaNations,
    /// Nations endorsing a nation (comma separated)
    Endorsements,
}

impl Shard {
    /// Value of the `q=` query parameter
    pub fn query_name(&self) -> &'static str {
        match self {
            Shard::Region => "region",
            Shard::WaNations => "wanations",
            Shard::Endorsements => "endorsements",
        }
    }

    /// Element holding the payload in the XML response
    ///
    /// `wanations` answers with `<UNNATIONS>`, the field's historical name.
    pub fn xml_tag(&self) -> &'static str {
        match self {
            Shard::Region => "REGION",
            Shard::WaNations => "UNNATIONS",
            Shard::Endorsements => "ENDORSEMENTS",
        }
    }
}

impl std::fmt::Display for Shard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.query_name())
    }
}

/// Entity a shard is requested for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShardTarget {
    Nation(NationName),
    Region(RegionId),
}

impl ShardTarget {
    /// Name of the query parameter carrying the identifier
    pub fn param(&self) -> &'static str {
        match self {
            ShardTarget::Nation(_) => "nation",
            ShardTarget::Region(_) => "region",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ShardTarget::Nation(n) => n.as_str(),
            ShardTarget::Region(r) => r.as_str(),
        }
    }
}

/// A single API lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardQuery {
    pub target: ShardTarget,
    pub shard: Shard,
}

impl ShardQuery {
    pub fn nation_region(nation: &NationName) -> Self {
        Self {
            target: ShardTarget::Nation(nation.clone()),
            shard: Shard::Region,
        }
    }

    pub fn region_wa_nations(region: &RegionId) -> Self {
        Self {
            target: ShardTarget::Region(region.clone()),
            shard: Shard::WaNations,
        }
    }

    pub fn nation_endorsements(nation: &NationName) -> Self {
        Self {
            target: ShardTarget::Nation(nation.clone()),
            shard: Shard::Endorsements,
        }
    }
}

impl std::fmt::Display for ShardQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}&q={}", self.target.param(), self.target.id(), self.shard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shard_names() {
        assert_eq!(Shard::Region.query_name(), "region");
        assert_eq!(Shard::WaNations.query_name(), "wanations");
        assert_eq!(Shard::Endorsements.query_name(), "endorsements");
        assert_eq!(Shard::WaNations.xml_tag(), "UNNATIONS");
        assert_eq!(Shard::Endorsements.xml_tag(), "ENDORSEMENTS");
    }

    #[test]
    fn test_query_display() {
        let nation = NationName::new("Testlandia").unwrap();
        assert_eq!(
            ShardQuery::nation_endorsements(&nation).to_string(),
            "nation=testlandia&q=endorsements"
        );
        let region = RegionId::new("the_pacific").unwrap();
        assert_eq!(
            ShardQuery::region_wa_nations(&region).to_string(),
            "region=the_pacific&q=wanations"
        );
    }
}
