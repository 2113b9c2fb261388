//! NationStates API port
//!
//! Defines how the application layer reads shards from the NationStates API.

use async_trait::async_trait;
use endorse_domain::ShardQuery;
use thiserror::Error;

/// Errors that can occur while fetching a shard
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Network, DNS, or timeout failure
    #[error("Request failed ({query}): {message}")]
    Transport { query: String, message: String },

    /// The server answered with a non-2xx status
    #[error("Request failed ({query}): HTTP {status} {reason}")]
    Status {
        query: String,
        status: u16,
        reason: String,
    },

    /// Response body is not well-formed XML
    #[error("Malformed response ({query}): {message}")]
    Parse { query: String, message: String },
}

impl ApiError {
    pub fn transport(query: &ShardQuery, message: impl Into<String>) -> Self {
        Self::Transport {
            query: query.to_string(),
            message: message.into(),
        }
    }

    pub fn status(query: &ShardQuery, status: u16, reason: impl Into<String>) -> Self {
        Self::Status {
            query: query.to_string(),
            status,
            reason: reason.into(),
        }
    }

    pub fn parse(query: &ShardQuery, message: impl Into<String>) -> Self {
        Self::Parse {
            query: query.to_string(),
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ApiError::Parse { .. })
    }
}

/// Read access to the NationStates API
///
/// One call performs one HTTP request and returns the comma separated
/// payload of the shard's element, sorted. A missing or empty element
/// yields an empty list, not an error.
#[async_trait]
pub trait NationApi: Send + Sync {
    async fn fetch_shard(&self, query: &ShardQuery) -> Result<Vec<String>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use endorse_domain::NationName;

    #[test]
    fn test_error_kinds() {
        let query = ShardQuery::nation_region(&NationName::new("x").unwrap());
        let transport = ApiError::transport(&query, "connection refused");
        assert!(transport.is_transport());
        assert!(!transport.is_parse());
        assert_eq!(
            transport.to_string(),
            "Request failed (nation=x&q=region): connection refused"
        );

        let status = ApiError::status(&query, 404, "Not Found");
        assert!(status.is_status());
        assert!(!status.is_transport());
        assert_eq!(
            status.to_string(),
            "Request failed (nation=x&q=region): HTTP 404 Not Found"
        );
        assert!(ApiError::parse(&query, "unexpected end").is_parse());
    }
}
