//! HTTP client for the NationStates API

use async_trait::async_trait;
use endorse_application::{ApiError, NationApi};
use endorse_domain::{NationName, ShardQuery};
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::xml::extract_list;

/// Public API endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.nationstates.net/cgi-bin/api.cgi";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while constructing the client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid API base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("Empty User-Agent; the API rejects anonymous requests")]
    EmptyUserAgent,

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Descriptive User-Agent naming the tool and the nation running it
pub fn default_user_agent(subject: &NationName) -> String {
    format!(
        "nation-endorse/{} (by: {})",
        env!("CARGO_PKG_VERSION"),
        subject
    )
}

/// NationStates API client
///
/// One instance is shared for the whole run; requests are issued strictly
/// one at a time by the caller.
#[derive(Debug, Clone)]
pub struct NationStatesClient {
    client: reqwest::Client,
    base_url: Url,
}

impl NationStatesClient {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        if user_agent.trim().is_empty() {
            return Err(ClientError::EmptyUserAgent);
        }

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Full request URL for a shard query
    pub fn shard_url(&self, query: &ShardQuery) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair(query.target.param(), query.target.id())
            .append_pair("q", query.shard.query_name());
        url
    }

    /// GET the shard and return the raw response body
    ///
    /// Transport failures and non-2xx statuses are errors; nothing is retried.
    pub async fn fetch(&self, query: &ShardQuery) -> Result<Vec<u8>, ApiError> {
        let url = self.shard_url(query);
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::transport(query, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::status(
                query,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(query, format!("Failed to read response body: {}", e)))?;

        Ok(body.to_vec())
    }
}

#[async_trait]
impl NationApi for NationStatesClient {
    async fn fetch_shard(&self, query: &ShardQuery) -> Result<Vec<String>, ApiError> {
        let body = self.fetch(query).await?;
        extract_list(&body, query.shard.xml_tag()).map_err(|e| ApiError::parse(query, e.to_string()))
    }
}
