//! HTTP client for the `YouTube` Data API v3 `search` endpoint.
//!
//! Every request is scoped to one channel and asks for the newest videos,
//! optionally narrowed by broadcast state (`eventType`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::aggregate::TierSource;
use crate::error::YoutubeError;
use crate::types::{BroadcastFilter, RawItem, SearchListResponse};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Upper bound the API accepts for `maxResults`.
pub const MAX_RESULTS_CAP: u32 = 50;

/// Client for the `YouTube` search API, bound to one API key and channel.
///
/// Use [`YoutubeClient::new`] for production or
/// [`YoutubeClient::with_base_url`] to point at a mock server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    channel_id: String,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        channel_id: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, channel_id, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom API root (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`YoutubeError::InvalidBaseUrl`] if `base_url` does
    /// not parse.
    pub fn with_base_url(
        api_key: &str,
        channel_id: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // A trailing slash keeps `join("search")` appending instead of
        // replacing the last path segment (`/youtube/v3`).
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| YoutubeError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            channel_id: channel_id.to_owned(),
            base_url,
        })
    }

    /// Runs one `search.list` request and returns the raw `items`.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::InvalidLimit`] if `limit` is 0 or above
    ///   [`MAX_RESULTS_CAP`].
    /// - [`YoutubeError::Http`] on network failure or non-2xx status.
    /// - [`YoutubeError::Deserialize`] if the body is not a search envelope.
    pub async fn search(
        &self,
        filter: BroadcastFilter,
        limit: u32,
    ) -> Result<Vec<RawItem>, YoutubeError> {
        if limit == 0 || limit > MAX_RESULTS_CAP {
            return Err(YoutubeError::InvalidLimit {
                limit,
                max: MAX_RESULTS_CAP,
            });
        }

        let url = self.build_url(filter, limit)?;
        tracing::debug!(%filter, limit, "requesting YouTube search");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        let envelope: SearchListResponse =
            serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
                context: format!("search(eventType={filter})"),
                source: e,
            })?;

        Ok(envelope.items)
    }

    /// Builds the search URL with percent-encoded query parameters.
    fn build_url(&self, filter: BroadcastFilter, limit: u32) -> Result<Url, YoutubeError> {
        let mut url = self
            .base_url
            .join("search")
            .map_err(|e| YoutubeError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            pairs.append_pair("channelId", &self.channel_id);
            pairs.append_pair("part", "snippet");
            pairs.append_pair("order", "date");
            pairs.append_pair("maxResults", &limit.to_string());
            pairs.append_pair("type", "video");
            if let Some(event_type) = filter.event_type() {
                pairs.append_pair("eventType", event_type);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl TierSource for YoutubeClient {
    /// Like [`YoutubeClient::search`], but any failure is logged and read as
    /// an empty tier.
    async fn fetch_tier(&self, filter: BroadcastFilter, limit: u32) -> Vec<RawItem> {
        match self.search(filter, limit).await {
            Ok(items) => {
                tracing::info!(%filter, limit, fetched = items.len(), "search tier fetched");
                items
            }
            Err(e) => {
                tracing::warn!(%filter, limit, error = %e, "search tier failed; treating as empty");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
