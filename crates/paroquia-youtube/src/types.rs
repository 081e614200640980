//! `YouTube` Data API v3 `search.list` response types.
//!
//! The envelope keeps items as raw JSON so one malformed item can be told
//! apart from a malformed response: the former aborts the run in
//! [`crate::normalize`], the latter only empties the tier.

use serde::Deserialize;

/// One untyped entry of the `items` array.
pub type RawItem = serde_json::Value;

/// Envelope of a `search.list` response. A missing `items` key reads as empty.
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<RawItem>,
}

/// Typed view of a single `search#result` of kind `youtube#video`.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: ResourceId,
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    pub thumbnails: Thumbnails,
    /// RFC 3339 timestamp, kept as sent.
    pub published_at: String,
    #[serde(default)]
    pub live_broadcast_content: BroadcastContent,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnails {
    pub high: Thumbnail,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// Value of `snippet.liveBroadcastContent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastContent {
    #[default]
    None,
    Live,
    Upcoming,
    Completed,
    #[serde(other)]
    Unknown,
}

/// `eventType` filter sent with a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BroadcastFilter {
    Live,
    Upcoming,
    Completed,
    /// No `eventType` parameter: plain recent uploads.
    Any,
}

impl BroadcastFilter {
    /// The `eventType` query value, or `None` when the filter is omitted.
    #[must_use]
    pub fn event_type(self) -> Option<&'static str> {
        match self {
            BroadcastFilter::Live => Some("live"),
            BroadcastFilter::Upcoming => Some("upcoming"),
            BroadcastFilter::Completed => Some("completed"),
            BroadcastFilter::Any => None,
        }
    }
}

impl std::fmt::Display for BroadcastFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.event_type().unwrap_or("none"))
    }
}
