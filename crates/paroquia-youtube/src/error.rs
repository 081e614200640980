use thiserror::Error;

/// Errors returned by the `YouTube` search client and the feed aggregator.
#[derive(Debug, Error)]
pub enum YoutubeError {
    /// Network failure or non-2xx status. The request URL is stripped so the
    /// API key never reaches logs.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a `{ "items": [...] }` envelope.
    #[error("malformed response for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A search item lacked a field the feed needs.
    #[error("malformed search item {video_id}: {source}")]
    MalformedItem {
        video_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("maxResults must be between 1 and {max}, got {limit}")]
    InvalidLimit { limit: u32, max: u32 },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
