//! Normalization of raw search items into feed records.

use serde::{Deserialize, Serialize};

use crate::error::YoutubeError;
use crate::types::{BroadcastContent, RawItem, SearchResult};

/// A video as the mobile app reads it from `videos.json`.
///
/// Field names on the wire follow the app's existing contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoRecord {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
    #[serde(rename = "data_publicacao")]
    pub published_at: String,
    #[serde(rename = "isLive")]
    pub is_live: bool,
    #[serde(rename = "isUpcoming")]
    pub is_upcoming: bool,
}

/// Converts one raw search item into a [`VideoRecord`].
///
/// # Errors
///
/// Returns [`YoutubeError::MalformedItem`] if the item lacks `id.videoId`,
/// `snippet.title`, `snippet.thumbnails.high.url` or `snippet.publishedAt`.
pub fn normalize(item: &RawItem) -> Result<VideoRecord, YoutubeError> {
    let result = SearchResult::deserialize(item).map_err(|source| YoutubeError::MalformedItem {
        video_id: item
            .pointer("/id/videoId")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("<unknown>")
            .to_string(),
        source,
    })?;

    let status = result.snippet.live_broadcast_content;
    Ok(VideoRecord {
        id: result.id.video_id,
        title: result.snippet.title,
        thumbnail_url: result.snippet.thumbnails.high.url,
        published_at: result.snippet.published_at,
        is_live: status == BroadcastContent::Live,
        is_upcoming: status == BroadcastContent::Upcoming,
    })
}
