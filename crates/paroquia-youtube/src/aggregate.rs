//! Priority-ordered video feed: live first, then upcoming, then history.
//!
//! Each tier is one search request. Results are appended in tier order and
//! deduplicated by video id, so the first tier a video shows up in decides
//! its position and flags.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::YoutubeError;
use crate::normalize::{normalize, VideoRecord};
use crate::types::{BroadcastFilter, RawItem};

pub const LIVE_LIMIT: u32 = 1;
pub const UPCOMING_LIMIT: u32 = 2;
pub const HISTORICAL_LIMIT: u32 = 10;

/// Source of raw search items for one broadcast filter.
///
/// Implementations swallow their own failures: a tier that cannot be
/// fetched yields an empty list.
#[async_trait]
pub trait TierSource {
    async fn fetch_tier(&self, filter: BroadcastFilter, limit: u32) -> Vec<RawItem>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Live,
    Upcoming,
    Historical,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Live => write!(f, "live"),
            Tier::Upcoming => write!(f, "upcoming"),
            Tier::Historical => write!(f, "historical"),
        }
    }
}

/// Builds the video feed from `source`.
///
/// An empty result means every tier came back empty; the caller decides
/// whether that is fatal.
///
/// # Errors
///
/// Returns [`YoutubeError::MalformedItem`] if any fetched item cannot be
/// normalized. One bad item fails the whole feed.
pub async fn aggregate<S>(source: &S) -> Result<Vec<VideoRecord>, YoutubeError>
where
    S: TierSource + Sync + ?Sized,
{
    let mut feed = FeedBuilder::default();

    let live = source.fetch_tier(BroadcastFilter::Live, LIVE_LIMIT).await;
    feed.extend(Tier::Live, &live)?;

    let upcoming = source
        .fetch_tier(BroadcastFilter::Upcoming, UPCOMING_LIMIT)
        .await;
    feed.extend(Tier::Upcoming, &upcoming)?;

    let mut historical = source
        .fetch_tier(BroadcastFilter::Completed, HISTORICAL_LIMIT)
        .await;
    if historical.is_empty() {
        // Not every channel answers `eventType=completed`.
        tracing::info!("no completed broadcasts returned; falling back to recent uploads");
        historical = source
            .fetch_tier(BroadcastFilter::Any, HISTORICAL_LIMIT)
            .await;
    }
    feed.extend(Tier::Historical, &historical)?;

    Ok(feed.records)
}

#[derive(Default)]
struct FeedBuilder {
    seen: HashSet<String>,
    records: Vec<VideoRecord>,
}

impl FeedBuilder {
    fn extend(&mut self, tier: Tier, items: &[RawItem]) -> Result<(), YoutubeError> {
        let mut added = 0usize;
        for item in items {
            let record = normalize(item)?;
            if self.seen.insert(record.id.clone()) {
                self.records.push(record);
                added += 1;
            } else {
                tracing::debug!(%tier, id = %record.id, "skipping duplicate video");
            }
        }
        tracing::info!(%tier, fetched = items.len(), added, "tier merged");
        Ok(())
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
