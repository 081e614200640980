//! `videos` command: prioritized `YouTube` feed.

use std::path::Path;

use anyhow::Context;
use paroquia_youtube::{aggregate, TierSource, YoutubeClient};

use crate::feed;

/// Build the video feed from the configured channel and write it to `output`.
///
/// # Errors
///
/// Returns an error if `YOUTUBE_API_KEY` is missing, the client cannot be
/// built, an item is malformed, every tier came back empty, or the file
/// cannot be written. The existing file is left unchanged on error.
pub(crate) async fn run_videos(
    config: &paroquia_core::AppConfig,
    output: &Path,
    dry_run: bool,
) -> anyhow::Result<()> {
    let api_key = config.require_youtube_api_key()?;

    let client = YoutubeClient::with_base_url(
        api_key,
        &config.youtube_channel_id,
        config.request_timeout_secs,
        &config.user_agent,
        &config.youtube_base_url,
    )
    .context("failed to build YouTube client")?;

    tracing::info!(channel_id = %config.youtube_channel_id, "fetching video feed");
    let count = sync_videos(&client, output, dry_run).await?;

    if !dry_run {
        println!("videos feed updated: {count} videos written to {}", output.display());
    }
    Ok(())
}

/// Aggregate videos from `source` and publish them; returns the feed length.
pub(crate) async fn sync_videos<S>(
    source: &S,
    output: &Path,
    dry_run: bool,
) -> anyhow::Result<usize>
where
    S: TierSource + Sync,
{
    let videos = aggregate(source)
        .await
        .context("video feed aggregation failed")?;
    feed::publish(&videos, output, dry_run, "videos")?;
    Ok(videos.len())
}
