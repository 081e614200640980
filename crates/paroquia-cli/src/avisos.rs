//! `avisos` command: announcements from the published spreadsheet.

use std::path::Path;

use anyhow::Context;
use paroquia_avisos::SheetClient;

use crate::feed;

/// Download the announcements sheet and write it to `output`.
///
/// # Errors
///
/// Returns an error if the sheet cannot be downloaded or parsed, contains no
/// announcements, or the file cannot be written. The existing file is left
/// unchanged on error.
pub(crate) async fn run_avisos(
    config: &paroquia_core::AppConfig,
    output: &Path,
    dry_run: bool,
) -> anyhow::Result<()> {
    let client = SheetClient::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build spreadsheet client")?;

    let avisos = client
        .fetch_announcements(&config.sheet_csv_url)
        .await
        .context("failed to sync announcements spreadsheet")?;

    feed::publish(&avisos, output, dry_run, "announcements")?;

    if !dry_run {
        println!(
            "announcements feed updated: {} announcements written to {}",
            avisos.len(),
            output.display()
        );
    }
    Ok(())
}
