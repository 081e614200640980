use std::path::Path;

use anyhow::Context;
use serde::Serialize;

/// Writes `records` to `output`, or prints them when `dry_run` is set.
///
/// An empty feed is an error: the app would show nothing, so the previous
/// file is kept instead.
pub(crate) fn publish<T: Serialize>(
    records: &[T],
    output: &Path,
    dry_run: bool,
    kind: &str,
) -> anyhow::Result<()> {
    if records.is_empty() {
        anyhow::bail!("no {kind} fetched; {} left unchanged", output.display());
    }

    if dry_run {
        print!("{}", paroquia_core::render_json_feed(records)?);
        return Ok(());
    }

    paroquia_core::write_json_feed(output, records)
        .with_context(|| format!("failed to write {kind} feed to {}", output.display()))?;
    tracing::info!(path = %output.display(), count = records.len(), "{kind} feed written");
    Ok(())
}
