//! Writing feed files consumed by the mobile app.
//!
//! Feeds are serialized into a temporary file next to the destination and
//! renamed over it, so a failed run never leaves a truncated or half-written
//! file behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serialize `records` as an indented JSON array and atomically replace `path`.
///
/// Non-ASCII text is written verbatim as UTF-8.
///
/// # Errors
///
/// Returns [`OutputError::Serialize`] if a record cannot be serialized and
/// [`OutputError::Io`] if the temporary file cannot be created, written, or
/// renamed over `path`. The existing file is left untouched in every case.
pub fn write_json_feed<T: Serialize>(path: &Path, records: &[T]) -> Result<(), OutputError> {
    let io_err = |source: std::io::Error| OutputError::Io {
        path: path.display().to_string(),
        source,
    };

    let body = render_json_feed(records)?;

    let dir = parent_dir(path);
    let mut tmp = NamedTempFile::new_in(&dir).map_err(io_err)?;
    tmp.write_all(body.as_bytes()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    tracing::debug!(path = %path.display(), records = records.len(), "feed written");
    Ok(())
}

/// Render `records` the way [`write_json_feed`] writes them, with a trailing newline.
///
/// # Errors
///
/// Returns [`OutputError::Serialize`] if a record cannot be serialized.
pub fn render_json_feed<T: Serialize>(records: &[T]) -> Result<String, OutputError> {
    let mut body = serde_json::to_string_pretty(records)?;
    body.push('\n');
    Ok(body)
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
