//! Mapping spreadsheet rows into announcements.
//!
//! Expected header: `Titulo`, `Data`, `Mensagem` and an optional `Destaque`
//! column. Rows shorter than the header are accepted; their missing cells
//! come out as `null`.

use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;

use crate::error::AvisosError;

const COL_TITLE: &str = "Titulo";
const COL_DATE: &str = "Data";
const COL_MESSAGE: &str = "Mensagem";
const COL_HIGHLIGHT: &str = "Destaque";

/// One announcement as the mobile app reads it from `avisos.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub titulo: String,
    pub data: Option<String>,
    pub mensagem: Option<String>,
    pub destaque: bool,
}

struct Columns {
    title: usize,
    date: usize,
    message: usize,
    highlight: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, AvisosError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &'static str| find(name).ok_or(AvisosError::MissingColumn(name));

        Ok(Self {
            title: require(COL_TITLE)?,
            date: require(COL_DATE)?,
            message: require(COL_MESSAGE)?,
            highlight: find(COL_HIGHLIGHT),
        })
    }
}

/// Parses the published CSV into announcements, in sheet order.
///
/// Rows with an empty title are skipped. `Destaque` counts as set when it
/// reads `sim` in any letter case, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`AvisosError::MissingColumn`] if a required header is absent and
/// [`AvisosError::Csv`] if the text is not well-formed CSV.
pub fn parse_announcements(csv_text: &str) -> Result<Vec<Announcement>, AvisosError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let columns = Columns::locate(reader.headers()?)?;

    let mut announcements = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        let titulo = record.get(columns.title).unwrap_or_default();
        if titulo.is_empty() {
            skipped += 1;
            continue;
        }

        let destaque = columns
            .highlight
            .and_then(|i| record.get(i))
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("SIM"));

        announcements.push(Announcement {
            titulo: titulo.to_string(),
            data: record.get(columns.date).map(str::to_string),
            mensagem: record.get(columns.message).map(str::to_string),
            destaque,
        });
    }

    tracing::debug!(parsed = announcements.len(), skipped, "spreadsheet rows parsed");
    Ok(announcements)
}
