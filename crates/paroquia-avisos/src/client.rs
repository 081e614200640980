//! Downloading the published spreadsheet.

use std::time::Duration;

use reqwest::Client;

use crate::error::AvisosError;
use crate::parse::{parse_announcements, Announcement};

/// HTTP client for a spreadsheet published to the web as CSV.
pub struct SheetClient {
    client: Client,
}

impl SheetClient {
    /// Creates a client with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`AvisosError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, AvisosError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Downloads the CSV at `url` and decodes it strictly as UTF-8.
    ///
    /// The body is decoded from raw bytes so accented text survives even when
    /// the server omits the charset from `Content-Type`.
    ///
    /// # Errors
    ///
    /// Returns [`AvisosError::Http`] on network failure or non-2xx status and
    /// [`AvisosError::Encoding`] if the body is not valid UTF-8.
    pub async fn fetch_csv(&self, url: &str) -> Result<String, AvisosError> {
        tracing::info!("downloading spreadsheet");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    /// Downloads and parses the announcements sheet.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`SheetClient::fetch_csv`] or
    /// [`parse_announcements`].
    pub async fn fetch_announcements(&self, url: &str) -> Result<Vec<Announcement>, AvisosError> {
        let text = self.fetch_csv(url).await?;
        parse_announcements(&text)
    }
}
