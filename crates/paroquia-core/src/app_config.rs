use std::path::PathBuf;

use crate::ConfigError;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Only the `videos` job needs a key, so absence is reported by
    /// [`AppConfig::require_youtube_api_key`] rather than at load time.
    pub youtube_api_key: Option<String>,
    pub youtube_channel_id: String,
    pub youtube_base_url: String,
    pub sheet_csv_url: String,
    pub videos_output: PathBuf,
    pub avisos_output: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// Returns the `YouTube` API key, failing when `YOUTUBE_API_KEY` was not set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when the key is absent or blank.
    pub fn require_youtube_api_key(&self) -> Result<&str, ConfigError> {
        self.youtube_api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("YOUTUBE_API_KEY".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("youtube_channel_id", &self.youtube_channel_id)
            .field("youtube_base_url", &self.youtube_base_url)
            .field("sheet_csv_url", &self.sheet_csv_url)
            .field("videos_output", &self.videos_output)
            .field("avisos_output", &self.avisos_output)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
