use crate::app_config::AppConfig;
use crate::ConfigError;

pub(crate) const DEFAULT_CHANNEL_ID: &str = "UC_ID_DO_CANAL_DA_PAROQUIA";
pub(crate) const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";
pub(crate) const DEFAULT_SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRoKUGDXqpBldSYmeEyAWxi9u3WVi-rMJJt7hjKwqEbtYldRJOpmwiirZblIMfOHJ2bXBWhIOQ5PoyM/pub?output=csv";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("PAROQUIA_LOG_LEVEL", "info");

    let youtube_api_key = lookup("YOUTUBE_API_KEY").ok();
    let youtube_channel_id = or_default("PAROQUIA_YOUTUBE_CHANNEL_ID", DEFAULT_CHANNEL_ID);
    let youtube_base_url = or_default("PAROQUIA_YOUTUBE_BASE_URL", DEFAULT_YOUTUBE_BASE_URL);
    let sheet_csv_url = or_default("PAROQUIA_SHEET_CSV_URL", DEFAULT_SHEET_CSV_URL);

    let videos_output = PathBuf::from(or_default("PAROQUIA_VIDEOS_OUTPUT", "videos.json"));
    let avisos_output = PathBuf::from(or_default("PAROQUIA_AVISOS_OUTPUT", "avisos.json"));

    let request_timeout_secs = parse_u64("PAROQUIA_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PAROQUIA_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("PAROQUIA_USER_AGENT", "paroquia-sync/0.1 (feed-sync)");

    Ok(AppConfig {
        log_level,
        youtube_api_key,
        youtube_channel_id,
        youtube_base_url,
        sheet_csv_url,
        videos_output,
        avisos_output,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
