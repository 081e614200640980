//! Shared configuration and feed output for the parish sync jobs.

pub mod app_config;
mod config;
pub mod output;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use output::{render_json_feed, write_json_feed, OutputError};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
