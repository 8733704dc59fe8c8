//! Shared domain types and configuration for the Bible API client workspace.

mod app_config;
mod config;
mod reference;

pub use app_config::{AppConfig, DEFAULT_BASE_URL};
pub use config::{load_app_config, load_app_config_from_env, load_app_config_with_base_url};
pub use reference::{ChapterRequest, RangeSpec, ReferenceError, VerseRequest};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
