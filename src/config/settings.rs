//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use crate::utils::date::DisplayLocale;

/// Prefix for environment overrides, e.g. `SMART_ADVENTURES_API__BASE_URL`
pub const ENV_PREFIX: &str = "SMART_ADVENTURES";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Trip backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// No timeout when unset
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

/// Session token storage
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// File the auth token is kept in between runs; memory only when unset
    pub file_path: Option<String>,
}

/// Display preferences
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub locale: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files
    pub file_path: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from `config.toml` (if present) and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Load settings from an explicit configuration file and environment variables
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        Self::load(Some(path))
    }

    fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::with_name(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::SmartAdventuresError> {
        super::validation::validate_settings(self)
    }

    /// Configured display locale, falling back to the default for unknown values
    pub fn display_locale(&self) -> DisplayLocale {
        self.display.locale.parse().unwrap_or_default()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080".to_string(),
                timeout_seconds: None,
                user_agent: format!("SmartAdventures/{}", env!("CARGO_PKG_VERSION")),
            },
            session: SessionConfig {
                file_path: None,
            },
            display: DisplayConfig {
                locale: DisplayLocale::default().as_str().to_string(),
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                file_path: None,
                json: false,
            },
        }
    }
}
