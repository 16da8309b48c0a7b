//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::date::DisplayLocale;
use crate::utils::errors::{SmartAdventuresError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_session_config(&settings.session)?;
    validate_display_config(&settings.display)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(SmartAdventuresError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)
        .map_err(|e| SmartAdventuresError::Config(format!("Invalid API base URL: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(SmartAdventuresError::Config(
            format!("API base URL must use http or https, got: {}", url.scheme())
        ));
    }

    if config.timeout_seconds == Some(0) {
        return Err(SmartAdventuresError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(SmartAdventuresError::Config(
            "User agent is required".to_string()
        ));
    }

    Ok(())
}

/// Validate session configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if let Some(path) = &config.file_path {
        if path.trim().is_empty() {
            return Err(SmartAdventuresError::Config(
                "Session file path must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate display configuration
fn validate_display_config(config: &super::DisplayConfig) -> Result<()> {
    config.locale.parse::<DisplayLocale>().map_err(|_| {
        let supported: Vec<&str> = DisplayLocale::ALL.iter().map(|l| l.as_str()).collect();
        SmartAdventuresError::Config(
            format!("Invalid display locale: {}. Supported locales: {:?}", config.locale, supported)
        )
    })?;

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SmartAdventuresError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SmartAdventuresError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if let Some(path) = &config.file_path {
        if path.trim().is_empty() {
            return Err(SmartAdventuresError::Config(
                "Log file path must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}
