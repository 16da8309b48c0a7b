//! Error handling for SmartAdventures
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy. Backend errors keep the
//! message sent by the server so it can be shown to the user unmodified.

use thiserror::Error;
use crate::forms::ValidationErrors;

/// Main error type for SmartAdventures
#[derive(Error, Debug)]
pub enum SmartAdventuresError {
    #[error("Backend API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Malformed `{field}` field in trip record: {source}")]
    MalformedField {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Trip draft parsing error: {0}")]
    Draft(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Backend API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response. `message` is taken from the response body.
    #[error("{message} (HTTP {status})")]
    Backend { status: u16, message: String },

    #[error("Backend API timeout")]
    Timeout,

    #[error("Backend service unavailable")]
    ServiceUnavailable,

    #[error("Backend API request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for SmartAdventures operations
pub type Result<T> = std::result::Result<T, SmartAdventuresError>;

impl SmartAdventuresError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            SmartAdventuresError::Api(ApiError::Backend { status, .. }) => *status >= 500,
            SmartAdventuresError::Api(ApiError::InvalidResponse(_)) => false,
            SmartAdventuresError::Api(_) => true,
            SmartAdventuresError::Config(_) => false,
            SmartAdventuresError::Validation(_) => true,
            SmartAdventuresError::MalformedField { .. } => false,
            SmartAdventuresError::NotAuthenticated => true,
            SmartAdventuresError::Http(_) => true,
            SmartAdventuresError::Serialization(_) => false,
            SmartAdventuresError::Draft(_) => true,
            SmartAdventuresError::Io(_) => true,
            SmartAdventuresError::UrlParse(_) => false,
            SmartAdventuresError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SmartAdventuresError::Config(_) => ErrorSeverity::Critical,
            SmartAdventuresError::UrlParse(_) => ErrorSeverity::Critical,
            SmartAdventuresError::NotAuthenticated => ErrorSeverity::Warning,
            SmartAdventuresError::Api(ApiError::Backend { status, .. }) if *status < 500 => ErrorSeverity::Warning,
            SmartAdventuresError::Validation(_) => ErrorSeverity::Info,
            SmartAdventuresError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Text for the page's error banner.
    ///
    /// Backend rejections are surfaced verbatim; transport and decoding
    /// failures get a generic message.
    pub fn user_message(&self) -> String {
        match self {
            SmartAdventuresError::Api(ApiError::Backend { message, .. }) => message.clone(),
            SmartAdventuresError::Api(ApiError::Timeout) => {
                "The server took too long to respond. Please try again.".to_string()
            }
            SmartAdventuresError::Api(ApiError::ServiceUnavailable) => {
                "The server could not be reached. Please try again later.".to_string()
            }
            SmartAdventuresError::Api(ApiError::InvalidResponse(_))
            | SmartAdventuresError::MalformedField { .. }
            | SmartAdventuresError::Serialization(_) => {
                "Something went wrong while reading the server response.".to_string()
            }
            SmartAdventuresError::Validation(errors) => errors.to_string(),
            SmartAdventuresError::NotAuthenticated => "Please log in to continue.".to_string(),
            SmartAdventuresError::InvalidInput(message) => message.clone(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl From<ValidationErrors> for SmartAdventuresError {
    fn from(errors: ValidationErrors) -> Self {
        SmartAdventuresError::Validation(errors)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
