//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the SmartAdventures client. Log output goes to stderr so command
//! output on stdout stays clean.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::forms::ValidationErrors;
use crate::utils::errors::{SmartAdventuresError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file appender on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| SmartAdventuresError::Config(format!("Invalid log filter: {}", e)))?;

    let stderr_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = match config.file_path.as_deref() {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "smart-adventures.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SmartAdventuresError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a completed backend call
pub fn log_api_call(method: &str, path: &str, status: Option<u16>, duration_ms: u64) {
    match status {
        Some(code) if (200..300).contains(&code) => {
            debug!(
                method = method,
                path = path,
                status = code,
                duration_ms = duration_ms,
                "Backend call completed"
            );
        }
        _ => {
            warn!(
                method = method,
                path = path,
                status = status,
                duration_ms = duration_ms,
                "Backend call failed"
            );
        }
    }
}

/// Log a form that was blocked by validation
pub fn log_validation_failure(form: &str, errors: &ValidationErrors) {
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    info!(
        form = form,
        error_count = errors.len(),
        fields = ?fields,
        "Form submission blocked by validation"
    );
}

/// Log session lifecycle changes (login, register, logout)
pub fn log_session_event(event: &str, persisted: bool) {
    info!(event = event, persisted = persisted, "Session changed");
}
