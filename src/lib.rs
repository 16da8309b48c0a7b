//! SmartAdventures trip planning client
//!
//! Lets a user leave a trip plan (participants, emergency contacts, dates,
//! activities and supplies) with the SmartAdventures backend, follow the
//! comment thread on each trip and manage their account.

#![allow(non_snake_case)]

pub mod cli;
pub mod config;
pub mod forms;
pub mod models;
pub mod pages;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{SmartAdventuresError, ApiError, Result};

// Re-export main components for easy access
pub use forms::{TripForm, ValidationErrors, ValidationErrorKind};
pub use pages::Route;
pub use services::{ServiceFactory, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
