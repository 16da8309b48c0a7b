//! Utility modules
//!
//! This module contains common utilities used throughout the application,
//! including error handling, logging setup, date formatting and helper functions.

pub mod errors;
pub mod logging;
pub mod helpers;
pub mod date;

pub use errors::{SmartAdventuresError, ApiError, Result};
pub use date::DisplayLocale;
