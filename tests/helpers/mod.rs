//! Test helpers module
//!
//! This module provides utilities and helpers for testing the SmartAdventures client.
//! It includes a mock trip backend, test data and test context setup.

#![allow(dead_code)]

pub mod backend_mock;
pub mod test_context;
pub mod test_data;

pub use backend_mock::*;
pub use test_context::*;
pub use test_data::*;
