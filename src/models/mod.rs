//! Data models module
//!
//! This module contains all data structures exchanged with the trip backend

pub mod trip;
pub mod comment;
pub mod user;
pub mod catalog;

// Re-export commonly used models
pub use trip::{Trip, TripId, TripRecord, TripSummary, TripRef, TripPayload, TripStatus, Person};
pub use comment::{Comment, CommentId, NewComment};
pub use user::{AuthToken, UserProfile, LoginRequest, RegisterRequest, AuthTokenResponse};
