//! Comment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::trip::TripId;

pub type CommentId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub username: String,
    #[serde(rename = "comment")]
    pub text: String,
    pub trip_id: TripId,
    pub posted_at: DateTime<Utc>,
}

/// Body of `POST /comments/:trip_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub username: String,
    #[serde(rename = "comment")]
    pub text: String,
    pub trip_id: TripId,
}
