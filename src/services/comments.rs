//! Comment repository backed by the REST API

use async_trait::async_trait;
use tracing::info;

use crate::models::{CommentId, NewComment, TripId};
use crate::services::api::ApiClient;
use crate::utils::errors::Result;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, trip_id: TripId, username: &str, text: &str) -> Result<()>;

    async fn delete(&self, comment_id: CommentId) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct CommentService {
    api: ApiClient,
}

impl CommentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CommentRepository for CommentService {
    async fn create(&self, trip_id: TripId, username: &str, text: &str) -> Result<()> {
        let body = NewComment {
            username: username.to_string(),
            text: text.to_string(),
            trip_id,
        };
        self.api.post_empty(&format!("comments/{}", trip_id), &body, None).await?;
        info!(trip_id = trip_id, "Comment posted");
        Ok(())
    }

    async fn delete(&self, comment_id: CommentId) -> Result<()> {
        self.api.delete(&format!("comments/{}", comment_id), None).await?;
        info!(comment_id = comment_id, "Comment deleted");
        Ok(())
    }
}
