//! Services module
//!
//! Repositories for the trip backend and the session token store

pub mod api;
pub mod auth;
pub mod comments;
pub mod session;
pub mod trips;

// Re-export commonly used services
pub use api::ApiClient;
pub use auth::{AuthRepository, AuthService};
pub use comments::{CommentRepository, CommentService};
pub use session::SessionStore;
pub use trips::{TripRepository, TripService};

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and sharing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub trips: Arc<dyn TripRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub auth: Arc<dyn AuthRepository>,
    pub session: SessionStore,
}

impl ServiceFactory {
    /// Create a new ServiceFactory backed by the configured API
    pub async fn new(settings: &Settings) -> Result<Self> {
        let api = ApiClient::new(&settings.api)?;
        let session = SessionStore::from_config(&settings.session).await?;

        Ok(Self {
            trips: Arc::new(TripService::new(api.clone())),
            comments: Arc::new(CommentService::new(api.clone())),
            auth: Arc::new(AuthService::new(api)),
            session,
        })
    }
}
