//! Profile page

use std::sync::Arc;

use tracing::warn;

use crate::models::UserProfile;
use crate::pages::Route;
use crate::services::{AuthRepository, ServiceFactory, SessionStore};
use crate::utils::errors::Result;

pub struct ProfilePage {
    auth: Arc<dyn AuthRepository>,
    session: SessionStore,
    pub is_loading: bool,
    pub profile: Option<UserProfile>,
}

impl ProfilePage {
    pub fn new(services: &ServiceFactory) -> Self {
        Self {
            auth: services.auth.clone(),
            session: services.session.clone(),
            is_loading: true,
            profile: None,
        }
    }

    /// Fetch the profile. Any failure ends the session and returns to the home page.
    pub async fn load(&mut self) -> Result<Route> {
        let result = match self.session.require_token() {
            Ok(token) => self.auth.profile(&token).await,
            Err(e) => Err(e),
        };
        self.is_loading = false;

        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                Ok(Route::Profile)
            }
            Err(e) => {
                warn!(error = %e, "Profile unavailable, logging out");
                self.logout().await
            }
        }
    }

    pub async fn logout(&mut self) -> Result<Route> {
        self.session.clear().await?;
        self.profile = None;
        Ok(Route::Home)
    }
}
