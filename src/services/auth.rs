//! Authentication against the trip backend

use async_trait::async_trait;
use tracing::{debug, info};

use crate::models::{AuthToken, AuthTokenResponse, LoginRequest, RegisterRequest, UserProfile};
use crate::services::api::ApiClient;
use crate::utils::errors::Result;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Exchange credentials for a token
    async fn login(&self, email: &str, password: &str) -> Result<AuthToken>;

    /// Create an account; the backend logs the new user in right away
    async fn register(&self, request: &RegisterRequest) -> Result<AuthToken>;

    async fn profile(&self, token: &AuthToken) -> Result<UserProfile>;
}

#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthRepository for AuthService {
    async fn login(&self, email: &str, password: &str) -> Result<AuthToken> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthTokenResponse = self.api.post("login", &request, None).await?;
        info!("Logged in");
        Ok(response.auth_token)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthToken> {
        let response: AuthTokenResponse = self.api.post("register", request, None).await?;
        info!("Registered new account");
        Ok(response.auth_token)
    }

    async fn profile(&self, token: &AuthToken) -> Result<UserProfile> {
        let profile: UserProfile = self.api.get("profile", Some(token)).await?;
        debug!("Profile fetched");
        Ok(profile)
    }
}
