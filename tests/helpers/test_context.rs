//! Test context for unified test setup
//!
//! Wires a [`ServiceFactory`] to a fresh mock backend.

use SmartAdventures::config::Settings;
use SmartAdventures::models::AuthToken;
use SmartAdventures::services::ServiceFactory;

use super::backend_mock::BackendMockServer;
use super::test_data::TEST_TOKEN;

/// Unified test context that manages all test components
pub struct TestContext {
    pub backend: BackendMockServer,
    pub settings: Settings,
    pub services: ServiceFactory,
}

impl TestContext {
    /// Create a new test context with an in-memory session
    pub async fn new() -> Self {
        // Initialize logging once
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let backend = BackendMockServer::new().await;

        let mut settings = Settings::default();
        settings.api.base_url = backend.base_url();
        settings.api.timeout_seconds = Some(5);

        let services = ServiceFactory::new(&settings)
            .await
            .expect("Failed to create services");

        Self { backend, settings, services }
    }

    /// Start with [`TEST_TOKEN`] in the session
    pub async fn logged_in() -> Self {
        let ctx = Self::new().await;
        ctx.services
            .session
            .set(AuthToken::new(TEST_TOKEN))
            .await
            .expect("Failed to store token");
        ctx
    }
}
