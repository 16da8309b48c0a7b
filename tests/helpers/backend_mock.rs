//! Mock trip backend for testing
//!
//! This module provides a mock HTTP server that simulates the SmartAdventures
//! REST API. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::test_data::TEST_TOKEN;

/// Mock backend server for testing
pub struct BackendMockServer {
    pub server: MockServer,
}

impl BackendMockServer {
    /// Start a new mock backend
    pub async fn new() -> Self {
        Self { server: MockServer::start().await }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    fn bearer() -> String {
        format!("Bearer {}", TEST_TOKEN)
    }

    /// `POST /login` issuing [`TEST_TOKEN`]
    pub async fn mock_login(&self, email: &str, password: &str) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(json!({"email": email, "password": password})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authToken": TEST_TOKEN})))
            .mount(&self.server)
            .await;
    }

    /// `POST /register` issuing [`TEST_TOKEN`] for the exact body given
    pub async fn mock_register(&self, expected_body: Value) {
        Mock::given(method("POST"))
            .and(path("/register"))
            .and(body_json(expected_body))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"authToken": TEST_TOKEN})))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_profile(&self, profile: Value) {
        Mock::given(method("GET"))
            .and(path("/profile"))
            .and(header("authorization", Self::bearer().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_list_trips(&self, trips: Value) {
        Mock::given(method("GET"))
            .and(path("/trips"))
            .and(header("authorization", Self::bearer().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(trips))
            .mount(&self.server)
            .await;
    }

    /// `GET /trips/:id`, which needs no authentication
    pub async fn mock_fetch_trip(&self, id: i64, record: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/trips/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(record))
            .mount(&self.server)
            .await;
    }

    /// `POST /trips` with exactly `expected_body`, answering with `new_id`;
    /// expects exactly one call
    pub async fn mock_create_trip(&self, new_id: i64, expected_body: Value) {
        Mock::given(method("POST"))
            .and(path("/trips"))
            .and(header("authorization", Self::bearer().as_str()))
            .and(body_json(expected_body))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": new_id})))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// `PUT /trips/:id` with exactly `expected_body`; expects exactly one call
    pub async fn mock_update_trip(&self, id: i64, expected_body: Value) {
        Mock::given(method("PUT"))
            .and(path(format!("/trips/{}", id)))
            .and(header("authorization", Self::bearer().as_str()))
            .and(body_json(expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Trip updated"})))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_delete_trip(&self, id: i64) {
        Mock::given(method("DELETE"))
            .and(path(format!("/trips/{}", id)))
            .and(header("authorization", Self::bearer().as_str()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_post_comment(&self, trip_id: i64, username: &str, text: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/comments/{}", trip_id)))
            .and(body_json(json!({"username": username, "comment": text, "trip_id": trip_id})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 99})))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_delete_comment(&self, comment_id: i64) {
        Mock::given(method("DELETE"))
            .and(path(format!("/comments/{}", comment_id)))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Reject `verb path` with `status` and a `{"message": ...}` body
    pub async fn mock_error(&self, verb: &str, route: &str, status: u16, message: &str) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({"message": message})))
            .mount(&self.server)
            .await;
    }

    /// Expect no call at all to `verb path`
    pub async fn forbid(&self, verb: &str, route: &str) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
