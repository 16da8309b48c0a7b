//! HTTP client for the trip backend
//!
//! Wraps `reqwest` with base URL resolution, bearer authentication and the
//! mapping of transport failures and non-2xx responses onto [`ApiError`].

use std::time::{Duration, Instant};

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::models::AuthToken;
use crate::utils::errors::{ApiError, Result, SmartAdventuresError};
use crate::utils::logging::log_api_call;

/// Error body sent by the backend alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new ApiClient from the `[api]` settings
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(SmartAdventuresError::Http)?;

        // A trailing slash keeps the last path segment when joining
        let mut base_url = Url::parse(&config.base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    /// Absolute URL for an endpoint path such as `trips/7`
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn request(&self, method: Method, path: &str, token: Option<&AuthToken>) -> Result<RequestBuilder> {
        let url = self.endpoint(path)?;
        let mut request = self.client.request(method, url);
        if let Some(token) = token {
            request = request.header(reqwest::header::AUTHORIZATION, token.bearer());
        }
        Ok(request)
    }

    /// GET and decode a JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&AuthToken>) -> Result<T> {
        let request = self.request(Method::GET, path, token)?;
        let response = self.execute(Method::GET, path, request).await?;
        decode(response).await
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post<B, T>(&self, path: &str, body: &B, token: Option<&AuthToken>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path, token)?.json(body);
        let response = self.execute(Method::POST, path, request).await?;
        decode(response).await
    }

    /// POST a JSON body, ignoring whatever the backend answers with
    pub async fn post_empty<B>(&self, path: &str, body: &B, token: Option<&AuthToken>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path, token)?.json(body);
        self.execute(Method::POST, path, request).await?;
        Ok(())
    }

    /// PUT a JSON body, ignoring the response body
    pub async fn put_empty<B>(&self, path: &str, body: &B, token: Option<&AuthToken>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path, token)?.json(body);
        self.execute(Method::PUT, path, request).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str, token: Option<&AuthToken>) -> Result<()> {
        let request = self.request(Method::DELETE, path, token)?;
        self.execute(Method::DELETE, path, request).await?;
        Ok(())
    }

    /// Send the request and turn transport failures and non-2xx statuses into errors
    async fn execute(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Response> {
        debug!(method = %method, path = path, "Sending backend request");
        let started = Instant::now();

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                log_api_call(method.as_str(), path, None, elapsed_ms(started));
                return Err(map_transport_error(e).into());
            }
        };

        let status = response.status();
        log_api_call(method.as_str(), path, Some(status.as_u16()), elapsed_ms(started));

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Backend {
            status: status.as_u16(),
            message: backend_message(status.as_u16(), &body),
        }
        .into())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()).into())
}

fn map_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_connect() {
        ApiError::ServiceUnavailable
    } else {
        ApiError::RequestFailed(e.to_string())
    }
}

/// `message` from the error body, or a generic text naming the status
fn backend_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", status))
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: Some(5),
            user_agent: "SmartAdventures/test".to_string(),
        }
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ApiClient::new(&config("https://example.com/api")).unwrap();
        assert_eq!(client.endpoint("trips/7").unwrap().as_str(), "https://example.com/api/trips/7");
        assert_eq!(client.endpoint("/login").unwrap().as_str(), "https://example.com/api/login");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ApiClient::new(&config("not a url")),
            Err(SmartAdventuresError::UrlParse(_))
        ));
    }

    #[test]
    fn test_backend_message_extraction() {
        assert_eq!(backend_message(401, r#"{"message":"Invalid credentials"}"#), "Invalid credentials");
        assert_eq!(backend_message(500, "<html>oops</html>"), "Request failed with status code 500");
        assert_eq!(backend_message(404, r#"{"message":""}"#), "Request failed with status code 404");
        assert_eq!(backend_message(400, ""), "Request failed with status code 400");
    }
}
