//! API client trait and the reqwest implementation

use crate::config::ClientConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

/// Result type for API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Trait for issuing requests against the backend API
///
/// Paths are relative to the API base URL, e.g. `/admin/login`.
#[async_trait]
pub trait ApiBackend: Send + Sync {
    /// POST a JSON body and return the response body
    async fn post_json(&self, path: &str, body: Value) -> ApiResult<Value>;

    /// GET a path and return the response body
    async fn get_json(&self, path: &str) -> ApiResult<Value>;

    /// Base URL requests are issued against
    fn base_url(&self) -> &str;
}

/// Pre-configured client for the backend API
///
/// No retries, no backoff and no auth headers; callers handle failures.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
}

impl ApiClient {
    /// Build a client from a resolved configuration
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url(),
            timeout_ms: u64::try_from(config.timeout.as_millis()).unwrap_or(u64::MAX),
        })
    }

    /// Full URL for an API path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn transport_error(&self, url: &str, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
                timeout_ms: self.timeout_ms,
            }
        } else {
            ApiError::Network {
                message: err.to_string(),
            }
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> ApiResult<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), %url, "API request failed");
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        // Non-JSON bodies are handed back as plain strings
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}

#[async_trait]
impl ApiBackend for ApiClient {
    async fn post_json(&self, path: &str, body: Value) -> ApiResult<Value> {
        let url = self.url(path);
        debug!(method = "POST", %url, "Sending API request");
        let request = self.http.post(&url).json(&body);
        self.send(request, &url).await
    }

    async fn get_json(&self, path: &str) -> ApiResult<Value> {
        let url = self.url(path);
        debug!(method = "GET", %url, "Sending API request");
        let request = self.http.get(&url);
        self.send(request, &url).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
