//! REST client implementation for the MoySklad JSON API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with path normalization on top of [`HttpClient`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::MoySkladConfig;

/// Query parameters in render order.
pub type Query = Vec<(String, String)>;

/// REST API client for the MoySklad JSON API.
///
/// Provides convenient methods (`get`, `post`, `put`, `delete`) for making
/// REST API requests. Cloning is cheap: clones share one connection pool.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad::{Credentials, MoySkladConfig, RestClient};
///
/// let config = MoySkladConfig::builder()
///     .credentials(Credentials::token("token")?)
///     .build()?;
/// let client = RestClient::new(&config);
///
/// // GET request
/// let response = client.get("entity/uom", None).await?;
///
/// // POST request with body
/// let body = serde_json::json!({"name": "box"});
/// let response = client.post("entity/uom", Some(body), None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: Arc<HttpClient>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the SDK configuration.
    #[must_use]
    pub fn new(config: &MoySkladConfig) -> Self {
        Self {
            http_client: Arc::new(HttpClient::new(config)),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(&self, path: &str, query: Option<Query>) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query, None)
            .await
    }

    /// Sends a POST request to the specified path.
    ///
    /// `body` may be `None` for action endpoints such as `trash` or async
    /// `cancel`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, body, query, None)
            .await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, body, query, None)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query, None)
            .await
    }

    /// Builds and sends a request with every knob exposed.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<Query>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query {
            if !query_params.is_empty() {
                builder = builder.query(query_params);
            }
        }

        if let Some(extra) = headers {
            builder = builder.extra_headers(extra);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// Absolute URLs pass through untouched. Relative paths lose leading and
/// trailing slashes so they join under the base URL.
fn normalize_path(path: &str) -> Result<String, RestError> {
    if path.starts_with("http://") || path.starts_with("https://") {
        return Ok(path.to_string());
    }

    let path = path.trim_start_matches('/').trim_end_matches('/');

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;

    fn create_test_client() -> RestClient {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("test-token").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config)
    }

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/entity/uom").unwrap(), "entity/uom");
    }

    #[test]
    fn test_normalize_path_strips_trailing_slash() {
        assert_eq!(normalize_path("entity/uom/").unwrap(), "entity/uom");
    }

    #[test]
    fn test_normalize_path_handles_double_slashes() {
        assert_eq!(normalize_path("//entity/uom").unwrap(), "entity/uom");
    }

    #[test]
    fn test_normalize_path_keeps_absolute_urls() {
        let url = "https://api.moysklad.ru/api/remap/1.2/async/1/result";
        assert_eq!(normalize_path(url).unwrap(), url);
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        let result = normalize_path("");
        assert!(matches!(result, Err(RestError::InvalidPath { path }) if path.is_empty()));
    }

    #[test]
    fn test_normalize_path_only_slash_returns_error() {
        let result = normalize_path("/");
        assert!(matches!(result, Err(RestError::InvalidPath { path }) if path.is_empty()));
    }

    // === RestClient Construction Tests ===

    #[test]
    fn test_rest_client_uses_configured_base_url() {
        let client = create_test_client();
        assert_eq!(
            client.http_client().base_url().as_str(),
            "https://api.moysklad.ru/api/remap/1.2/"
        );
    }

    #[test]
    fn test_rest_client_clones_share_http_client() {
        let client = create_test_client();
        let clone = client.clone();
        assert!(std::ptr::eq(client.http_client(), clone.http_client()));
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }

    #[tokio::test]
    async fn test_empty_path_fails_before_sending() {
        let client = create_test_client();
        let result = client.get("", None).await;
        assert!(matches!(result, Err(RestError::InvalidPath { .. })));
    }
}
