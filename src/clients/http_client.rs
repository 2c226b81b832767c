//! HTTP client for MoySklad API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the MoySklad JSON API.

use std::collections::HashMap;

use url::Url;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::MoySkladConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the MoySklad API.
///
/// The client handles:
/// - Resolving request paths against the configured base URL
/// - Default headers including `Authorization`, `User-Agent` and the
///   `X-Lognex-*` toggles from [`MoySkladConfig`]
/// - Response header and body parsing
///
/// Requests are never retried. A `429` is returned to the caller like any
/// other error status.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad::{Credentials, HttpClient, HttpMethod, HttpRequest, MoySkladConfig};
///
/// let config = MoySkladConfig::builder()
///     .credentials(Credentials::token("token")?)
///     .build()?;
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "entity/uom").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL all relative paths are joined onto.
    base_url: Url,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the SDK configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use moysklad::{Credentials, MoySkladConfig};
    /// use moysklad::clients::HttpClient;
    ///
    /// let config = MoySkladConfig::builder()
    ///     .credentials(Credentials::token("token").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// assert_eq!(client.base_url().as_str(), "https://api.moysklad.ru/api/remap/1.2/");
    /// ```
    #[must_use]
    pub fn new(config: &MoySkladConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}MoySklad API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "Accept".to_string(),
            "application/json;charset=utf-8".to_string(),
        );
        default_headers.insert(
            "Authorization".to_string(),
            config.credentials().authorization_header(),
        );

        if config.precision() {
            default_headers.insert("X-Lognex-Precision".to_string(), "true".to_string());
        }
        if config.disable_webhooks() {
            default_headers.insert("X-Lognex-WebHook-Disable".to_string(), "true".to_string());
        }

        // MoySklad requires gzip support from clients.
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .gzip(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().url().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves a request path to a full URL.
    ///
    /// Relative paths are joined onto the base URL. Absolute URLs are
    /// accepted only when they share the base URL's origin.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::ForeignUrl`] for absolute URLs on
    /// another origin and [`InvalidHttpRequestError::InvalidUrl`] when the
    /// path cannot be parsed.
    pub fn resolve(&self, path: &str) -> Result<Url, InvalidHttpRequestError> {
        let invalid = || InvalidHttpRequestError::InvalidUrl {
            url: path.to_string(),
        };

        if path.starts_with("http://") || path.starts_with("https://") {
            let url = Url::parse(path).map_err(|_| invalid())?;
            if url.origin() != self.base_url.origin() {
                return Err(InvalidHttpRequestError::ForeignUrl {
                    url: path.to_string(),
                });
            }
            return Ok(url);
        }

        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|_| invalid())
    }

    /// Sends an HTTP request to the MoySklad API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Header merging
    /// - Response parsing
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.resolve(&request.path)?;

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url.clone()),
            HttpMethod::Post => self.client.post(url.clone()),
            HttpMethod::Put => self.client.put(url.clone()),
            HttpMethod::Delete => self.client.delete(url.clone()),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, url = %url, "Sending MoySklad request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let raw = res.bytes().await?.to_vec();

        let body = Self::parse_body(code, &raw, &res_headers);
        let response = HttpResponse::with_raw(code, res_headers, body, raw);

        if let Some(limit) = response.rate_limit {
            if limit.remaining == 0 {
                tracing::warn!(
                    "MoySklad rate limit exhausted ({} requests per window) after request to {}",
                    limit.limit,
                    request.path
                );
            }
        }

        if response.is_ok() {
            tracing::debug!(status = code, url = %url, "MoySklad request succeeded");
            return Ok(response);
        }

        tracing::debug!(status = code, url = %url, "MoySklad request failed");
        Err(HttpError::Response(HttpResponseError::from_body(
            code,
            response.body,
        )))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Parses the body as JSON.
    ///
    /// Binary bodies (print forms, exported files) are left to `raw` and
    /// parsed as `{}`. A malformed JSON success body also yields `{}` here;
    /// typed decoding reads `raw` and reports the parse error.
    fn parse_body(
        code: u16,
        raw: &[u8],
        headers: &HashMap<String, Vec<String>>,
    ) -> serde_json::Value {
        if raw.is_empty() {
            return serde_json::json!({});
        }

        let is_json = headers
            .get("content-type")
            .and_then(|values| values.first())
            .map_or(true, |value| value.contains("json"));

        if !is_json && code < 300 {
            return serde_json::json!({});
        }

        serde_json::from_slice(raw).unwrap_or_else(|_| {
            // For 5xx errors, return raw body as string value
            if code >= 500 {
                serde_json::json!({ "raw_body": String::from_utf8_lossy(raw) })
            } else {
                serde_json::json!({})
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, Credentials};

    fn create_test_config() -> MoySkladConfig {
        MoySkladConfig::builder()
            .credentials(Credentials::token("test-access-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("MoySklad API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("MoySklad API Library"));
    }

    #[test]
    fn test_authorization_header_injection() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-access-token".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json;charset=utf-8".to_string())
        );
    }

    #[test]
    fn test_lognex_headers_follow_config() {
        let client = HttpClient::new(&create_test_config());
        assert!(client.default_headers().get("X-Lognex-Precision").is_none());
        assert!(client
            .default_headers()
            .get("X-Lognex-WebHook-Disable")
            .is_none());

        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("token").unwrap())
            .precision(true)
            .disable_webhooks(true)
            .build()
            .unwrap();
        let client = HttpClient::new(&config);
        assert_eq!(
            client.default_headers().get("X-Lognex-Precision"),
            Some(&"true".to_string())
        );
        assert_eq!(
            client.default_headers().get("X-Lognex-WebHook-Disable"),
            Some(&"true".to_string())
        );
    }

    #[test]
    fn test_resolve_relative_path() {
        let client = HttpClient::new(&create_test_config());

        let url = client.resolve("entity/customerorder/metadata").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.moysklad.ru/api/remap/1.2/entity/customerorder/metadata"
        );

        let url = client.resolve("/entity/uom").unwrap();
        assert_eq!(url.as_str(), "https://api.moysklad.ru/api/remap/1.2/entity/uom");
    }

    #[test]
    fn test_resolve_absolute_url_on_same_origin() {
        let client = HttpClient::new(&create_test_config());

        let url = client
            .resolve("https://api.moysklad.ru/api/remap/1.2/async/5f6c1d2a")
            .unwrap();
        assert_eq!(url.path(), "/api/remap/1.2/async/5f6c1d2a");
    }

    #[test]
    fn test_resolve_rejects_foreign_origin() {
        let client = HttpClient::new(&create_test_config());

        let result = client.resolve("https://example.com/api/remap/1.2/async/1");
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::ForeignUrl { .. })
        ));
    }

    #[test]
    fn test_resolve_uses_custom_base_url() {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("token").unwrap())
            .base_url(BaseUrl::new("http://127.0.0.1:8080/api/remap/1.2").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let url = client.resolve("entity/uom").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/remap/1.2/entity/uom");
    }

    #[test]
    fn test_parse_body_handles_empty_and_binary() {
        let headers = HashMap::from([(
            "content-type".to_string(),
            vec!["application/pdf".to_string()],
        )]);

        assert_eq!(
            HttpClient::parse_body(204, b"", &HashMap::new()),
            serde_json::json!({})
        );
        assert_eq!(
            HttpClient::parse_body(200, b"%PDF-1.4", &headers),
            serde_json::json!({})
        );
    }

    #[test]
    fn test_parse_body_keeps_raw_text_for_server_errors() {
        let body = HttpClient::parse_body(502, b"Bad Gateway", &HashMap::new());
        assert_eq!(body["raw_body"], "Bad Gateway");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
