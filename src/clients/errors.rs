//! HTTP-specific error types for the MoySklad API SDK.
//!
//! This module contains error types for HTTP operations: API error responses,
//! request validation failures, and transport failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! The SDK never retries. Every error is returned to the caller as soon as it
//! is observed.
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {:?}", e.code, e.errors);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single error object from a MoySklad error payload.
///
/// MoySklad reports failures as `{"errors": [ {...}, ... ]}`. The same shape
/// appears inside per-item results of bulk deletes.
///
/// # Example
///
/// ```rust
/// use moysklad::clients::ApiError;
///
/// let error: ApiError = serde_json::from_str(
///     r#"{"error":"Entity not found","code":1021,"moreInfo":"https://dev.moysklad.ru/doc/api/remap/1.2/#error_1021"}"#,
/// ).unwrap();
/// assert_eq!(error.code, Some(1021));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Human readable error message.
    #[serde(default)]
    pub error: String,

    /// MoySklad error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,

    /// Request parameter the error refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,

    /// Link to the error code documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,

    /// Line in the request body where the error was detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,

    /// Column in the request body where the error was detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i64>,

    /// Additional message, used by some endpoints instead of `error`.
    #[serde(rename = "error_message", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ApiError {
    /// Returns the most specific message available.
    #[must_use]
    pub fn message(&self) -> &str {
        if self.error.is_empty() {
            self.error_message.as_deref().unwrap_or_default()
        } else {
            &self.error
        }
    }
}

/// Error returned when an HTTP request receives a non-successful response.
///
/// Carries the status code, the parsed `errors` array (empty when the body
/// did not contain one), and the raw JSON body for inspection.
///
/// # Example
///
/// ```rust
/// use moysklad::clients::{ApiError, HttpResponseError};
///
/// let error = HttpResponseError {
///     code: 404,
///     errors: vec![ApiError { error: "Entity not found".to_string(), ..Default::default() }],
///     body: serde_json::json!({}),
/// };
///
/// assert_eq!(error.to_string(), "MoySklad API error 404: Entity not found");
/// ```
#[derive(Debug, Error)]
#[error("MoySklad API error {code}: {}", summarize(.errors))]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Errors reported by the API.
    pub errors: Vec<ApiError>,
    /// The raw response body.
    pub body: serde_json::Value,
}

impl HttpResponseError {
    /// Builds an error from a status code and the response body.
    #[must_use]
    pub fn from_body(code: u16, body: serde_json::Value) -> Self {
        let errors = body
            .get("errors")
            .cloned()
            .and_then(|errors| serde_json::from_value(errors).ok())
            .unwrap_or_default();

        Self { code, errors, body }
    }
}

fn summarize(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "no error details".to_string();
    }
    errors
        .iter()
        .map(ApiError::message)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// An absolute URL points outside the configured API origin.
    ///
    /// Absolute URLs come from async task headers. Credentials are only
    /// sent to the configured host.
    #[error("Refusing to send credentials to foreign URL {url}.")]
    ForeignUrl {
        /// The rejected URL.
        url: String,
    },

    /// The request target could not be turned into a URL.
    #[error("Invalid request URL {url}.")]
    InvalidUrl {
        /// The offending URL or path.
        url: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad::HttpError;
///
/// match client.request(request).await {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* handle API error */ }
///     Err(HttpError::InvalidRequest(e)) => { /* handle validation error */ }
///     Err(HttpError::Network(e)) => { /* handle network error */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code for API errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_response_error_parses_errors_array() {
        let error = HttpResponseError::from_body(
            412,
            json!({
                "errors": [
                    {"error": "Field 'name' is required", "code": 3000, "parameter": "name"},
                    {"error": "Unknown field", "code": 2005}
                ]
            }),
        );

        assert_eq!(error.code, 412);
        assert_eq!(error.errors.len(), 2);
        assert_eq!(error.errors[0].parameter.as_deref(), Some("name"));
        assert_eq!(
            error.to_string(),
            "MoySklad API error 412: Field 'name' is required; Unknown field"
        );
    }

    #[test]
    fn test_http_response_error_without_errors_field() {
        let error = HttpResponseError::from_body(502, json!({"raw_body": "Bad gateway"}));

        assert!(error.errors.is_empty());
        assert_eq!(error.to_string(), "MoySklad API error 502: no error details");
        assert_eq!(error.body["raw_body"], "Bad gateway");
    }

    #[test]
    fn test_api_error_message_falls_back_to_error_message() {
        let error: ApiError =
            serde_json::from_value(json!({"error_message": "Access denied"})).unwrap();
        assert_eq!(error.message(), "Access denied");
    }

    #[test]
    fn test_invalid_request_error_missing_body_type() {
        let error = InvalidHttpRequestError::MissingBodyType;
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_foreign_url_error_mentions_url() {
        let error = InvalidHttpRequestError::ForeignUrl {
            url: "https://evil.example.com/async/1".to_string(),
        };
        assert!(error.to_string().contains("evil.example.com"));
    }

    #[test]
    fn test_http_error_status() {
        let error = HttpError::Response(HttpResponseError::from_body(404, json!({})));
        assert_eq!(error.status(), Some(404));

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType);
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let http_error: &dyn std::error::Error = &HttpResponseError::from_body(400, json!({}));
        let _ = http_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _ = invalid_error;
    }
}
