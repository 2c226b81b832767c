//! HTTP response types for the MoySklad API SDK.
//!
//! This module provides the [`HttpResponse`] type and related types for
//! parsing and accessing API response data.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-RateLimit-*` headers.
///
/// MoySklad reports the size of the request window and how many requests
/// remain in it on every response.
///
/// # Example
///
/// ```rust
/// use moysklad::clients::RateLimit;
///
/// let limit = RateLimit::parse("45", "12").unwrap();
/// assert_eq!(limit.limit, 45);
/// assert_eq!(limit.remaining, 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed in the current window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
}

impl RateLimit {
    /// Parses the `X-RateLimit-Limit` and `X-RateLimit-Remaining` values.
    ///
    /// Returns `None` if either value is not a number.
    #[must_use]
    pub fn parse(limit: &str, remaining: &str) -> Option<Self> {
        Some(Self {
            limit: limit.trim().parse().ok()?,
            remaining: remaining.trim().parse().ok()?,
        })
    }
}

/// An HTTP response from the MoySklad API.
///
/// Headers are stored with lowercase names. `body` holds the parsed JSON
/// (an empty body becomes `{}`); `raw` keeps the undecoded bytes for file
/// downloads requested in content mode.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// The raw response body.
    pub raw: Vec<u8>,
    /// Rate limit information (from `X-RateLimit-*` headers).
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        Self::with_raw(code, headers, body, Vec::new())
    }

    /// Creates a new `HttpResponse` that also keeps the raw body bytes.
    #[must_use]
    pub fn with_raw(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
        raw: Vec<u8>,
    ) -> Self {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str)
        };

        let rate_limit = match (first("x-ratelimit-limit"), first("x-ratelimit-remaining")) {
            (Some(limit), Some(remaining)) => RateLimit::parse(limit, remaining),
            _ => None,
        };

        Self {
            code,
            headers,
            body,
            raw,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Location` header (async task status URL).
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }

    /// Returns the `Content-Location` header (async task result URL).
    #[must_use]
    pub fn content_location(&self) -> Option<&str> {
        self.header("content-location")
    }

    /// Returns the `Content-Type` header.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns `true` if `raw` holds a JSON document to decode.
    ///
    /// A missing `Content-Type` counts as JSON.
    #[must_use]
    pub fn has_json_body(&self) -> bool {
        !self.raw.is_empty() && self.content_type().map_or(true, |value| value.contains("json"))
    }

    /// Returns the file name announced in `Content-Disposition`, if any.
    ///
    /// Handles both `filename="a.pdf"` and the RFC 5987 `filename*=UTF-8''a.pdf`
    /// form, preferring the latter.
    #[must_use]
    pub fn file_name(&self) -> Option<String> {
        let disposition = self.header("content-disposition")?;

        let mut plain = None;
        for part in disposition.split(';').map(str::trim) {
            if let Some(encoded) = part.strip_prefix("filename*=") {
                let value = encoded
                    .split_once("''")
                    .map_or(encoded, |(_, value)| value)
                    .trim_matches('"');
                if let Ok(decoded) = urlencoding::decode(value) {
                    return Some(decoded.into_owned());
                }
            } else if let Some(value) = part.strip_prefix("filename=") {
                plain = Some(value.trim_matches('"').to_string());
            }
        }
        plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in [200, 201, 202, 204, 299] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(response.is_ok(), "Expected {code} to be OK");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 404, 412, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok(), "Expected {code} to not be OK");
        }
    }

    #[test]
    fn test_rate_limit_parsing() {
        let response = HttpResponse::new(
            200,
            headers(&[("x-ratelimit-limit", "45"), ("x-ratelimit-remaining", "44")]),
            json!({}),
        );

        let limit = response.rate_limit.unwrap();
        assert_eq!(limit.limit, 45);
        assert_eq!(limit.remaining, 44);
    }

    #[test]
    fn test_rate_limit_absent_when_header_missing() {
        let response = HttpResponse::new(200, headers(&[("x-ratelimit-limit", "45")]), json!({}));
        assert!(response.rate_limit.is_none());
    }

    #[test]
    fn test_async_headers() {
        let response = HttpResponse::new(
            202,
            headers(&[
                ("location", "https://api.moysklad.ru/api/remap/1.2/async/1"),
                (
                    "content-location",
                    "https://api.moysklad.ru/api/remap/1.2/async/1/result",
                ),
            ]),
            json!({}),
        );

        assert_eq!(
            response.location(),
            Some("https://api.moysklad.ru/api/remap/1.2/async/1")
        );
        assert_eq!(
            response.content_location(),
            Some("https://api.moysklad.ru/api/remap/1.2/async/1/result")
        );
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(200, headers(&[("content-type", "application/pdf")]), json!({}));
        assert_eq!(response.header("Content-Type"), Some("application/pdf"));
    }

    #[test]
    fn test_file_name_from_plain_disposition() {
        let response = HttpResponse::new(
            200,
            headers(&[("content-disposition", r#"attachment; filename="order-00001.pdf""#)]),
            json!({}),
        );
        assert_eq!(response.file_name().as_deref(), Some("order-00001.pdf"));
    }

    #[test]
    fn test_file_name_prefers_encoded_form() {
        let response = HttpResponse::new(
            200,
            headers(&[(
                "content-disposition",
                "attachment; filename=\"order.pdf\"; filename*=UTF-8''%D0%B7%D0%B0%D0%BA%D0%B0%D0%B7.pdf",
            )]),
            json!({}),
        );
        assert_eq!(response.file_name().as_deref(), Some("заказ.pdf"));
    }

    #[test]
    fn test_file_name_absent_without_disposition() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.file_name().is_none());
    }
}
