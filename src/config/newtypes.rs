//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use url::Url;

use crate::error::ConfigError;

/// The production MoySklad JSON API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.moysklad.ru/api/remap/1.2/";

/// A validated MoySklad access token.
///
/// Tokens are issued in the MoySklad account settings (or through
/// `security/token`) and sent as `Authorization: Bearer <token>`.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use moysklad::AccessToken;
///
/// let token = AccessToken::new("6f3c...").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// Credentials used to authenticate against the MoySklad API.
///
/// MoySklad accepts either a bearer token or HTTP Basic authentication with
/// the account login and password.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Bearer token authentication.
    Token(AccessToken),
    /// HTTP Basic authentication.
    Basic {
        /// Account login, e.g. `admin@company`.
        login: String,
        /// Account password.
        password: String,
    },
}

impl Credentials {
    /// Creates bearer token credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn token(token: impl Into<String>) -> Result<Self, ConfigError> {
        AccessToken::new(token).map(Self::Token)
    }

    /// Creates HTTP Basic credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLogin`] or [`ConfigError::EmptyPassword`]
    /// if either part is empty.
    pub fn basic(
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let login = login.into();
        let password = password.into();
        if login.is_empty() {
            return Err(ConfigError::EmptyLogin);
        }
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self::Basic { login, password })
    }

    /// Returns the value of the `Authorization` header for these credentials.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        match self {
            Self::Token(token) => format!("Bearer {}", token.as_ref()),
            Self::Basic { login, password } => {
                format!("Basic {}", STANDARD.encode(format!("{login}:{password}")))
            }
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => f.debug_tuple("Token").field(token).finish(),
            Self::Basic { login, .. } => f
                .debug_struct("Basic")
                .field("login", login)
                .field("password", &"*****")
                .finish(),
        }
    }
}

/// A validated API base URL.
///
/// The URL must be absolute with an `http` or `https` scheme. A trailing
/// slash is appended when missing so relative request paths join under it
/// instead of replacing its last segment.
///
/// # Example
///
/// ```rust
/// use moysklad::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8080/api/remap/1.2").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080/api/remap/1.2/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed,
    /// is not http(s), or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let trimmed = raw.trim();
        let normalized = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };

        let parsed =
            Url::parse(&normalized).map_err(|_| ConfigError::InvalidBaseUrl { url: raw.clone() })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl { url: raw });
        }

        Ok(Self(parsed))
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_bearer_authorization_header() {
        let credentials = Credentials::token("abc123").unwrap();
        assert_eq!(credentials.authorization_header(), "Bearer abc123");
    }

    #[test]
    fn test_basic_authorization_header_is_base64_encoded() {
        let credentials = Credentials::basic("admin@company", "secret").unwrap();
        // base64("admin@company:secret")
        assert_eq!(
            credentials.authorization_header(),
            "Basic YWRtaW5AY29tcGFueTpzZWNyZXQ="
        );
    }

    #[test]
    fn test_basic_credentials_reject_empty_parts() {
        assert!(matches!(
            Credentials::basic("", "secret"),
            Err(ConfigError::EmptyLogin)
        ));
        assert!(matches!(
            Credentials::basic("admin@company", ""),
            Err(ConfigError::EmptyPassword)
        ));
    }

    #[test]
    fn test_basic_credentials_mask_password_in_debug() {
        let credentials = Credentials::basic("admin@company", "hunter2").unwrap();
        let debug_output = format!("{:?}", credentials);
        assert!(debug_output.contains("admin@company"));
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn test_base_url_appends_trailing_slash() {
        let url = BaseUrl::new("https://api.moysklad.ru/api/remap/1.2").unwrap();
        assert_eq!(url.as_ref(), "https://api.moysklad.ru/api/remap/1.2/");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("api.moysklad.ru").is_err());
        assert!(BaseUrl::new("ftp://api.moysklad.ru/").is_err());
        assert!(BaseUrl::new("").is_err());
    }

    #[test]
    fn test_default_base_url_is_valid() {
        let url = BaseUrl::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(url.as_ref(), DEFAULT_BASE_URL);
    }
}
