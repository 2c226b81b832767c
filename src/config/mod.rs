//! Configuration types for the MoySklad API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with MoySklad.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MoySkladConfig`]: The main configuration struct holding all SDK settings
//! - [`MoySkladConfigBuilder`]: A builder for constructing [`MoySkladConfig`] instances
//! - [`Credentials`]: Bearer token or HTTP Basic credentials
//! - [`AccessToken`]: A validated access token newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use moysklad::{Credentials, MoySkladConfig};
//!
//! let config = MoySkladConfig::builder()
//!     .credentials(Credentials::token("my-token").unwrap())
//!     .precision(true)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, Credentials, DEFAULT_BASE_URL};

use crate::error::ConfigError;

/// Configuration for the MoySklad API SDK.
///
/// Holds credentials, the API base URL and the optional behaviour toggles
/// that MoySklad exposes through `X-Lognex-*` request headers.
///
/// # Thread Safety
///
/// `MoySkladConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use moysklad::{BaseUrl, Credentials, MoySkladConfig};
///
/// let config = MoySkladConfig::builder()
///     .credentials(Credentials::basic("admin@company", "password").unwrap())
///     .base_url(BaseUrl::new("http://localhost:8080/api/remap/1.2/").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(!config.precision());
/// ```
#[derive(Clone, Debug)]
pub struct MoySkladConfig {
    credentials: Credentials,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    precision: bool,
    disable_webhooks: bool,
}

impl MoySkladConfig {
    /// Creates a new builder for constructing a `MoySkladConfig`.
    #[must_use]
    pub fn builder() -> MoySkladConfigBuilder {
        MoySkladConfigBuilder::new()
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns whether prices and amounts are requested without rounding
    /// (`X-Lognex-Precision`).
    #[must_use]
    pub const fn precision(&self) -> bool {
        self.precision
    }

    /// Returns whether webhooks are suppressed for changes made through this
    /// client (`X-Lognex-WebHook-Disable`).
    #[must_use]
    pub const fn disable_webhooks(&self) -> bool {
        self.disable_webhooks
    }
}

// Verify MoySkladConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MoySkladConfig>();
};

/// Builder for constructing [`MoySkladConfig`] instances.
///
/// The only required field is `credentials`.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `user_agent_prefix`: `None`
/// - `precision`: `false`
/// - `disable_webhooks`: `false`
#[derive(Debug, Default)]
pub struct MoySkladConfigBuilder {
    credentials: Option<Credentials>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    precision: Option<bool>,
    disable_webhooks: Option<bool>,
}

impl MoySkladConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the API base URL.
    ///
    /// Mostly useful for tests and proxies.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Requests amounts without rounding.
    #[must_use]
    pub const fn precision(mut self, precision: bool) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Suppresses webhook delivery for changes made by this client.
    #[must_use]
    pub const fn disable_webhooks(mut self, disable: bool) -> Self {
        self.disable_webhooks = Some(disable);
        self
    }

    /// Builds the [`MoySkladConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `credentials` is not
    /// set.
    pub fn build(self) -> Result<MoySkladConfig, ConfigError> {
        let credentials = self.credentials.ok_or(ConfigError::MissingRequiredField {
            field: "credentials",
        })?;
        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(MoySkladConfig {
            credentials,
            base_url,
            user_agent_prefix: self.user_agent_prefix,
            precision: self.precision.unwrap_or(false),
            disable_webhooks: self.disable_webhooks.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_credentials() {
        let result = MoySkladConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "credentials"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert!(config.user_agent_prefix().is_none());
        assert!(!config.precision());
        assert!(!config.disable_webhooks());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let base_url = BaseUrl::new("http://127.0.0.1:9000/api/remap/1.2/").unwrap();

        let config = MoySkladConfig::builder()
            .credentials(Credentials::basic("admin@company", "secret").unwrap())
            .base_url(base_url.clone())
            .user_agent_prefix("MyApp/1.0")
            .precision(true)
            .disable_webhooks(true)
            .build()
            .unwrap();

        assert_eq!(config.base_url(), &base_url);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert!(config.precision());
        assert!(config.disable_webhooks());
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("MoySkladConfig"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MoySkladConfig>();
    }
}
