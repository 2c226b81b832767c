//! Error types for the MoySklad API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use moysklad::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid MoySklad access token.")]
    EmptyAccessToken,

    /// Login cannot be empty.
    #[error("Login cannot be empty. Please provide the MoySklad account login.")]
    EmptyLogin,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Please provide the MoySklad account password.")]
    EmptyPassword,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://api.moysklad.ru/api/remap/1.2/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_error_message() {
        let error = ConfigError::EmptyAccessToken;
        let message = error.to_string();
        assert!(message.contains("Access token cannot be empty"));
    }

    #[test]
    fn test_empty_login_and_password_messages_differ() {
        assert_ne!(
            ConfigError::EmptyLogin.to_string(),
            ConfigError::EmptyPassword.to_string()
        );
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "credentials",
        };
        let message = error.to_string();
        assert!(message.contains("credentials"));
        assert!(message.contains("Missing required field"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not-a-url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not-a-url"));
        assert!(message.contains("Invalid base URL"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let error: &dyn std::error::Error = &ConfigError::EmptyAccessToken;
        let _ = error;
    }
}
