//! Error type for resource operations.
//!
//! [`ResourceError`] extends [`RestError`](crate::clients::RestError) with
//! failures that only arise once a response has to be turned into a typed
//! value: undecodable bodies, missing identities and async protocol misuse.
//!
//! # Error Handling
//!
//! - **API errors** (non-2xx with `{"errors": [...]}`): [`ResourceError::Http`]
//!   or [`ResourceError::Rest`], inspect with [`ResourceError::status`] and
//!   [`ResourceError::api_errors`]
//! - **Undecodable success body**: [`ResourceError::Decode`]
//! - **Entity without id**: [`ResourceError::MissingIdentity`]
//! - **Async misuse**: [`ResourceError::MissingHeader`],
//!   [`ResourceError::AsyncNotReady`]
//!
//! Partial failures of bulk deletes are not errors; they are reported per
//! item in [`DeleteManyResult`](crate::rest::resources::common::DeleteManyResult).
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::rest::ResourceError;
//!
//! match service.delete(id).await {
//!     Ok(deleted) => println!("deleted: {}", *deleted),
//!     Err(e) if e.is_not_found() => println!("already gone"),
//!     Err(e) => {
//!         for error in e.api_errors() {
//!             println!("{}: {}", error.code.unwrap_or_default(), error.message());
//!         }
//!     }
//! }
//! ```

use crate::clients::{ApiError, HttpError, RestError};
use thiserror::Error;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use moysklad::rest::ResourceError;
///
/// let error = ResourceError::MissingIdentity { resource: "CustomerOrder" };
/// assert!(error.to_string().contains("CustomerOrder"));
/// assert_eq!(error.status(), None);
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A successful response did not decode into the expected type.
    #[error("Failed to decode response from {path}: {message}")]
    Decode {
        /// The request path.
        path: String,
        /// The serde error message.
        message: String,
    },

    /// A request body could not be encoded.
    #[error("Failed to encode request body: {message}")]
    Encode {
        /// The serde error message.
        message: String,
    },

    /// The operation needs the entity's id, but it has none.
    #[error("{resource} has no id; create it first")]
    MissingIdentity {
        /// The entity type name.
        resource: &'static str,
    },

    /// A response header required by the async protocol is missing or invalid.
    #[error("Response is missing a valid {header} header")]
    MissingHeader {
        /// The header name.
        header: &'static str,
    },

    /// The async result was requested before the job was observed done.
    #[error("Async task at {status_url} has not completed; call check() until it returns true")]
    AsyncNotReady {
        /// The job status URL.
        status_url: String,
    },
}

impl ResourceError {
    /// Returns the HTTP status code for API and network errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rest(e) => e.status(),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the errors reported by the API, if this is an API error.
    #[must_use]
    pub fn api_errors(&self) -> &[ApiError] {
        match self {
            Self::Rest(RestError::Http(HttpError::Response(e))) | Self::Http(HttpError::Response(e)) => {
                &e.errors
            }
            _ => &[],
        }
    }

    /// Returns `true` if the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use serde_json::json;

    fn not_found() -> HttpError {
        HttpError::Response(HttpResponseError::from_body(
            404,
            json!({"errors": [{"error": "Entity not found", "code": 1021}]}),
        ))
    }

    #[test]
    fn test_from_rest_error_keeps_status_and_errors() {
        let error: ResourceError = RestError::Http(not_found()).into();

        assert_eq!(error.status(), Some(404));
        assert!(error.is_not_found());
        assert_eq!(error.api_errors()[0].code, Some(1021));
        assert!(error.to_string().contains("Entity not found"));
    }

    #[test]
    fn test_from_http_error_conversion() {
        let error: ResourceError = not_found().into();
        assert!(matches!(error, ResourceError::Http(_)));
        assert_eq!(error.api_errors().len(), 1);
    }

    #[test]
    fn test_local_errors_have_no_status() {
        let errors = [
            ResourceError::Decode {
                path: "entity/uom".to_string(),
                message: "invalid type".to_string(),
            },
            ResourceError::Encode {
                message: "key must be a string".to_string(),
            },
            ResourceError::MissingHeader { header: "Location" },
            ResourceError::AsyncNotReady {
                status_url: "https://example/async/1".to_string(),
            },
        ];

        for error in &errors {
            assert_eq!(error.status(), None);
            assert!(error.api_errors().is_empty());
            assert!(!error.is_not_found());
        }
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let error: &dyn std::error::Error = &ResourceError::MissingIdentity { resource: "Uom" };
        assert!(error.to_string().contains("Uom"));
    }
}
