//! Response wrapper for resource operations.
//!
//! [`ResourceResponse<T>`] pairs the decoded value with the HTTP response it
//! came from, so callers can still read the status code, headers and rate
//! limit. It implements `Deref<Target = T>`:
//!
//! ```rust,ignore
//! let orders = service.get_list(None).await?;
//!
//! // List methods via Deref
//! println!("total: {}", orders.total());
//! for order in &orders.rows {
//!     println!("{:?}", order.name);
//! }
//!
//! // Transport details
//! println!("status: {}", orders.response().code);
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{HttpResponse, RateLimit};
use crate::rest::ResourceError;

/// A decoded value together with the response that carried it.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use moysklad::clients::HttpResponse;
/// use moysklad::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(
///     vec!["a", "b"],
///     HttpResponse::new(200, HashMap::new(), serde_json::json!({})),
/// );
///
/// assert_eq!(response.len(), 2);
/// assert_eq!(response.response().code, 200);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    response: HttpResponse,
}

impl<T> ResourceResponse<T> {
    /// Creates a response from a value and its HTTP response.
    #[must_use]
    pub const fn new(data: T, response: HttpResponse) -> Self {
        Self { data, response }
    }

    /// Consumes the response and returns the inner value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Consumes the response and returns both parts.
    #[must_use]
    pub fn into_parts(self) -> (T, HttpResponse) {
        (self.data, self.response)
    }

    /// Returns a reference to the inner value.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner value.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the HTTP response.
    #[must_use]
    pub const fn response(&self) -> &HttpResponse {
        &self.response
    }

    /// Returns the rate limit reported with the response.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimit> {
        self.response.rate_limit.as_ref()
    }

    /// Transforms the inner value, keeping the HTTP response.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            response: self.response,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes the response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body does not match `T`.
    pub fn from_http_response(response: HttpResponse, path: &str) -> Result<Self, ResourceError> {
        let decoded = if response.has_json_body() {
            serde_json::from_slice(&response.raw)
        } else {
            T::deserialize(&response.body)
        };
        let data = decoded.map_err(|e| ResourceError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self::new(data, response))
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
