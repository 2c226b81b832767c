//! Shared base of every service: a client and a URI.

use crate::clients::RestClient;
use crate::rest::{RequestBuilder, ResourcePath};

/// A REST client bound to one endpoint URI such as `entity/customerorder`.
///
/// Cloning is cheap; the client is reference-counted.
#[derive(Debug, Clone)]
pub struct Endpoint {
    client: RestClient,
    uri: String,
}

impl Endpoint {
    /// Binds a client to a URI.
    #[must_use]
    pub fn new(client: RestClient, uri: impl Into<String>) -> Self {
        Self {
            client,
            uri: uri.into(),
        }
    }

    /// Returns the client.
    #[must_use]
    pub const fn client(&self) -> &RestClient {
        &self.client
    }

    /// Returns the endpoint URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Starts a path at the endpoint URI.
    #[must_use]
    pub fn path(&self) -> ResourcePath {
        ResourcePath::new(self.uri.as_str())
    }

    /// Starts a request to a path.
    #[must_use]
    pub fn request(&self, path: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(&self.client, path)
    }
}
