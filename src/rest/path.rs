//! Resource path construction.
//!
//! Every MoySklad endpoint follows one grammar:
//!
//! ```text
//! entity/{type}
//! entity/{type}/{id}
//! entity/{type}/{id}/{subresource}[/{subId}]
//! entity/{type}/delete
//! entity/{type}/syncid/{syncId}
//! entity/{type}/metadata[/attributes[/{id}]]
//! ```
//!
//! [`ResourcePath`] appends segments to an endpoint URI and renders the
//! relative path passed to the [`RestClient`](crate::clients::RestClient).
//!
//! # Example
//!
//! ```rust
//! use moysklad::rest::ResourcePath;
//!
//! let path = ResourcePath::new("entity/customerorder")
//!     .id("5f1b0b9a-8b1a-11ee-0a80-0d2a00173ab1")
//!     .segment("positions")
//!     .segment("delete");
//!
//! assert_eq!(
//!     path.as_str(),
//!     "entity/customerorder/5f1b0b9a-8b1a-11ee-0a80-0d2a00173ab1/positions/delete"
//! );
//! ```

use std::fmt;

/// A relative API path built segment by segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Starts a path at an endpoint URI such as `entity/uom`.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        Self(uri.trim_matches('/').to_string())
    }

    /// Appends a literal segment.
    #[must_use]
    pub fn segment(mut self, segment: &str) -> Self {
        let segment = segment.trim_matches('/');
        if !segment.is_empty() {
            if !self.0.is_empty() {
                self.0.push('/');
            }
            self.0.push_str(segment);
        }
        self
    }

    /// Appends an identifier segment.
    #[must_use]
    pub fn id(self, id: impl fmt::Display) -> Self {
        self.segment(&id.to_string())
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourcePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ResourcePath> for String {
    fn from(path: ResourcePath) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_new_trims_slashes() {
        assert_eq!(ResourcePath::new("/entity/uom/").as_str(), "entity/uom");
    }

    #[test]
    fn test_id_accepts_uuid() {
        let id = Uuid::parse_str("19f1edc0-fc42-4001-94cb-c9ec9c62ec10").unwrap();
        let path = ResourcePath::new("entity/uom").id(id);
        assert_eq!(path.to_string(), "entity/uom/19f1edc0-fc42-4001-94cb-c9ec9c62ec10");
    }

    #[test]
    fn test_metadata_paths() {
        let path = ResourcePath::new("entity/product")
            .segment("metadata")
            .segment("attributes");
        assert_eq!(path.as_str(), "entity/product/metadata/attributes");
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let path = ResourcePath::new("report/stock").segment("").segment("/all/");
        assert_eq!(path.as_str(), "report/stock/all");
    }
}
