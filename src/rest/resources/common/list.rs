//! Collection envelopes.
//!
//! - [`List<T>`]: a page returned by a list endpoint (`context`, `meta`, `rows`)
//! - [`MetaArray<T>`]: a collection embedded in an object, such as document
//!   positions or attached files

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::meta::{Meta, MetaWrapper};

/// Request context echoed by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// The employee the request was made as.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<MetaWrapper>,
}

/// One page of a list endpoint.
///
/// `meta.size` carries the total number of rows across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct List<T> {
    /// Request context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Collection meta with paging information.
    #[serde(default)]
    pub meta: Meta,

    /// Rows of the current page, in server order.
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            context: None,
            meta: Meta::default(),
            rows: Vec::new(),
        }
    }
}

impl<T> List<T> {
    /// Total rows across all pages, falling back to this page's length.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.meta.size.unwrap_or(self.rows.len() as u64)
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// A collection embedded in another object.
///
/// The server sends `{"meta": {...}, "rows": [...]}`, with `rows` present
/// only when the collection was expanded. When writing, MoySklad expects a
/// bare array of rows, so a non-empty `MetaArray` serializes as one. An empty
/// one serializes as `{"meta": {...}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaArray<T> {
    /// Collection meta.
    pub meta: Meta,
    /// Rows, in order.
    pub rows: Vec<T>,
}

impl<T> Default for MetaArray<T> {
    fn default() -> Self {
        Self {
            meta: Meta::default(),
            rows: Vec::new(),
        }
    }
}

impl<T> MetaArray<T> {
    /// Creates a collection from rows, as sent when creating a document.
    #[must_use]
    pub fn from_rows(rows: Vec<T>) -> Self {
        Self {
            meta: Meta::default(),
            rows,
        }
    }

    /// Appends a row.
    pub fn push(&mut self, row: T) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// Number of rows reported by the server, or held locally.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.meta.size.unwrap_or(self.rows.len() as u64)
    }

    /// Returns `true` if no rows are held locally.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T> From<Vec<T>> for MetaArray<T> {
    fn from(rows: Vec<T>) -> Self {
        Self::from_rows(rows)
    }
}

#[derive(Serialize)]
struct MetaOnly<'a> {
    meta: &'a Meta,
}

impl<T: Serialize> Serialize for MetaArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.rows.is_empty() && self.meta != Meta::default() {
            MetaOnly { meta: &self.meta }.serialize(serializer)
        } else {
            self.rows.serialize(serializer)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MetaArrayRepr<T> {
    Rows(Vec<T>),
    Object {
        #[serde(default)]
        meta: Meta,
        #[serde(default = "Vec::new")]
        rows: Vec<T>,
    },
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MetaArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match MetaArrayRepr::deserialize(deserializer)? {
            MetaArrayRepr::Rows(rows) => Self::from_rows(rows),
            MetaArrayRepr::Object { meta, rows } => Self { meta, rows },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_deserializes_page() {
        let list: List<serde_json::Value> = serde_json::from_value(json!({
            "context": {"employee": {"meta": {"href": "https://example/context/employee"}}},
            "meta": {"size": 3, "limit": 2, "offset": 0},
            "rows": [{"name": "a"}, {"name": "b"}]
        }))
        .unwrap();

        assert_eq!(list.total(), 3);
        assert_eq!(list.rows.len(), 2);
        assert_eq!(list.rows[1]["name"], "b");
    }

    #[test]
    fn test_list_without_rows_is_empty() {
        let list: List<serde_json::Value> =
            serde_json::from_value(json!({"meta": {"size": 0}})).unwrap();
        assert!(list.rows.is_empty());
        assert_eq!(list.total(), 0);
    }

    #[test]
    fn test_meta_array_accepts_object_and_bare_array() {
        let object: MetaArray<u32> = serde_json::from_value(json!({
            "meta": {"href": "https://example/positions", "size": 2},
            "rows": [1, 2]
        }))
        .unwrap();
        assert_eq!(object.rows, vec![1, 2]);
        assert_eq!(object.size(), 2);

        let collapsed: MetaArray<u32> =
            serde_json::from_value(json!({"meta": {"size": 7}})).unwrap();
        assert!(collapsed.is_empty());
        assert_eq!(collapsed.size(), 7);

        let bare: MetaArray<u32> = serde_json::from_value(json!([4, 5])).unwrap();
        assert_eq!(bare.rows, vec![4, 5]);
    }

    #[test]
    fn test_meta_array_serializes_rows_as_array() {
        let mut positions = MetaArray::default();
        positions.push(json!({"quantity": 1})).push(json!({"quantity": 2}));

        let value = serde_json::to_value(&positions).unwrap();
        assert_eq!(value, json!([{"quantity": 1}, {"quantity": 2}]));
    }

    #[test]
    fn test_collapsed_meta_array_serializes_meta_only() {
        let collapsed: MetaArray<u32> = serde_json::from_value(json!({
            "meta": {"href": "https://example/positions", "size": 7}
        }))
        .unwrap();

        let value = serde_json::to_value(&collapsed).unwrap();
        assert_eq!(value["meta"]["size"], 7);
    }
}
