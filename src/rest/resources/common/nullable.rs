//! Three-state optional values.
//!
//! MoySklad distinguishes a field that is absent (leave unchanged), a field
//! sent as `null` (clear it) and a field with a value. `Option<T>` cannot
//! express the middle case, so clearable fields use [`Nullable<T>`].
//!
//! Struct fields must carry
//! `#[serde(default, skip_serializing_if = "Nullable::is_unset")]` so the
//! unset state is omitted on write and restored from an absent key on read.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that may be unset, explicitly null, or present.
///
/// # Example
///
/// ```rust
/// use moysklad::rest::resources::common::Nullable;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize, Default)]
/// struct Patch {
///     #[serde(default, skip_serializing_if = "Nullable::is_unset")]
///     store: Nullable<String>,
/// }
///
/// let mut patch = Patch::default();
/// assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
///
/// patch.store = Nullable::Null;
/// assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"store":null}"#);
///
/// patch.store = Nullable::Value("main".to_string());
/// assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"store":"main"}"#);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// Not present; omitted on write.
    #[default]
    Unset,
    /// Explicit `null`; clears the field on the server.
    Null,
    /// A concrete value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Returns `true` if the value is unset.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` if the value is an explicit null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if a value is present.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns a reference to the value, if present.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Converts into an `Option`, folding `Unset` and `Null` into `None`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Maps the contained value.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Nullable<U> {
        match self {
            Self::Unset => Nullable::Unset,
            Self::Null => Nullable::Null,
            Self::Value(v) => Nullable::Value(f(v)),
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    /// `Some(v)` becomes `Value(v)`; `None` becomes `Null`.
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Unset | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // An absent key never reaches here; `#[serde(default)]` yields `Unset`.
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(default, skip_serializing_if = "Nullable::is_unset")]
        rate: Nullable<f64>,
        #[serde(default, skip_serializing_if = "Nullable::is_unset")]
        name: Nullable<String>,
    }

    #[test]
    fn test_unset_is_omitted() {
        let value = serde_json::to_value(Sample::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_null_is_written_as_json_null() {
        let sample = Sample {
            rate: Nullable::Null,
            ..Default::default()
        };
        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(value, json!({"rate": null}));
    }

    #[test]
    fn test_value_is_written_verbatim() {
        let sample = Sample {
            rate: Nullable::Value(1.5),
            name: Nullable::Value("x".to_string()),
        };
        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(value, json!({"rate": 1.5, "name": "x"}));
    }

    #[test]
    fn test_round_trip_preserves_each_state() {
        for sample in [
            Sample::default(),
            Sample {
                rate: Nullable::Null,
                name: Nullable::Unset,
            },
            Sample {
                rate: Nullable::Value(2.0),
                name: Nullable::Null,
            },
        ] {
            let encoded = serde_json::to_string(&sample).unwrap();
            let decoded: Sample = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, sample, "round trip of {encoded}");
        }
    }

    #[test]
    fn test_accessors() {
        let value: Nullable<u8> = Nullable::Value(3);
        assert!(value.is_value());
        assert_eq!(value.value(), Some(&3));
        assert_eq!(value.map(|v| v * 2).into_option(), Some(6));

        let null: Nullable<u8> = None.into();
        assert!(null.is_null());
        assert_eq!(null.into_option(), None);

        assert!(Nullable::<u8>::default().is_unset());
    }
}
