//! Per-item outcome of bulk delete requests.

use serde::{Deserialize, Serialize};

use crate::clients::ApiError;

/// Outcome of deleting one item in a bulk `.../delete` request.
///
/// The server answers with one element per requested item. Successful items
/// carry an `info` message and failed ones an `errors` array, so a partly
/// failed batch still decodes as `Ok`.
///
/// # Example
///
/// ```rust
/// use moysklad::rest::resources::common::DeleteManyResult;
///
/// let results: Vec<DeleteManyResult> = serde_json::from_str(r#"[
///     {"info": "Сущность с UUID: 7944ef04 успешно удалена"},
///     {"errors": [{"error": "Entity not found", "code": 1021}]}
/// ]"#).unwrap();
///
/// assert!(results[0].is_ok());
/// assert!(!results[1].is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeleteManyResult {
    /// The item could not be deleted.
    Errors {
        /// Errors reported for this item.
        errors: Vec<ApiError>,
    },
    /// The item was deleted.
    Info {
        /// Confirmation message.
        info: String,
    },
}

impl DeleteManyResult {
    /// Returns `true` if the item was deleted.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Info { .. })
    }

    /// Returns the confirmation message for deleted items.
    #[must_use]
    pub fn info(&self) -> Option<&str> {
        match self {
            Self::Info { info } => Some(info),
            Self::Errors { .. } => None,
        }
    }

    /// Returns the errors for items that were not deleted.
    #[must_use]
    pub fn errors(&self) -> &[ApiError] {
        match self {
            Self::Errors { errors } => errors,
            Self::Info { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_results_keep_order() {
        let results: Vec<DeleteManyResult> = serde_json::from_value(json!([
            {"errors": [{"error": "Entity is used", "code": 1029}]},
            {"info": "deleted"},
            {"info": "deleted"}
        ]))
        .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].errors()[0].code, Some(1029));
        assert!(results[0].info().is_none());
        assert_eq!(results[1].info(), Some("deleted"));
        assert!(results[2].errors().is_empty());
    }
}
