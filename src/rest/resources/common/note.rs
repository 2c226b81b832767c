//! Comments attached to tasks and documents.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::meta::{impl_has_meta, Meta, MetaWrapper};
use super::timestamp::Timestamp;

/// A comment on a task (`entity/task/{id}/notes`) or a customer order
/// (`entity/customerorder/{id}/notes`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    // --- Read-only fields ---
    /// Object id.
    #[serde(skip_serializing)]
    pub id: Option<Uuid>,

    /// Account the object belongs to.
    #[serde(skip_serializing)]
    pub account_id: Option<Uuid>,

    // --- Writable fields ---
    /// Comment text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Employee who wrote the comment.
    #[serde(skip_serializing)]
    pub author: Option<MetaWrapper>,

    /// Application that wrote the comment, if any.
    #[serde(skip_serializing)]
    pub author_application: Option<MetaWrapper>,

    /// When it was created.
    #[serde(skip_serializing)]
    pub created: Option<Timestamp>,
}

impl_has_meta!(Note);

impl Note {
    /// Creates a note with a text.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_note_writes_only_description() {
        let mut note: Note = serde_json::from_value(json!({
            "id": "8a5f2e1c-6b1d-11ee-0a80-0d8a003c7a11",
            "description": "call back",
            "created": "2024-05-02 10:00:00.000",
            "author": {"meta": {"href": "https://api.moysklad.ru/api/remap/1.2/entity/employee/1", "type": "employee"}}
        }))
        .unwrap();
        note.description = Some("called".to_string());
        note.meta = None;

        assert_eq!(serde_json::to_value(&note).unwrap(), json!({"description": "called"}));
    }
}
