//! Serial numbers (`entity/thing`). Read-only.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::resources::common::Meta;
use crate::rest::service::{impl_capabilities, impl_entity};

/// A serial number of a tracked product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thing {
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
    /// The serial number itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-text comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl_entity!(Thing, "Thing", "entity/thing", Thing);

impl_capabilities!(Thing: GetList, GetById);
