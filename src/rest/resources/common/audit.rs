//! Saved filters and audit history.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::meta::{impl_has_meta, Meta, MetaWrapper};
use super::references::Employee;
use super::timestamp::Timestamp;

/// A saved list filter (`{entity}/namedfilter`).
///
/// Pass its href to [`Params::named_filter`](crate::rest::Params::named_filter)
/// to apply it to a list request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedFilter {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Account the object belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Responsible employee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Employee>,
}

impl_has_meta!(NamedFilter);

/// One change recorded in an entity's audit log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    /// Audit context the event belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<MetaWrapper>,
    /// The changed object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<MetaWrapper>,
    /// Kind of change, such as `create` or `update`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Type of the changed entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Name of the changed object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When the change happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moment: Option<Timestamp>,
    /// Number of objects changed by a bulk event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_count: Option<u32>,
    /// Type of the changed objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    /// Where the change came from, such as `jsonapi`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Login of the employee who made the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Extra event details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Field-level diff; its shape depends on the event type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<Value>,
}
