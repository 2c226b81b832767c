//! Stock entries (`entity/enter`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::capabilities::{Metadata, Positions};
use crate::rest::resources::common::{
    Attribute, Employee, EntityMetadata, File, Group, HasMeta, Meta, MetaArray, Nullable,
    Organization, Rate, State, Store, Timestamp,
};
use crate::rest::resources::{Position, Project};
use crate::rest::service::{impl_capabilities, impl_entity};
use crate::rest::EntityService;

/// Overhead costs spread across the entered positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverheadDistribution {
    Weight,
    Volume,
    Price,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overhead {
    /// Overhead amount, in kopecks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,

    /// How the overhead is spread over lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<OverheadDistribution>,
}

/// Goods entered into a store without a supplier, e.g. initial balances or
/// surplus found in an inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enter {
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
    /// External sync id; may only be set on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_id: Option<Uuid>,

    /// Document number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Document code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Code in an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,

    /// Free-text comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Document date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moment: Option<Timestamp>,

    /// Whether the document is posted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicable: Option<bool>,

    /// Own legal entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,

    /// Warehouse goods arrive on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<Store>,

    /// Project the document is booked to.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub project: Nullable<Project>,

    /// Currency and exchange rate.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub rate: Nullable<Rate>,

    /// Workflow status.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub state: Nullable<State>,

    /// Additional costs spread over the lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overhead: Option<Overhead>,

    /// Document lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<MetaArray<Position>>,

    /// Attached files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<MetaArray<File>>,

    /// Additional field values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    /// Responsible employee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Employee>,

    /// Owning department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,

    /// Whether all employees can see it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,

    /// Total, in kopecks.
    #[serde(skip_serializing)]
    pub sum: Option<f64>,

    /// When it was created.
    #[serde(skip_serializing)]
    pub created: Option<Timestamp>,

    /// When it was last changed.
    #[serde(skip_serializing)]
    pub updated: Option<Timestamp>,
}

impl_entity!(Enter, "Enter", "entity/enter", Enter, sync_id);

impl_capabilities!(Enter:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany, SyncId, Trash,
    Template, Attributes, States, Publications, Files, PrintTemplates, NamedFilters, Audit,
    Export,
);

impl Metadata for EntityService<Enter> {
    type Metadata = EntityMetadata;
}

impl Positions for EntityService<Enter> {
    type Position = Position;
}

impl Enter {
    pub fn set_organization(&mut self, organization: &Organization) -> &mut Self {
        self.organization = Some(organization.clean());
        self
    }

    pub fn set_store(&mut self, store: &Store) -> &mut Self {
        self.store = Some(store.clean());
        self
    }

    pub fn set_overhead(&mut self, sum: f64, distribution: OverheadDistribution) -> &mut Self {
        self.overhead = Some(Overhead {
            sum: Some(sum),
            distribution: Some(distribution),
        });
        self
    }

    pub fn add_position(&mut self, position: Position) -> &mut Self {
        self.positions
            .get_or_insert_with(MetaArray::default)
            .push(position);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overhead_distribution_wire_names() {
        let mut enter = Enter::default();
        enter.set_overhead(1_000.0, OverheadDistribution::Weight);

        assert_eq!(
            serde_json::to_value(&enter).unwrap(),
            json!({"overhead": {"sum": 1_000.0, "distribution": "weight"}})
        );
    }
}
