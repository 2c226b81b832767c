//! Internal orders (`entity/internalorder`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::capabilities::{Metadata, Positions};
use crate::rest::resources::common::{
    Attribute, Employee, EntityMetadata, File, Group, HasMeta, Meta, MetaArray, MetaWrapper,
    Nullable, Organization, Rate, State, Store, Timestamp,
};
use crate::rest::resources::{Position, Project};
use crate::rest::service::{impl_capabilities, impl_entity};
use crate::rest::EntityService;

/// A request to move or purchase goods within the company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalOrder {
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

    /// Planned delivery date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_planned_moment: Option<Timestamp>,

    /// Own legal entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,

    /// Project the document is booked to.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub project: Nullable<Project>,

    /// Currency and exchange rate.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub rate: Nullable<Rate>,

    /// Workflow status.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub state: Nullable<State>,

    /// Warehouse the goods are ordered for.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub store: Nullable<Store>,

    /// Whether VAT is charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,

    /// Whether prices already include VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_included: Option<bool>,

    /// Document lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<MetaArray<Position>>,

    /// Purchase orders created from this order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub purchase_orders: Vec<MetaWrapper>,

    /// Transfers created from this order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moves: Vec<MetaWrapper>,

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

impl_entity!(
    InternalOrder,
    "InternalOrder",
    "entity/internalorder",
    InternalOrder,
    sync_id
);

impl_capabilities!(InternalOrder:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany, SyncId, Trash,
    Template, Attributes, States, Publications, Files, PrintTemplates, NamedFilters, Audit,
    Export,
);

impl Metadata for EntityService<InternalOrder> {
    type Metadata = EntityMetadata;
}

impl Positions for EntityService<InternalOrder> {
    type Position = Position;
}

impl InternalOrder {
    pub fn set_organization(&mut self, organization: &Organization) -> &mut Self {
        self.organization = Some(organization.clean());
        self
    }

    pub fn set_store(&mut self, store: &Store) -> &mut Self {
        self.store = Nullable::Value(store.clean());
        self
    }

    pub fn clear_store(&mut self) -> &mut Self {
        self.store = Nullable::Null;
        self
    }

    pub fn set_project(&mut self, project: &Project) -> &mut Self {
        self.project = Nullable::Value(project.clean());
        self
    }

    pub fn set_delivery_planned_moment(&mut self, moment: impl Into<Timestamp>) -> &mut Self {
        self.delivery_planned_moment = Some(moment.into());
        self
    }

    pub fn add_position(&mut self, position: Position) -> &mut Self {
        self.positions
            .get_or_insert_with(MetaArray::default)
            .push(position);
        self
    }
}
