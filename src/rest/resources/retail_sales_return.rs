//! Retail returns (`entity/retailsalesreturn`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::capabilities::{Metadata, Positions};
use crate::rest::resources::common::{
    Attribute, Employee, EntityMetadata, File, Group, HasMeta, Meta, MetaArray, MetaWrapper,
    Nullable, Organization, Rate, State, Store, Timestamp,
};
use crate::rest::resources::{Contract, Counterparty, Position, Project};
use crate::rest::service::{impl_capabilities, impl_entity};
use crate::rest::EntityService;

/// Goods returned by a retail customer.
///
/// A return is based either on a retail sale (`demand`) or on a retail
/// shift without a sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailSalesReturn {
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

    /// Counterparty on the other side of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<Counterparty>,

    /// Warehouse goods return to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<Store>,

    /// Point of sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_store: Option<MetaWrapper>,

    /// Retail shift of the return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_shift: Option<MetaWrapper>,

    /// The retail sale being returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand: Option<MetaWrapper>,

    /// Cash refunded, in kopecks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_sum: Option<f64>,

    /// Card refund, in kopecks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_cash_sum: Option<f64>,

    /// Contract with the counterparty.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub contract: Nullable<Contract>,

    /// Project the document is booked to.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub project: Nullable<Project>,

    /// Currency and exchange rate.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub rate: Nullable<Rate>,

    /// Workflow status.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub state: Nullable<State>,

    /// Whether VAT is charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,

    /// Whether prices already include VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_included: Option<bool>,

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

impl_entity!(
    RetailSalesReturn,
    "RetailSalesReturn",
    "entity/retailsalesreturn",
    RetailSalesReturn,
    sync_id
);

impl_capabilities!(RetailSalesReturn:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany, SyncId, Trash,
    Template, Attributes, States, Publications, Files, PrintTemplates, NamedFilters, Audit,
    Export,
);

impl Metadata for EntityService<RetailSalesReturn> {
    type Metadata = EntityMetadata;
}

impl Positions for EntityService<RetailSalesReturn> {
    type Position = Position;
}

impl RetailSalesReturn {
    pub fn set_organization(&mut self, organization: &Organization) -> &mut Self {
        self.organization = Some(organization.clean());
        self
    }

    pub fn set_agent(&mut self, agent: &Counterparty) -> &mut Self {
        self.agent = Some(agent.clean());
        self
    }

    pub fn set_store(&mut self, store: &Store) -> &mut Self {
        self.store = Some(store.clean());
        self
    }

    pub fn set_retail_store(&mut self, retail_store: &impl HasMeta) -> &mut Self {
        self.retail_store = retail_store.meta().cloned().map(MetaWrapper::from);
        self
    }

    pub fn set_demand(&mut self, demand: &impl HasMeta) -> &mut Self {
        self.demand = demand.meta().cloned().map(MetaWrapper::from);
        self
    }

    pub fn set_cash_sum(&mut self, sum: f64) -> &mut Self {
        self.cash_sum = Some(sum);
        self
    }

    pub fn set_no_cash_sum(&mut self, sum: f64) -> &mut Self {
        self.no_cash_sum = Some(sum);
        self
    }

    pub fn add_position(&mut self, position: Position) -> &mut Self {
        self.positions
            .get_or_insert_with(MetaArray::default)
            .push(position);
        self
    }
}
