//! Customer orders (`entity/customerorder`).
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::rest::capabilities::{Create, Positions};
//! use moysklad::rest::resources::{CustomerOrder, CustomerOrderPosition};
//!
//! let mut order = CustomerOrder::default();
//! order
//!     .set_organization(&organization)
//!     .set_agent(&counterparty)
//!     .set_store(&store)
//!     .add_position(CustomerOrderPosition::new(&product, 2.0));
//!
//! let orders = moysklad.customer_order();
//! let created = orders.create(&order, None).await?.into_inner();
//!
//! // Detach the project; other fields stay untouched.
//! let mut patch = CustomerOrder::default();
//! patch.clear_project();
//! orders.update(created.id.unwrap(), &patch, None).await?;
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::capabilities::{Metadata, Positions};
use crate::rest::resources::common::{
    AgentAccount, Attribute, Employee, EntityMetadata, File, Group, HasMeta, Meta, MetaArray,
    MetaWrapper, Nullable, Organization, Rate, SalesChannel, State, Store, Timestamp,
};
use crate::rest::resources::{Contract, Counterparty, CustomerOrderPosition, Project};
use crate::rest::service::{impl_capabilities, impl_entity};
use crate::rest::EntityService;

/// A customer order.
///
/// Fields a caller may want to clear (`project`, `contract`, `rate`,
/// `salesChannel`, `state`, `store`) are [`Nullable`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrder {
    /// Object meta; set on every order read from the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    // --- Read-only fields ---
    /// Order id.
    #[serde(skip_serializing)]
    pub id: Option<Uuid>,

    /// Account the order belongs to.
    #[serde(skip_serializing)]
    pub account_id: Option<Uuid>,

    // --- Identification ---
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

    // --- Parties ---
    /// Selling legal entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,

    /// Bank account of the selling legal entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_account: Option<AgentAccount>,

    /// Buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<Counterparty>,

    /// Bank account of the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_account: Option<AgentAccount>,

    // --- Clearable references ---
    /// Project the order is booked to.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub project: Nullable<Project>,

    /// Contract with the buyer.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub contract: Nullable<Contract>,

    /// Currency and exchange rate of the document.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub rate: Nullable<Rate>,

    /// Sales channel.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub sales_channel: Nullable<SalesChannel>,

    /// Workflow status.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub state: Nullable<State>,

    /// Warehouse goods are reserved on.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub store: Nullable<Store>,

    // --- Delivery and tax ---
    /// Planned shipment date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_planned_moment: Option<Timestamp>,

    /// Shipment address as a single line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_address: Option<String>,

    /// Whether VAT is charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,

    /// Whether prices already include VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_included: Option<bool>,

    // --- Contents ---
    /// Order lines. Read back collapsed to a meta unless expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<MetaArray<CustomerOrderPosition>>,

    /// Attached files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<MetaArray<File>>,

    /// Additional field values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    /// Linked invoices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invoices_out: Vec<MetaWrapper>,

    /// Linked payments, incoming and outgoing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payments: Vec<MetaWrapper>,

    // --- Access ---
    /// Responsible employee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Employee>,

    /// Owning department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,

    /// Whether all employees can see the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,

    // --- Computed totals (read-only) ---
    /// Order total, in kopecks.
    #[serde(skip_serializing)]
    pub sum: Option<f64>,

    /// VAT included in the total.
    #[serde(skip_serializing)]
    pub vat_sum: Option<f64>,

    /// Amount paid so far.
    #[serde(skip_serializing)]
    pub payed_sum: Option<f64>,

    /// Amount shipped so far.
    #[serde(skip_serializing)]
    pub shipped_sum: Option<f64>,

    /// Amount invoiced so far.
    #[serde(skip_serializing)]
    pub invoiced_sum: Option<f64>,

    /// Amount reserved on the store.
    #[serde(skip_serializing)]
    pub reserved_sum: Option<f64>,

    // --- Timestamps and flags (read-only) ---
    /// Whether a print form was generated.
    #[serde(skip_serializing)]
    pub printed: Option<bool>,

    /// Whether the order was published.
    #[serde(skip_serializing)]
    pub published: Option<bool>,

    /// When the order was created.
    #[serde(skip_serializing)]
    pub created: Option<Timestamp>,

    /// When the order was last changed.
    #[serde(skip_serializing)]
    pub updated: Option<Timestamp>,

    /// When the order was moved to trash.
    #[serde(skip_serializing)]
    pub deleted: Option<Timestamp>,
}

impl_entity!(
    CustomerOrder,
    "CustomerOrder",
    "entity/customerorder",
    CustomerOrder,
    sync_id
);

impl_capabilities!(CustomerOrder:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany, SyncId, Trash,
    Template, Attributes, States, Publications, Files, PrintTemplates, NamedFilters, Audit,
    Export, Notes,
);

impl Metadata for EntityService<CustomerOrder> {
    type Metadata = EntityMetadata;
}

impl Positions for EntityService<CustomerOrder> {
    type Position = CustomerOrderPosition;
}

impl CustomerOrder {
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_moment(&mut self, moment: impl Into<Timestamp>) -> &mut Self {
        self.moment = Some(moment.into());
        self
    }

    pub fn set_applicable(&mut self, applicable: bool) -> &mut Self {
        self.applicable = Some(applicable);
        self
    }

    pub fn set_organization(&mut self, organization: &Organization) -> &mut Self {
        self.organization = Some(organization.clean());
        self
    }

    pub fn set_agent(&mut self, agent: &Counterparty) -> &mut Self {
        self.agent = Some(agent.clean());
        self
    }

    pub fn set_project(&mut self, project: &Project) -> &mut Self {
        self.project = Nullable::Value(project.clean());
        self
    }

    pub fn clear_project(&mut self) -> &mut Self {
        self.project = Nullable::Null;
        self
    }

    pub fn set_contract(&mut self, contract: &Contract) -> &mut Self {
        self.contract = Nullable::Value(contract.clean());
        self
    }

    pub fn clear_contract(&mut self) -> &mut Self {
        self.contract = Nullable::Null;
        self
    }

    pub fn set_rate(&mut self, rate: Rate) -> &mut Self {
        self.rate = Nullable::Value(rate);
        self
    }

    pub fn clear_rate(&mut self) -> &mut Self {
        self.rate = Nullable::Null;
        self
    }

    pub fn set_sales_channel(&mut self, sales_channel: &SalesChannel) -> &mut Self {
        self.sales_channel = Nullable::Value(sales_channel.clean());
        self
    }

    pub fn clear_sales_channel(&mut self) -> &mut Self {
        self.sales_channel = Nullable::Null;
        self
    }

    pub fn set_state(&mut self, state: &State) -> &mut Self {
        self.state = Nullable::Value(state.clean());
        self
    }

    pub fn clear_state(&mut self) -> &mut Self {
        self.state = Nullable::Null;
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

    pub fn set_delivery_planned_moment(&mut self, moment: impl Into<Timestamp>) -> &mut Self {
        self.delivery_planned_moment = Some(moment.into());
        self
    }

    pub fn set_shipment_address(&mut self, address: impl Into<String>) -> &mut Self {
        self.shipment_address = Some(address.into());
        self
    }

    /// Appends a position to be created with the order.
    pub fn add_position(&mut self, position: CustomerOrderPosition) -> &mut Self {
        self.positions
            .get_or_insert_with(MetaArray::default)
            .push(position);
        self
    }

    pub fn add_attribute(&mut self, attribute: Attribute) -> &mut Self {
        self.attributes.push(attribute);
        self
    }

    pub fn set_owner(&mut self, owner: &Employee) -> &mut Self {
        self.owner = Some(owner.clean());
        self
    }

    pub fn set_shared(&mut self, shared: bool) -> &mut Self {
        self.shared = Some(shared);
        self
    }
}
