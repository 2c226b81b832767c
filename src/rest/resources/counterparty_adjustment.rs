//! Counterparty balance adjustments (`entity/counterpartyadjustment`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::capabilities::Metadata;
use crate::rest::resources::common::{
    Attribute, Employee, EntityMetadata, File, Group, HasMeta, Meta, MetaArray, Organization,
    Timestamp,
};
use crate::rest::resources::Counterparty;
use crate::rest::service::{impl_capabilities, impl_entity};
use crate::rest::EntityService;

/// A manual correction of a counterparty's balance.
///
/// A positive `sum` increases the counterparty's debt to the organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartyAdjustment {
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
    /// Document number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

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

    /// Total, in kopecks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,

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

    /// Whether a print form was generated.
    #[serde(skip_serializing)]
    pub printed: Option<bool>,

    /// Whether it was published.
    #[serde(skip_serializing)]
    pub published: Option<bool>,

    /// When it was created.
    #[serde(skip_serializing)]
    pub created: Option<Timestamp>,

    /// When it was last changed.
    #[serde(skip_serializing)]
    pub updated: Option<Timestamp>,
}

impl_entity!(
    CounterpartyAdjustment,
    "CounterpartyAdjustment",
    "entity/counterpartyadjustment",
    CounterpartyAdjustment
);

impl_capabilities!(CounterpartyAdjustment:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany, Trash,
    Attributes, Files, Publications, PrintTemplates, NamedFilters, Audit, Export,
);

impl Metadata for EntityService<CounterpartyAdjustment> {
    type Metadata = EntityMetadata;
}

impl CounterpartyAdjustment {
    pub fn set_organization(&mut self, organization: &Organization) -> &mut Self {
        self.organization = Some(organization.clean());
        self
    }

    pub fn set_agent(&mut self, agent: &Counterparty) -> &mut Self {
        self.agent = Some(agent.clean());
        self
    }

    pub fn set_sum(&mut self, sum: f64) -> &mut Self {
        self.sum = Some(sum);
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_file(&mut self, file: File) -> &mut Self {
        self.files.get_or_insert_with(MetaArray::default).push(file);
        self
    }
}
