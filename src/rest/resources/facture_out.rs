//! Issued VAT invoices (`entity/factureout`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::capabilities::Metadata;
use crate::rest::resources::common::{
    Attribute, Employee, EntityMetadata, File, Group, HasMeta, Meta, MetaArray, MetaWrapper,
    Nullable, Organization, Rate, State, Timestamp,
};
use crate::rest::resources::{Contract, Counterparty};
use crate::rest::service::{impl_capabilities, impl_entity};
use crate::rest::EntityService;

/// A VAT invoice issued for shipments or prepayments.
///
/// It is created from one of `demands`, `returns` or `payments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactureOut {
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
    #[serde(skip_serializing)]
    pub organization: Option<Organization>,

    /// Counterparty on the other side of the document.
    #[serde(skip_serializing)]
    pub agent: Option<Counterparty>,

    /// Consignee, when it differs from the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consignee: Option<Counterparty>,

    /// Number of the payment document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_number: Option<String>,

    /// Date of the payment document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<Timestamp>,

    /// Government contract identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_contract_id: Option<String>,

    /// Linked shipments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub demands: Vec<MetaWrapper>,

    /// Linked returns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub returns: Vec<MetaWrapper>,

    /// Linked payments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payments: Vec<MetaWrapper>,

    /// Contract with the counterparty.
    #[serde(skip_serializing)]
    pub contract: Option<Contract>,

    /// Currency and exchange rate.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub rate: Nullable<Rate>,

    /// Workflow status.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub state: Nullable<State>,

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

impl_entity!(FactureOut, "FactureOut", "entity/factureout", FactureOut, sync_id);

impl_capabilities!(FactureOut:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany, SyncId, Trash,
    Template, Attributes, States, Publications, Files, PrintTemplates, NamedFilters, Audit,
    Export,
);

impl Metadata for EntityService<FactureOut> {
    type Metadata = EntityMetadata;
}

impl FactureOut {
    /// Links a shipment the invoice is issued for.
    pub fn add_demand(&mut self, demand: &impl HasMeta) -> &mut Self {
        if let Some(meta) = demand.meta() {
            self.demands.push(MetaWrapper::from(meta.clone()));
        }
        self
    }

    /// Links a prepayment the invoice is issued for.
    pub fn add_payment(&mut self, payment: &impl HasMeta) -> &mut Self {
        if let Some(meta) = payment.meta() {
            self.payments.push(MetaWrapper::from(meta.clone()));
        }
        self
    }

    pub fn set_consignee(&mut self, consignee: &Counterparty) -> &mut Self {
        self.consignee = Some(consignee.clean());
        self
    }

    pub fn set_payment_number(&mut self, number: impl Into<String>) -> &mut Self {
        self.payment_number = Some(number.into());
        self
    }

    pub fn set_payment_date(&mut self, date: impl Into<Timestamp>) -> &mut Self {
        self.payment_date = Some(date.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_organization_and_agent_come_from_base_documents() {
        let facture: FactureOut = serde_json::from_value(json!({
            "name": "00007",
            "organization": {"meta": {"href": "https://api.moysklad.ru/api/remap/1.2/entity/organization/1", "type": "organization"}},
            "agent": {"meta": {"href": "https://api.moysklad.ru/api/remap/1.2/entity/counterparty/2", "type": "counterparty"}}
        }))
        .unwrap();

        assert!(facture.organization.is_some());
        assert_eq!(serde_json::to_value(&facture).unwrap(), json!({"name": "00007"}));
    }
}
