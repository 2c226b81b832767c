//! Outgoing payments (`entity/paymentout`) and cash outflows
//! (`entity/cashout`).
//!
//! Both documents record money paid to a counterparty; they differ only in
//! whether the money left a bank account or the cash desk.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::capabilities::Metadata;
use crate::rest::resources::common::{
    Attribute, Employee, EntityMetadata, File, Group, HasMeta, Meta, MetaArray, MetaWrapper,
    Nullable, Organization, Rate, SalesChannel, State, Timestamp,
};
use crate::rest::resources::{Contract, Counterparty, Project};
use crate::rest::service::{impl_capabilities, impl_entity};
use crate::rest::EntityService;

/// An outgoing bank payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOut {
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

    /// Payment amount in kopecks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,

    /// Purpose of payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_purpose: Option<String>,

    /// Expense item the payment is booked to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_item: Option<MetaWrapper>,

    /// VAT included in the total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_sum: Option<f64>,

    /// Contract with the counterparty.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub contract: Nullable<Contract>,

    /// Project the document is booked to.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub project: Nullable<Project>,

    /// Currency and exchange rate.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub rate: Nullable<Rate>,

    /// Sales channel.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub sales_channel: Nullable<SalesChannel>,

    /// Workflow status.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub state: Nullable<State>,

    /// Documents the payment settles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<MetaWrapper>,

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

    /// When it was created.
    #[serde(skip_serializing)]
    pub created: Option<Timestamp>,

    /// When it was last changed.
    #[serde(skip_serializing)]
    pub updated: Option<Timestamp>,
}

impl_entity!(PaymentOut, "PaymentOut", "entity/paymentout", PaymentOut, sync_id);

impl_capabilities!(PaymentOut:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany, SyncId, Trash,
    Template, Attributes, States, Publications, Files, PrintTemplates, NamedFilters, Audit,
    Export,
);

impl Metadata for EntityService<PaymentOut> {
    type Metadata = EntityMetadata;
}

impl PaymentOut {
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

    pub fn set_payment_purpose(&mut self, purpose: impl Into<String>) -> &mut Self {
        self.payment_purpose = Some(purpose.into());
        self
    }

    pub fn set_expense_item(&mut self, expense_item: &impl HasMeta) -> &mut Self {
        self.expense_item = expense_item.meta().cloned().map(MetaWrapper::from);
        self
    }

    /// Links a document the payment settles.
    pub fn add_operation(&mut self, operation: &impl HasMeta) -> &mut Self {
        if let Some(meta) = operation.meta() {
            self.operations.push(MetaWrapper::from(meta.clone()));
        }
        self
    }
}

/// A cash outflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashOut {
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

    /// Total, in kopecks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,

    /// Purpose of payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_purpose: Option<String>,

    /// Expense item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_item: Option<MetaWrapper>,

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

    /// Documents the payment settles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<MetaWrapper>,

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

    /// When it was created.
    #[serde(skip_serializing)]
    pub created: Option<Timestamp>,

    /// When it was last changed.
    #[serde(skip_serializing)]
    pub updated: Option<Timestamp>,
}

impl_entity!(CashOut, "CashOut", "entity/cashout", CashOut, sync_id);

impl_capabilities!(CashOut:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany, SyncId, Trash,
    Template, Attributes, States, Publications, Files, PrintTemplates, NamedFilters, Audit,
    Export,
);

impl Metadata for EntityService<CashOut> {
    type Metadata = EntityMetadata;
}

impl CashOut {
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

    pub fn set_expense_item(&mut self, expense_item: &impl HasMeta) -> &mut Self {
        self.expense_item = expense_item.meta().cloned().map(MetaWrapper::from);
        self
    }

    pub fn clear_project(&mut self) -> &mut Self {
        self.project = Nullable::Null;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::common::MetaType;
    use serde_json::json;

    #[test]
    fn test_payment_links_operations_by_meta() {
        let invoice = crate::rest::resources::InvoiceOut {
            meta: Some(Meta::new(
                "https://api.moysklad.ru/api/remap/1.2/entity/invoiceout/3",
                MetaType::InvoiceOut,
            )),
            name: Some("INV-3".to_string()),
            ..Default::default()
        };

        let mut payment = PaymentOut::default();
        payment.set_sum(5_000.0).add_operation(&invoice);

        let value = serde_json::to_value(&payment).unwrap();
        assert_eq!(value["sum"], json!(5_000.0));
        assert_eq!(value["operations"][0]["meta"]["type"], json!("invoiceout"));
    }

    #[test]
    fn test_operation_without_meta_is_skipped() {
        let mut payment = PaymentOut::default();
        payment.add_operation(&crate::rest::resources::InvoiceOut::default());
        assert!(payment.operations.is_empty());
    }
}
