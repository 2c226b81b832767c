//! Counterparties (`entity/counterparty`).
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::rest::capabilities::{Accounts, Create};
//! use moysklad::rest::resources::{CompanyType, Counterparty};
//! use moysklad::rest::resources::common::AgentAccount;
//!
//! let mut counterparty = Counterparty::default();
//! counterparty
//!     .set_name("ООО Ромашка")
//!     .set_company_type(CompanyType::Legal)
//!     .set_inn("7736207543");
//!
//! let service = moysklad.counterparty();
//! let created = service.create(&counterparty, None).await?.into_inner();
//!
//! let mut account = AgentAccount::new("40702810900000000001");
//! account.set_bic("044525225");
//! service.update_accounts(created.id.unwrap(), &[account]).await?;
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::capabilities::{Metadata, Settings};
use crate::rest::resources::common::{
    AgentAccount, Attribute, EntityMetadata, Group, HasMeta, Employee, Meta, MetaArray, Nullable,
    State, Timestamp,
};
use crate::rest::service::{impl_capabilities, impl_entity};
use crate::rest::EntityService;

/// Legal form of a counterparty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyType {
    /// Legal entity.
    #[default]
    Legal,
    /// Sole proprietor.
    Entrepreneur,
    /// Private person.
    Individual,
    #[serde(other)]
    Unknown,
}

/// A counterparty: customer, supplier or any other business partner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counterparty {
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

    /// Counterparty name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Counterparty code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Code in an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,

    /// Free-text comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether it is archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    /// Legal form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<CompanyType>,

    /// Taxpayer number (INN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,

    /// Tax registration reason code (KPP).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kpp: Option<String>,

    /// State registration number (OGRN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ogrn: Option<String>,

    /// Full legal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_title: Option<String>,

    /// Registered address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_address: Option<String>,

    /// Actual address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_address: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Group tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Bank accounts; expanded only on request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<MetaArray<AgentAccount>>,

    /// Additional field values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    /// Workflow status.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub state: Nullable<State>,

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

impl_entity!(Counterparty, "Counterparty", "entity/counterparty", Counterparty, sync_id);

impl_capabilities!(Counterparty:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany, SyncId,
    Attributes, States, Files, NamedFilters, Accounts, Audit, Notes,
);

impl Metadata for EntityService<Counterparty> {
    type Metadata = EntityMetadata;
}

impl Settings for EntityService<Counterparty> {
    type Settings = CounterpartySettings;
}

impl Counterparty {
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.code = Some(code.into());
        self
    }

    pub fn set_company_type(&mut self, company_type: CompanyType) -> &mut Self {
        self.company_type = Some(company_type);
        self
    }

    pub fn set_inn(&mut self, inn: impl Into<String>) -> &mut Self {
        self.inn = Some(inn.into());
        self
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> &mut Self {
        self.email = Some(email.into());
        self
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) -> &mut Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.push(tag.into());
        self
    }

    pub fn add_attribute(&mut self, attribute: Attribute) -> &mut Self {
        self.attributes.push(attribute);
        self
    }

    /// Sets the workflow state.
    pub fn set_state(&mut self, state: &State) -> &mut Self {
        self.state = Nullable::Value(state.clean());
        self
    }

    /// Clears the workflow state on the next write.
    pub fn clear_state(&mut self) -> &mut Self {
        self.state = Nullable::Null;
        self
    }

    pub fn set_owner(&mut self, owner: &Employee) -> &mut Self {
        self.owner = Some(owner.clean());
        self
    }
}

/// Rules for counterparty codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueCodeRules {
    /// Reject duplicate codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_unique_code: Option<bool>,

    /// Assign a code when none is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_empty_code: Option<bool>,
}

/// Directory settings of counterparties (`entity/counterparty/settings`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartySettings {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Code uniqueness rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_code_rules: Option<UniqueCodeRules>,

    /// Share new counterparties with all employees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_shared: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::common::MetaType;
    use crate::rest::Entity;
    use serde_json::json;

    #[test]
    fn test_counterparty_entity_descriptor() {
        assert_eq!(Counterparty::PATH, "entity/counterparty");
        assert_eq!(Counterparty::META_TYPE, MetaType::Counterparty);

        let sync_id = Uuid::new_v4();
        let counterparty = Counterparty {
            sync_id: Some(sync_id),
            ..Default::default()
        };
        assert_eq!(counterparty.sync_id(), Some(sync_id));
        assert_eq!(counterparty.id(), None);
    }

    #[test]
    fn test_counterparty_serializes_set_fields_only() {
        let mut counterparty = Counterparty::default();
        counterparty
            .set_name("Ромашка")
            .set_company_type(CompanyType::Entrepreneur)
            .add_tag("wholesale");

        assert_eq!(
            serde_json::to_value(&counterparty).unwrap(),
            json!({"name": "Ромашка", "companyType": "entrepreneur", "tags": ["wholesale"]})
        );
    }

    #[test]
    fn test_clear_state_sends_null() {
        let mut counterparty = Counterparty::default();
        counterparty.clear_state();

        assert_eq!(serde_json::to_value(&counterparty).unwrap(), json!({"state": null}));
    }

    #[test]
    fn test_settings_round_trip_shape() {
        let settings: CounterpartySettings = serde_json::from_value(json!({
            "meta": {"href": "https://api.moysklad.ru/api/remap/1.2/entity/counterparty/settings"},
            "uniqueCodeRules": {"checkUniqueCode": true, "fillEmptyCode": false},
            "createShared": true
        }))
        .unwrap();

        let rules = settings.unique_code_rules.unwrap();
        assert_eq!(rules.check_unique_code, Some(true));
        assert_eq!(rules.fill_empty_code, Some(false));
        assert_eq!(settings.create_shared, Some(true));
    }
}
