//! Contracts (`entity/contract`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::capabilities::Metadata;
use crate::rest::resources::common::{
    AgentAccount, Attribute, Employee, EntityMetadata, Group, HasMeta, Meta, Nullable,
    Organization, Rate, State, Timestamp,
};
use crate::rest::resources::Counterparty;
use crate::rest::service::{impl_capabilities, impl_entity};
use crate::rest::EntityService;

/// Kind of contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    /// Commission agreement.
    Commission,
    /// Sale agreement.
    Sales,
    #[serde(other)]
    Unknown,
}

/// Commission reward calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardType {
    /// Percentage of the sale amount.
    PercentOfSales,
    /// No reward.
    None,
    #[serde(other)]
    Unknown,
}

/// A contract with a counterparty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
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

    /// Contract number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contract code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Code in an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,

    /// Free-text comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Contract date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moment: Option<Timestamp>,

    /// Whether it is archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    /// Commission or sales contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<ContractType>,

    /// How the commission is calculated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_type: Option<RewardType>,

    /// Commission, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_percent: Option<f64>,

    /// Contract amount in kopecks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,

    /// Own legal entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own_agent: Option<Organization>,

    /// Counterparty the contract is with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<Counterparty>,

    /// Bank account of the own legal entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_account: Option<AgentAccount>,

    /// Bank account of the counterparty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_account: Option<AgentAccount>,

    /// Currency and exchange rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,

    /// Workflow status.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub state: Nullable<State>,

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

    /// When it was last changed.
    #[serde(skip_serializing)]
    pub updated: Option<Timestamp>,
}

impl_entity!(Contract, "Contract", "entity/contract", Contract, sync_id);

impl_capabilities!(Contract:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany, SyncId, Trash,
    Attributes, States, Publications, NamedFilters, PrintTemplates, Audit,
);

impl Metadata for EntityService<Contract> {
    type Metadata = EntityMetadata;
}

impl Contract {
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_contract_type(&mut self, contract_type: ContractType) -> &mut Self {
        self.contract_type = Some(contract_type);
        self
    }

    /// Sets a percentage reward for a commission contract.
    pub fn set_reward_percent(&mut self, percent: f64) -> &mut Self {
        self.reward_type = Some(RewardType::PercentOfSales);
        self.reward_percent = Some(percent);
        self
    }

    pub fn set_own_agent(&mut self, organization: &Organization) -> &mut Self {
        self.own_agent = Some(organization.clean());
        self
    }

    pub fn set_agent(&mut self, agent: &Counterparty) -> &mut Self {
        self.agent = Some(agent.clean());
        self
    }

    pub fn set_moment(&mut self, moment: impl Into<Timestamp>) -> &mut Self {
        self.moment = Some(moment.into());
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::common::MetaType;
    use serde_json::json;

    #[test]
    fn test_commission_contract_body() {
        let organization = Organization {
            meta: Some(Meta::new(
                "https://api.moysklad.ru/api/remap/1.2/entity/organization/1",
                MetaType::Organization,
            )),
            name: Some("Own LLC".to_string()),
            ..Default::default()
        };

        let mut contract = Contract::default();
        contract
            .set_name("42-K")
            .set_contract_type(ContractType::Commission)
            .set_reward_percent(7.5)
            .set_own_agent(&organization);

        let value = serde_json::to_value(&contract).unwrap();
        assert_eq!(value["contractType"], json!("Commission"));
        assert_eq!(value["rewardType"], json!("PercentOfSales"));
        assert_eq!(value["rewardPercent"], json!(7.5));
        assert!(value["ownAgent"].get("name").is_none());
    }
}
