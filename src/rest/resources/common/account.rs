//! Bank accounts of counterparties and organizations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::meta::{impl_has_meta, Meta};
use super::timestamp::Timestamp;

/// A bank account (`{entity}/{id}/accounts`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAccount {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Account the object belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
    /// Account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Bank name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// Bank address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_location: Option<String>,
    /// Bank identifier code (BIC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    /// Correspondent account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correspondent_account: Option<String>,
    /// Whether it is the main account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// When it was last changed.
    #[serde(skip_serializing)]
    pub updated: Option<Timestamp>,
}

impl_has_meta!(AgentAccount);

impl AgentAccount {
    /// Creates an account with a number.
    #[must_use]
    pub fn new(account_number: impl Into<String>) -> Self {
        Self {
            account_number: Some(account_number.into()),
            ..Default::default()
        }
    }

    pub fn set_bank_name(&mut self, bank_name: impl Into<String>) -> &mut Self {
        self.bank_name = Some(bank_name.into());
        self
    }

    pub fn set_bic(&mut self, bic: impl Into<String>) -> &mut Self {
        self.bic = Some(bic.into());
        self
    }

    pub fn set_default(&mut self, is_default: bool) -> &mut Self {
        self.is_default = Some(is_default);
        self
    }
}
