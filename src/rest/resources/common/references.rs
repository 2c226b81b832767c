//! Lightweight company-structure objects referenced from documents.
//!
//! Documents point at these by meta. Only the fields returned when such an
//! object is expanded are modelled.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::meta::{impl_has_meta, HasMeta, Meta};

/// Legal entity of the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Object code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Taxpayer number (INN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    /// Whether it is archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

/// Account employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Employee department.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sort index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
}

/// Warehouse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Object code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Warehouse address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Currency from the account's currency dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO 4217 code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,
    /// Exchange rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// Whether it is the account currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

/// Sales channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesChannel {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Channel type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<String>,
}

impl_has_meta!(Organization, Employee, Group, Store, Currency, SalesChannel);

/// Document currency with its exchange rate.
///
/// Not an object of its own, so it has no meta.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    /// Currency reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    /// Exchange rate used by the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl Rate {
    /// Creates a rate referencing a currency by meta.
    #[must_use]
    pub fn new(currency: &Currency) -> Self {
        Self {
            currency: Some(currency.clean()),
            value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::common::MetaType;

    #[test]
    fn test_clean_keeps_only_meta() {
        let store = Store {
            meta: Some(Meta::new("https://example/entity/store/1", MetaType::Store)),
            id: Some(Uuid::nil()),
            name: Some("Main".to_string()),
            code: Some("01".to_string()),
            address: None,
        };

        let clean = store.clean();
        assert_eq!(clean.meta, store.meta);
        assert!(clean.name.is_none());
        assert!(clean.id.is_none());

        let value = serde_json::to_value(&clean).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_rate_references_currency_by_meta() {
        let currency = Currency {
            meta: Some(Meta::new("https://example/entity/currency/1", MetaType::Currency)),
            name: Some("руб".to_string()),
            iso_code: Some("RUB".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(Rate::new(&currency)).unwrap();
        assert_eq!(value["currency"]["meta"]["type"], "currency");
        assert!(value["currency"].get("isoCode").is_none());
    }
}
