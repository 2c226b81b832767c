//! Discounts.
//!
//! `entity/discount` lists every discount of the account regardless of its
//! kind. Each kind is then managed at its own endpoint:
//!
//! | Kind                        | Endpoint                        |
//! |-----------------------------|---------------------------------|
//! | [`AccumulationDiscount`]    | `entity/accumulationdiscount`   |
//! | [`PersonalDiscount`]        | `entity/personaldiscount`       |
//! | [`SpecialPriceDiscount`]    | `entity/specialpricediscount`   |
//!
//! Round-off of kopecks ([`RoundOffDiscount`]) exists once per account and
//! is only updated, through `entity/discount/{id}`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::capabilities::HasEndpoint;
use crate::rest::resources::common::{HasMeta, Meta, MetaWrapper, MetaType};
use crate::rest::resources::SalePrice;
use crate::rest::service::{impl_capabilities, impl_entity};
use crate::rest::{EntityService, ResourceError, ResourceResponse};

/// Any discount, as returned by `entity/discount`.
///
/// `meta.type` tells the kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
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
    /// Discount name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the discount applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Whether it applies to every product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_products: Option<bool>,

    /// Whether it applies to every counterparty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_agents: Option<bool>,

    /// Counterparty groups it applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agent_tags: Vec<String>,

    /// Product, variant, service or bundle.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assortment: Vec<MetaWrapper>,
}

impl_entity!(Discount, "Discount", "entity/discount", Discount);

impl_capabilities!(Discount: GetList);

impl Discount {
    /// Returns the discount kind from its meta.
    #[must_use]
    pub fn kind(&self) -> Option<MetaType> {
        self.meta.as_ref().and_then(|meta| meta.meta_type.clone())
    }
}

/// Rounding of kopecks on sale documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOffDiscount {
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
    /// Discount name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the discount applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Whether it applies to every counterparty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_agents: Option<bool>,

    /// Counterparty groups it applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agent_tags: Vec<String>,
}

impl EntityService<Discount> {
    /// Updates the round-off discount.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn update_round_off(
        &self,
        id: Uuid,
        discount: &RoundOffDiscount,
    ) -> Result<ResourceResponse<RoundOffDiscount>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(endpoint.path().id(id)).put(discount).await
    }
}

/// One step of an accumulation discount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulationLevel {
    /// Accumulated sales amount that unlocks the level.
    pub amount: f64,

    /// Discount percent of the level.
    pub discount: f64,
}

/// A discount that grows with the customer's total purchases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulationDiscount {
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
    /// Discount name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the discount applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Whether it applies to every product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_products: Option<bool>,

    /// Whether it applies to every counterparty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_agents: Option<bool>,

    /// Counterparty groups it applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agent_tags: Vec<String>,

    /// Product, variant, service or bundle.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assortment: Vec<MetaWrapper>,

    /// Product folders it applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_folders: Vec<MetaWrapper>,

    /// Discount levels by accumulated amount.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<AccumulationLevel>,
}

impl_entity!(
    AccumulationDiscount,
    "AccumulationDiscount",
    "entity/accumulationdiscount",
    AccumulationDiscount
);

impl_capabilities!(AccumulationDiscount: GetList, GetById, Create, Update, Delete);

impl AccumulationDiscount {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            active: Some(true),
            ..Default::default()
        }
    }

    /// Appends a level. Levels are kept in the order they are added.
    pub fn add_level(&mut self, amount: f64, discount: f64) -> &mut Self {
        self.levels.push(AccumulationLevel { amount, discount });
        self
    }

    pub fn set_all_products(&mut self, all_products: bool) -> &mut Self {
        self.all_products = Some(all_products);
        self
    }

    pub fn set_all_agents(&mut self, all_agents: bool) -> &mut Self {
        self.all_agents = Some(all_agents);
        self
    }
}

/// A fixed percent granted to selected customers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDiscount {
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
    /// Discount name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the discount applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Whether it applies to every product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_products: Option<bool>,

    /// Whether it applies to every counterparty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_agents: Option<bool>,

    /// Counterparty groups it applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agent_tags: Vec<String>,

    /// Product, variant, service or bundle.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assortment: Vec<MetaWrapper>,

    /// Product folders it applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_folders: Vec<MetaWrapper>,
}

impl_entity!(
    PersonalDiscount,
    "PersonalDiscount",
    "entity/personaldiscount",
    PersonalDiscount
);

impl_capabilities!(PersonalDiscount: GetList, GetById, Create, Update, Delete);

impl PersonalDiscount {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            active: Some(true),
            ..Default::default()
        }
    }

    pub fn add_agent_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.agent_tags.push(tag.into());
        self
    }
}

/// A special price or percent for selected goods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialPriceDiscount {
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
    /// Discount name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the discount applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Whether it applies to every product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_products: Option<bool>,

    /// Whether it applies to every counterparty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_agents: Option<bool>,

    /// Counterparty groups it applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agent_tags: Vec<String>,

    /// Product, variant, service or bundle.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assortment: Vec<MetaWrapper>,

    /// Product folders it applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_folders: Vec<MetaWrapper>,

    /// Percent off, used when `use_price_type` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,

    /// Whether a price type is used instead of a percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_price_type: Option<bool>,

    /// Price type used for the special price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_price: Option<SalePrice>,
}

impl_entity!(
    SpecialPriceDiscount,
    "SpecialPriceDiscount",
    "entity/specialpricediscount",
    SpecialPriceDiscount
);

impl_capabilities!(SpecialPriceDiscount: GetList, GetById, Create, Update, Delete);

impl SpecialPriceDiscount {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            active: Some(true),
            ..Default::default()
        }
    }

    pub fn add_assortment(&mut self, assortment: &impl HasMeta) -> &mut Self {
        if let Some(meta) = assortment.meta() {
            self.assortment.push(MetaWrapper::from(meta.clone()));
        }
        self
    }

    pub fn set_discount(&mut self, discount: f64) -> &mut Self {
        self.use_price_type = Some(false);
        self.discount = Some(discount);
        self
    }

    pub fn set_special_price(&mut self, price: SalePrice) -> &mut Self {
        self.use_price_type = Some(true);
        self.special_price = Some(price);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_discount_kind_from_meta() {
        let discount: Discount = serde_json::from_value(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/personaldiscount/0f8c3d10-0d3c-11ee-0a80-0c4f0001a1b2",
                "type": "personaldiscount"
            },
            "name": "VIP"
        }))
        .unwrap();

        assert_eq!(discount.kind(), Some(MetaType::PersonalDiscount));
    }

    #[test]
    fn test_accumulation_levels_keep_order() {
        let mut discount = AccumulationDiscount::new("Loyalty");
        discount.add_level(10_000.0, 3.0).add_level(50_000.0, 5.0);

        let value = serde_json::to_value(&discount).unwrap();
        assert_eq!(
            value["levels"],
            json!([
                {"amount": 10_000.0, "discount": 3.0},
                {"amount": 50_000.0, "discount": 5.0}
            ])
        );
    }
}
