//! Document positions.
//!
//! Most documents share the [`Position`] shape. Customer orders add reserve
//! and shipment counters in [`CustomerOrderPosition`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::resources::common::{
    impl_has_meta, HasMeta, Meta, MetaWrapper, TrackingCode,
};

/// A position of an invoice, internal order, enter or retail sales return.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
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
    /// Product, variant, service or bundle of the position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assortment: Option<MetaWrapper>,

    /// Quantity in the assortment unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Unit price in kopecks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Discount in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,

    /// VAT rate in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<u32>,

    /// Whether VAT is charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,

    /// Serial numbers, for assortments tracked by serial number.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub things: Vec<String>,

    /// Marking codes of the line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracking_codes: Vec<TrackingCode>,
}

/// A customer order position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrderPosition {
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
    /// Product, variant, service or bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assortment: Option<MetaWrapper>,

    /// Quantity in the assortment unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Price, in kopecks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Discount, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,

    /// VAT rate, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<u32>,

    /// Whether VAT is charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,

    /// Reserved quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve: Option<f64>,

    /// Shipped quantity.
    #[serde(skip_serializing)]
    pub shipped: Option<f64>,
}

impl_has_meta!(Position, CustomerOrderPosition);

impl Position {
    /// Creates a position for an assortment.
    #[must_use]
    pub fn new(assortment: &impl HasMeta, quantity: f64) -> Self {
        Self {
            assortment: assortment.meta().cloned().map(MetaWrapper::from),
            quantity: Some(quantity),
            ..Default::default()
        }
    }

    pub fn set_price(&mut self, price: f64) -> &mut Self {
        self.price = Some(price);
        self
    }

    pub fn set_discount(&mut self, discount: f64) -> &mut Self {
        self.discount = Some(discount);
        self
    }

    pub fn set_vat(&mut self, vat: u32) -> &mut Self {
        self.vat = Some(vat);
        self
    }
}

impl CustomerOrderPosition {
    /// Creates a position for an assortment.
    #[must_use]
    pub fn new(assortment: &impl HasMeta, quantity: f64) -> Self {
        Self {
            assortment: assortment.meta().cloned().map(MetaWrapper::from),
            quantity: Some(quantity),
            ..Default::default()
        }
    }

    pub fn set_price(&mut self, price: f64) -> &mut Self {
        self.price = Some(price);
        self
    }

    pub fn set_discount(&mut self, discount: f64) -> &mut Self {
        self.discount = Some(discount);
        self
    }

    pub fn set_reserve(&mut self, reserve: f64) -> &mut Self {
        self.reserve = Some(reserve);
        self
    }
}
