//! Products (`entity/product`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::capabilities::Metadata;
use crate::rest::resources::common::{
    Attribute, Currency, EntityMetadata, Group, HasMeta, Image, Meta, MetaArray, MetaWrapper,
    Employee, Nullable, Timestamp,
};
use crate::rest::resources::Uom;
use crate::rest::service::{impl_capabilities, impl_entity};
use crate::rest::EntityService;

/// An amount in a currency, in kopecks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Price, in kopecks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

/// A sale price of a given price type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePrice {
    /// Price, in kopecks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    /// Price type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_type: Option<MetaWrapper>,
}

/// A product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
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

    /// Product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Product code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Code in an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,

    /// Article (SKU).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,

    /// Product description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether it is archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    /// Unit of measure; clearable.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub uom: Nullable<Uom>,

    /// VAT rate, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<u32>,

    /// Whether VAT is charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,

    /// Weight, kg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Volume, cubic metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,

    /// Lowest allowed price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Price>,

    /// Purchase price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<Price>,

    /// Sale prices by price type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sale_prices: Vec<SalePrice>,

    /// Images; expanded only on request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<MetaArray<Image>>,

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

impl_entity!(Product, "Product", "entity/product", Product, sync_id);

impl_capabilities!(Product:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany, SyncId,
    Attributes, Images, Files, NamedFilters, Audit,
);

impl Metadata for EntityService<Product> {
    type Metadata = EntityMetadata;
}

impl Product {
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_article(&mut self, article: impl Into<String>) -> &mut Self {
        self.article = Some(article.into());
        self
    }

    pub fn set_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.code = Some(code.into());
        self
    }

    pub fn set_uom(&mut self, uom: &Uom) -> &mut Self {
        self.uom = Nullable::Value(uom.clean());
        self
    }

    pub fn clear_uom(&mut self) -> &mut Self {
        self.uom = Nullable::Null;
        self
    }

    pub fn set_vat(&mut self, vat: u32) -> &mut Self {
        self.vat = Some(vat);
        self.vat_enabled = Some(true);
        self
    }

    pub fn set_buy_price(&mut self, value: f64, currency: &Currency) -> &mut Self {
        self.buy_price = Some(Price {
            value: Some(value),
            currency: Some(currency.clean()),
        });
        self
    }

    pub fn add_sale_price(&mut self, price: SalePrice) -> &mut Self {
        self.sale_prices.push(price);
        self
    }

    /// Attaches an image to be uploaded with the product.
    pub fn add_image(&mut self, image: Image) -> &mut Self {
        self.images
            .get_or_insert_with(MetaArray::default)
            .push(image);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::common::MetaType;
    use serde_json::json;

    #[test]
    fn test_images_are_sent_as_array() {
        let mut product = Product::default();
        product
            .set_name("Mug")
            .add_image(Image::from_bytes("mug.png", b"png"));

        let value = serde_json::to_value(&product).unwrap();
        assert!(value["images"].is_array());
        assert_eq!(value["images"][0]["filename"], json!("mug.png"));
    }

    #[test]
    fn test_set_uom_sends_meta_only() {
        let uom = Uom {
            meta: Some(Meta::new(
                "https://api.moysklad.ru/api/remap/1.2/entity/uom/19f1edc0",
                MetaType::Uom,
            )),
            name: Some("pcs".to_string()),
            ..Default::default()
        };

        let mut product = Product::default();
        product.set_uom(&uom);

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["uom"]["meta"]["type"], json!("uom"));
        assert!(value["uom"].get("name").is_none());

        product.clear_uom();
        assert_eq!(serde_json::to_value(&product).unwrap(), json!({"uom": null}));
    }
}
