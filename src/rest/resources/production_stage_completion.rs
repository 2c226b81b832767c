//! Production stage completions (`entity/productionstagecompletion`).
//!
//! A completion records the work done on one stage of a production task.
//! Its consumed materials and, on the last stage, its produced goods are
//! sub-collections:
//!
//! ```text
//! entity/productionstagecompletion/{id}/materials[/{materialId}]
//! entity/productionstagecompletion/{id}/products[/{productId}]
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::capabilities::HasEndpoint;
use crate::rest::resources::common::{
    Employee, Group, HasMeta, Meta, MetaArray, MetaWrapper, Timestamp,
};
use crate::rest::service::{impl_capabilities, impl_entity};
use crate::rest::{EntityService, Params, ResourceError, ResourceResponse};

/// Material consumed by a stage completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionStageCompletionMaterial {
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

    /// Quantity consumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_quantity: Option<f64>,

    /// Serial numbers. The quantity follows their count for serial-tracked goods.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub things: Vec<String>,
}

/// Goods produced by the last stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionStageCompletionResult {
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

    /// Quantity produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produced_quantity: Option<f64>,

    /// Serial numbers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub things: Vec<String>,
}

crate::rest::resources::common::impl_has_meta!(
    ProductionStageCompletionMaterial,
    ProductionStageCompletionResult
);

impl ProductionStageCompletionMaterial {
    #[must_use]
    pub fn new(assortment: &impl HasMeta, consumed_quantity: f64) -> Self {
        Self {
            assortment: assortment.meta().cloned().map(MetaWrapper::from),
            consumed_quantity: Some(consumed_quantity),
            ..Default::default()
        }
    }

    pub fn add_thing(&mut self, serial: impl Into<String>) -> &mut Self {
        self.things.push(serial.into());
        self
    }
}

impl ProductionStageCompletionResult {
    #[must_use]
    pub fn new(assortment: &impl HasMeta, produced_quantity: f64) -> Self {
        Self {
            assortment: assortment.meta().cloned().map(MetaWrapper::from),
            produced_quantity: Some(produced_quantity),
            ..Default::default()
        }
    }
}

/// Completion of one production stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionStageCompletion {
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

    /// Completion date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moment: Option<Timestamp>,

    /// Stage of the production task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_stage: Option<MetaWrapper>,

    /// Volume produced by this completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_volume: Option<f64>,

    /// Labour cost per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labour_unit_cost: Option<f64>,

    /// Processing cost per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_unit_cost: Option<f64>,

    /// Employee who did the work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Employee>,

    /// Materials consumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials: Option<MetaArray<ProductionStageCompletionMaterial>>,

    /// Present on the last stage only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<MetaArray<ProductionStageCompletionResult>>,

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

impl_entity!(
    ProductionStageCompletion,
    "ProductionStageCompletion",
    "entity/productionstagecompletion",
    ProductionStageCompletion
);

impl_capabilities!(ProductionStageCompletion:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany,
);

impl ProductionStageCompletion {
    pub fn set_production_stage(&mut self, stage: &impl HasMeta) -> &mut Self {
        self.production_stage = stage.meta().cloned().map(MetaWrapper::from);
        self
    }

    pub fn set_production_volume(&mut self, volume: f64) -> &mut Self {
        self.production_volume = Some(volume);
        self
    }

    pub fn set_performer(&mut self, performer: &Employee) -> &mut Self {
        self.performer = Some(performer.clean());
        self
    }

    pub fn set_labour_unit_cost(&mut self, cost: f64) -> &mut Self {
        self.labour_unit_cost = Some(cost);
        self
    }

    pub fn add_material(&mut self, material: ProductionStageCompletionMaterial) -> &mut Self {
        self.materials
            .get_or_insert_with(MetaArray::default)
            .push(material);
        self
    }

    pub fn add_product(&mut self, product: ProductionStageCompletionResult) -> &mut Self {
        self.products
            .get_or_insert_with(MetaArray::default)
            .push(product);
        self
    }
}

impl EntityService<ProductionStageCompletion> {
    /// Lists consumed materials.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_materials(
        &self,
        id: Uuid,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<MetaArray<ProductionStageCompletionMaterial>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(endpoint.path().id(id).segment("materials"))
            .params(params)
            .get()
            .await
    }

    /// Adds a consumed material.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn create_material(
        &self,
        id: Uuid,
        material: &ProductionStageCompletionMaterial,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<ProductionStageCompletionMaterial>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(endpoint.path().id(id).segment("materials"))
            .params(params)
            .post(material)
            .await
    }

    /// Updates a consumed material.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn update_material(
        &self,
        id: Uuid,
        material_id: Uuid,
        material: &ProductionStageCompletionMaterial,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<ProductionStageCompletionMaterial>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(endpoint.path().id(id).segment("materials").id(material_id))
            .params(params)
            .put(material)
            .await
    }

    /// Lists produced goods.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_products(
        &self,
        id: Uuid,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<MetaArray<ProductionStageCompletionResult>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(endpoint.path().id(id).segment("products"))
            .params(params)
            .get()
            .await
    }

    /// Updates a produced item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn update_product(
        &self,
        id: Uuid,
        product_id: Uuid,
        product: &ProductionStageCompletionResult,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<ProductionStageCompletionResult>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(endpoint.path().id(id).segment("products").id(product_id))
            .params(params)
            .put(product)
            .await
    }
}
