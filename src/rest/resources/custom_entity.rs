//! User-defined dictionaries (`entity/customentity`) and their elements.
//!
//! A dictionary is addressed by its own id; its elements live directly
//! under it:
//!
//! ```text
//! entity/customentity/{id}
//! entity/customentity/{id}/{elementId}
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::capabilities::HasEndpoint;
use crate::rest::resources::common::{Employee, Group, List, Meta, Timestamp};
use crate::rest::service::{impl_capabilities, impl_entity};
use crate::rest::{EntityService, Params, ResourceError, ResourceResponse};

/// A user-defined dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntity {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    // --- Read-only fields ---
    /// Object id.
    #[serde(skip_serializing)]
    pub id: Option<Uuid>,

    // --- Writable fields ---
    /// Element name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl_entity!(CustomEntity, "CustomEntity", "entity/customentity", CustomEntity);

impl_capabilities!(CustomEntity: Create, Update, Delete);

impl CustomEntity {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// An element of a user-defined dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntityElement {
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
    /// Element name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Element code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Code in an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,

    /// Free-text comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

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

crate::rest::resources::common::impl_has_meta!(CustomEntityElement);

impl CustomEntityElement {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn set_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.code = Some(code.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }
}

impl EntityService<CustomEntity> {
    /// Lists the elements of a dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_elements(
        &self,
        id: Uuid,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<CustomEntityElement>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(endpoint.path().id(id))
            .params(params)
            .get()
            .await
    }

    /// Fetches one element.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_element_by_id(
        &self,
        id: Uuid,
        element_id: Uuid,
    ) -> Result<ResourceResponse<CustomEntityElement>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(endpoint.path().id(id).id(element_id))
            .get()
            .await
    }

    /// Adds an element to a dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn create_element(
        &self,
        id: Uuid,
        element: &CustomEntityElement,
    ) -> Result<ResourceResponse<CustomEntityElement>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(endpoint.path().id(id)).post(element).await
    }

    /// Updates an element.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn update_element(
        &self,
        id: Uuid,
        element_id: Uuid,
        element: &CustomEntityElement,
    ) -> Result<ResourceResponse<CustomEntityElement>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(endpoint.path().id(id).id(element_id))
            .put(element)
            .await
    }

    /// Deletes an element. Yields `true` on 204.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport and API errors, 404 included.
    pub async fn delete_element(
        &self,
        id: Uuid,
        element_id: Uuid,
    ) -> Result<ResourceResponse<bool>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(endpoint.path().id(id).id(element_id))
            .delete()
            .await
    }
}
