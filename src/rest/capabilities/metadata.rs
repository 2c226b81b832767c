//! Entity metadata: attributes, states, named filters, print templates and
//! settings.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::{meta_refs, HasEndpoint};
use crate::rest::resources::common::{
    Attribute, CustomTemplate, DeleteManyResult, EmbeddedTemplate, List, MetaArray, NamedFilter,
    State,
};
use crate::rest::{Params, ResourceError, ResourceResponse, ResourcePath};

fn metadata_path(endpoint: &crate::rest::Endpoint) -> ResourcePath {
    endpoint.path().segment("metadata")
}

/// `GET {uri}/metadata`
#[allow(async_fn_in_trait)]
pub trait Metadata: HasEndpoint {
    /// Shape of the metadata object for this endpoint.
    type Metadata: DeserializeOwned;

    /// Fetches the endpoint metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_metadata(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<Self::Metadata>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(metadata_path(endpoint)).params(params).get().await
    }
}

/// `{uri}/metadata/attributes`
#[allow(async_fn_in_trait)]
pub trait Attributes: HasEndpoint {
    /// Lists additional fields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_attributes(&self) -> Result<ResourceResponse<MetaArray<Attribute>>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("attributes");
        endpoint.request(path).get().await
    }

    /// Fetches one additional field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_attribute_by_id(
        &self,
        id: Uuid,
    ) -> Result<ResourceResponse<Attribute>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("attributes").id(id);
        endpoint.request(path).get().await
    }

    /// Creates one additional field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn create_attribute(
        &self,
        attribute: &Attribute,
    ) -> Result<ResourceResponse<Attribute>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("attributes");
        endpoint.request(path).post(attribute).await
    }

    /// Creates several additional fields.
    ///
    /// The server answers a one-element array with a bare object, so a
    /// single attribute is sent as an object and the reply wrapped back into
    /// a one-element `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn create_attributes(
        &self,
        attributes: &[Attribute],
    ) -> Result<ResourceResponse<Vec<Attribute>>, ResourceError> {
        if let [attribute] = attributes {
            let created = self.create_attribute(attribute).await?;
            return Ok(created.map(|attribute| vec![attribute]));
        }

        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("attributes");
        endpoint.request(path).post(attributes).await
    }

    /// Updates one additional field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn update_attribute(
        &self,
        id: Uuid,
        attribute: &Attribute,
    ) -> Result<ResourceResponse<Attribute>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("attributes").id(id);
        endpoint.request(path).put(attribute).await
    }

    /// Deletes one additional field.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer is an error.
    async fn delete_attribute(&self, id: Uuid) -> Result<ResourceResponse<bool>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("attributes").id(id);
        endpoint.request(path).delete().await
    }

    /// Deletes several additional fields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentity`] if an attribute has no
    /// meta, and [`ResourceError`] if the whole request fails.
    async fn delete_attributes(
        &self,
        attributes: &[Attribute],
    ) -> Result<ResourceResponse<Vec<DeleteManyResult>>, ResourceError> {
        let refs = meta_refs(attributes, "Attribute")?;
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("attributes").segment("delete");
        endpoint.request(path).post(&refs).await
    }
}

/// `{uri}/metadata/states`
#[allow(async_fn_in_trait)]
pub trait States: HasEndpoint {
    /// Fetches one workflow state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_state_by_id(&self, id: Uuid) -> Result<ResourceResponse<State>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("states").id(id);
        endpoint.request(path).get().await
    }

    /// Creates a workflow state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn create_state(&self, state: &State) -> Result<ResourceResponse<State>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("states");
        endpoint.request(path).post(state).await
    }

    /// Updates a workflow state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn update_state(
        &self,
        id: Uuid,
        state: &State,
    ) -> Result<ResourceResponse<State>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("states").id(id);
        endpoint.request(path).put(state).await
    }

    /// Creates and updates workflow states in one request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn create_update_states(
        &self,
        states: &[State],
    ) -> Result<ResourceResponse<Vec<State>>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("states");
        endpoint.request(path).post(states).await
    }

    /// Deletes a workflow state.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer is an error.
    async fn delete_state(&self, id: Uuid) -> Result<ResourceResponse<bool>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("states").id(id);
        endpoint.request(path).delete().await
    }
}

/// `{uri}/namedfilter`
#[allow(async_fn_in_trait)]
pub trait NamedFilters: HasEndpoint {
    /// Lists saved filters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn named_filters(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<NamedFilter>>, ResourceError> {
        let endpoint = self.endpoint();
        let path = endpoint.path().segment("namedfilter");
        endpoint.request(path).params(params).get().await
    }

    /// Fetches one saved filter.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn named_filter_by_id(
        &self,
        id: Uuid,
    ) -> Result<ResourceResponse<NamedFilter>, ResourceError> {
        let endpoint = self.endpoint();
        let path = endpoint.path().segment("namedfilter").id(id);
        endpoint.request(path).get().await
    }
}

/// `{uri}/metadata/embeddedtemplate` and `{uri}/metadata/customtemplate`
#[allow(async_fn_in_trait)]
pub trait PrintTemplates: HasEndpoint {
    /// Lists built-in print templates.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn embedded_templates(
        &self,
    ) -> Result<ResourceResponse<List<EmbeddedTemplate>>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("embeddedtemplate");
        endpoint.request(path).get().await
    }

    /// Fetches one built-in print template.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn embedded_template_by_id(
        &self,
        id: Uuid,
    ) -> Result<ResourceResponse<EmbeddedTemplate>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("embeddedtemplate").id(id);
        endpoint.request(path).get().await
    }

    /// Lists user-uploaded print templates.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn custom_templates(&self) -> Result<ResourceResponse<List<CustomTemplate>>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("customtemplate");
        endpoint.request(path).get().await
    }

    /// Fetches one user-uploaded print template.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn custom_template_by_id(
        &self,
        id: Uuid,
    ) -> Result<ResourceResponse<CustomTemplate>, ResourceError> {
        let endpoint = self.endpoint();
        let path = metadata_path(endpoint).segment("customtemplate").id(id);
        endpoint.request(path).get().await
    }
}

/// `{uri}/settings`
#[allow(async_fn_in_trait)]
pub trait Settings: HasEndpoint {
    /// Shape of the settings object for this endpoint.
    type Settings: Serialize + DeserializeOwned + Sync;

    /// Fetches the endpoint settings.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_settings(&self) -> Result<ResourceResponse<Self::Settings>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(endpoint.path().segment("settings")).get().await
    }

    /// Updates the endpoint settings.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn update_settings(
        &self,
        settings: &Self::Settings,
    ) -> Result<ResourceResponse<Self::Settings>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(endpoint.path().segment("settings"))
            .put(settings)
            .await
    }
}
