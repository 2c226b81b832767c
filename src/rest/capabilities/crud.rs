//! List, read, write and delete operations on an entity endpoint.

use uuid::Uuid;

use super::{fetch_all, meta_refs, EntityEndpoint};
use crate::rest::resources::common::{DeleteManyResult, List};
use crate::rest::{Entity, Params, ResourceError, ResourceResponse};

/// `GET {uri}`: one page, or every page.
#[allow(async_fn_in_trait)]
pub trait GetList: EntityEndpoint {
    /// Fetches one page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_list(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<Self::Entity>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(endpoint.uri()).params(params).get().await
    }

    /// Fetches every page and concatenates the rows in order.
    ///
    /// The returned response is the one of the last page.
    ///
    /// # Errors
    ///
    /// Fails on the first page that fails; rows fetched so far are dropped.
    async fn get_list_all(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<Vec<Self::Entity>>, ResourceError> {
        let endpoint = self.endpoint();
        fetch_all(endpoint, endpoint.uri(), params).await
    }
}

/// `GET {uri}/{id}`
#[allow(async_fn_in_trait)]
pub trait GetById: EntityEndpoint {
    /// Fetches one entity.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors; a
    /// missing entity is an API error with status 404.
    async fn get_by_id(
        &self,
        id: Uuid,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<Self::Entity>, ResourceError> {
        let endpoint = self.endpoint();
        let path = endpoint.path().id(id);
        endpoint.request(path).params(params).get().await
    }
}

/// `POST {uri}`
#[allow(async_fn_in_trait)]
pub trait Create: EntityEndpoint {
    /// Creates an entity and returns it as stored by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn create(
        &self,
        entity: &Self::Entity,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<Self::Entity>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(endpoint.uri()).params(params).post(entity).await
    }
}

/// `POST {uri}` with an array.
#[allow(async_fn_in_trait)]
pub trait CreateUpdateMany: EntityEndpoint {
    /// Creates and updates entities in one request.
    ///
    /// Items carrying a `meta` update the referenced entity; the rest are
    /// created. The result holds one entity per input, in order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn create_update_many(
        &self,
        entities: &[Self::Entity],
        params: Option<&Params>,
    ) -> Result<ResourceResponse<Vec<Self::Entity>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(endpoint.uri()).params(params).post(entities).await
    }
}

/// `PUT {uri}/{id}`
#[allow(async_fn_in_trait)]
pub trait Update: EntityEndpoint {
    /// Updates the fields set on `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn update(
        &self,
        id: Uuid,
        entity: &Self::Entity,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<Self::Entity>, ResourceError> {
        let endpoint = self.endpoint();
        let path = endpoint.path().id(id);
        endpoint.request(path).params(params).put(entity).await
    }
}

/// `DELETE {uri}/{id}`
#[allow(async_fn_in_trait)]
pub trait Delete: EntityEndpoint {
    /// Deletes an entity permanently.
    ///
    /// Yields `true` when the server answers 204.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer, including 404, is an error.
    async fn delete(&self, id: Uuid) -> Result<ResourceResponse<bool>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(endpoint.path().id(id)).delete().await
    }

    /// Deletes an entity by its own id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentity`] if the entity has no id,
    /// plus the errors of [`delete`](Self::delete).
    async fn delete_entity(
        &self,
        entity: &Self::Entity,
    ) -> Result<ResourceResponse<bool>, ResourceError> {
        let id = entity.id().ok_or(ResourceError::MissingIdentity {
            resource: <Self::Entity as Entity>::NAME,
        })?;
        self.delete(id).await
    }
}

/// `POST {uri}/delete`
#[allow(async_fn_in_trait)]
pub trait DeleteMany: EntityEndpoint {
    /// Deletes several entities in one request.
    ///
    /// Items fail independently: the result holds one
    /// [`DeleteManyResult`] per input, in order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentity`] if an entity has no meta,
    /// and [`ResourceError`] if the whole request fails.
    async fn delete_many(
        &self,
        entities: &[Self::Entity],
    ) -> Result<ResourceResponse<Vec<DeleteManyResult>>, ResourceError> {
        let refs = meta_refs(entities, <Self::Entity as Entity>::NAME)?;
        let endpoint = self.endpoint();
        endpoint
            .request(endpoint.path().segment("delete"))
            .post(&refs)
            .await
    }
}

/// `{uri}/syncid/{syncId}`
#[allow(async_fn_in_trait)]
pub trait SyncId: EntityEndpoint {
    /// Fetches an entity by its synchronization id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_by_sync_id(
        &self,
        sync_id: Uuid,
    ) -> Result<ResourceResponse<Self::Entity>, ResourceError> {
        let endpoint = self.endpoint();
        let path = endpoint.path().segment("syncid").id(sync_id);
        endpoint.request(path).get().await
    }

    /// Deletes an entity by its synchronization id.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer is an error.
    async fn delete_by_sync_id(&self, sync_id: Uuid) -> Result<ResourceResponse<bool>, ResourceError> {
        let endpoint = self.endpoint();
        let path = endpoint.path().segment("syncid").id(sync_id);
        endpoint.request(path).delete().await
    }
}

/// `POST {uri}/{id}/trash`
#[allow(async_fn_in_trait)]
pub trait Trash: EntityEndpoint {
    /// Moves a document to the trash.
    ///
    /// Yields `true` when the server answers 200.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer is an error.
    async fn move_to_trash(&self, id: Uuid) -> Result<ResourceResponse<bool>, ResourceError> {
        let endpoint = self.endpoint();
        let path = endpoint.path().id(id).segment("trash");
        endpoint.request(path).post_expecting(200).await
    }
}

/// `PUT {uri}/new`
#[allow(async_fn_in_trait)]
pub trait Template: EntityEndpoint {
    /// Returns a new document prefilled with defaults. Nothing is saved.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn template(&self) -> Result<ResourceResponse<Self::Entity>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(endpoint.path().segment("new")).put_empty().await
    }

    /// Returns a new document prefilled from base documents.
    ///
    /// `base` names the documents, for example
    /// `{"customerOrder": {"meta": ...}}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn template_based_on<B: serde::Serialize + Sync>(
        &self,
        base: &B,
    ) -> Result<ResourceResponse<Self::Entity>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(endpoint.path().segment("new")).put(base).await
    }
}
