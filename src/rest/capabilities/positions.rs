//! Document operations: positions with their tracking codes, audit and
//! print export.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::{fetch_all, meta_refs, HasEndpoint};
use crate::rest::resources::common::{
    AuditEvent, DeleteManyResult, ExportRequest, HasMeta, List, MetaArray, PrintFile,
    TrackingCode,
};
use crate::rest::{Params, ResourceError, ResourcePath, ResourceResponse};

fn positions_path(endpoint: &crate::rest::Endpoint, id: Uuid) -> ResourcePath {
    endpoint.path().id(id).segment("positions")
}

fn tracking_codes_path(endpoint: &crate::rest::Endpoint, id: Uuid, position_id: Uuid) -> ResourcePath {
    positions_path(endpoint, id).id(position_id).segment("trackingCodes")
}

/// `{uri}/{id}/positions`
#[allow(async_fn_in_trait)]
pub trait Positions: HasEndpoint {
    /// Position type of the document.
    type Position: HasMeta + Serialize + DeserializeOwned + Sync;

    /// Fetches one page of positions.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_positions(
        &self,
        id: Uuid,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<MetaArray<Self::Position>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(positions_path(endpoint, id))
            .params(params)
            .get()
            .await
    }

    /// Fetches every position of a document, page by page.
    ///
    /// # Errors
    ///
    /// Fails on the first page that fails.
    async fn get_positions_all(
        &self,
        id: Uuid,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<Vec<Self::Position>>, ResourceError> {
        let endpoint = self.endpoint();
        let path = positions_path(endpoint, id);
        fetch_all(endpoint, path.as_str(), params).await
    }

    /// Fetches one position.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_position_by_id(
        &self,
        id: Uuid,
        position_id: Uuid,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<Self::Position>, ResourceError> {
        let endpoint = self.endpoint();
        let path = positions_path(endpoint, id).id(position_id);
        endpoint.request(path).params(params).get().await
    }

    /// Adds one position.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn create_position(
        &self,
        id: Uuid,
        position: &Self::Position,
    ) -> Result<ResourceResponse<Self::Position>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(positions_path(endpoint, id)).post(position).await
    }

    /// Adds several positions in one request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn create_positions(
        &self,
        id: Uuid,
        positions: &[Self::Position],
    ) -> Result<ResourceResponse<Vec<Self::Position>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(positions_path(endpoint, id)).post(positions).await
    }

    /// Updates one position.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn update_position(
        &self,
        id: Uuid,
        position_id: Uuid,
        position: &Self::Position,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<Self::Position>, ResourceError> {
        let endpoint = self.endpoint();
        let path = positions_path(endpoint, id).id(position_id);
        endpoint.request(path).params(params).put(position).await
    }

    /// Removes one position.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer is an error.
    async fn delete_position(
        &self,
        id: Uuid,
        position_id: Uuid,
    ) -> Result<ResourceResponse<bool>, ResourceError> {
        let endpoint = self.endpoint();
        let path = positions_path(endpoint, id).id(position_id);
        endpoint.request(path).delete().await
    }

    /// Removes several positions.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentity`] if a position has no meta.
    async fn delete_positions(
        &self,
        id: Uuid,
        positions: &[Self::Position],
    ) -> Result<ResourceResponse<Vec<DeleteManyResult>>, ResourceError> {
        let refs = meta_refs(positions, "Position")?;
        let endpoint = self.endpoint();
        let path = positions_path(endpoint, id).segment("delete");
        endpoint.request(path).post(&refs).await
    }

    /// Lists tracking codes of a position.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_tracking_codes(
        &self,
        id: Uuid,
        position_id: Uuid,
    ) -> Result<ResourceResponse<MetaArray<TrackingCode>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(tracking_codes_path(endpoint, id, position_id))
            .get()
            .await
    }

    /// Creates and updates tracking codes of a position.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn create_update_tracking_codes(
        &self,
        id: Uuid,
        position_id: Uuid,
        codes: &[TrackingCode],
    ) -> Result<ResourceResponse<Vec<TrackingCode>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(tracking_codes_path(endpoint, id, position_id))
            .post(codes)
            .await
    }

    /// Deletes tracking codes of a position.
    ///
    /// Codes are matched by value, so they need no meta.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn delete_tracking_codes(
        &self,
        id: Uuid,
        position_id: Uuid,
        codes: &[TrackingCode],
    ) -> Result<ResourceResponse<Vec<DeleteManyResult>>, ResourceError> {
        let endpoint = self.endpoint();
        let path = tracking_codes_path(endpoint, id, position_id).segment("delete");
        endpoint.request(path).post(codes).await
    }
}

/// `GET {uri}/{id}/audit`
#[allow(async_fn_in_trait)]
pub trait Audit: HasEndpoint {
    /// Lists audit events of an entity.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn audit(
        &self,
        id: Uuid,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<AuditEvent>>, ResourceError> {
        let endpoint = self.endpoint();
        let path = endpoint.path().id(id).segment("audit");
        endpoint.request(path).params(params).get().await
    }
}

/// `POST {uri}/{id}/export`
#[allow(async_fn_in_trait)]
pub trait Export: HasEndpoint {
    /// Renders a document with a print template and downloads the file.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport and API errors.
    async fn export(
        &self,
        id: Uuid,
        request: &ExportRequest,
    ) -> Result<ResourceResponse<PrintFile>, ResourceError> {
        let endpoint = self.endpoint();
        let path = endpoint.path().id(id).segment("export");
        endpoint.request(path).post_content(request).await
    }
}
