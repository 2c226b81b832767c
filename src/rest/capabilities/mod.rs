//! Capability traits.
//!
//! Each trait adds one family of operations to a service over its
//! [`Endpoint`]. All methods have default implementations, so a service opts
//! in with an empty `impl`. Only the capabilities the remote resource
//! supports are implemented.
//!
//! # Overview
//!
//! | Trait | Paths |
//! |---|---|
//! | [`GetList`] | `GET {uri}` |
//! | [`GetById`] | `GET {uri}/{id}` |
//! | [`Create`], [`CreateUpdateMany`] | `POST {uri}` |
//! | [`Update`] | `PUT {uri}/{id}` |
//! | [`Delete`] | `DELETE {uri}/{id}` |
//! | [`DeleteMany`] | `POST {uri}/delete` |
//! | [`SyncId`] | `{uri}/syncid/{syncId}` |
//! | [`Trash`] | `POST {uri}/{id}/trash` |
//! | [`Template`] | `PUT {uri}/new` |
//! | [`Metadata`], [`Attributes`], [`States`] | `{uri}/metadata[/attributes\|/states]` |
//! | [`NamedFilters`] | `{uri}/namedfilter` |
//! | [`PrintTemplates`] | `{uri}/metadata/{embedded,custom}template` |
//! | [`Settings`] | `{uri}/settings` |
//! | [`Files`], [`Images`], [`Publications`], [`Accounts`], [`Notes`] | `{uri}/{id}/{sub}` |
//! | [`Positions`] | `{uri}/{id}/positions[/{pid}/trackingCodes]` |
//! | [`Audit`] | `GET {uri}/{id}/audit` |
//! | [`Export`] | `POST {uri}/{id}/export` |

mod attachments;
mod crud;
mod metadata;
mod positions;

pub use attachments::{Accounts, Files, Images, Notes, Publications};
pub use crud::{
    Create, CreateUpdateMany, Delete, DeleteMany, GetById, GetList, SyncId, Template, Trash,
    Update,
};
pub use metadata::{Attributes, Metadata, NamedFilters, PrintTemplates, Settings, States};
pub use positions::{Audit, Export, Positions};

use serde::de::DeserializeOwned;

use crate::clients::HttpResponse;
use crate::rest::resources::common::{HasMeta, List, MetaWrapper};
use crate::rest::{Endpoint, Entity, Params, ResourceError, ResourceResponse};

/// A service bound to an [`Endpoint`].
pub trait HasEndpoint {
    /// Returns the service endpoint.
    fn endpoint(&self) -> &Endpoint;
}

/// A service whose endpoint serves one entity type.
pub trait EntityEndpoint: HasEndpoint {
    /// The served entity.
    type Entity: Entity;
}

/// Collects the metas of items for a bulk delete body.
///
/// Every item must already exist on the server.
pub(crate) fn meta_refs<T: HasMeta>(
    items: &[T],
    resource: &'static str,
) -> Result<Vec<MetaWrapper>, ResourceError> {
    items
        .iter()
        .map(|item| {
            item.meta()
                .cloned()
                .map(MetaWrapper::from)
                .ok_or(ResourceError::MissingIdentity { resource })
        })
        .collect()
}

/// Fetches every page of a list endpoint.
///
/// Starts at the caller's offset and pages by the caller's limit, or by the
/// largest page the server allows. Stops once the offset reaches the
/// reported total or a page comes back short, so `N` rows take
/// `max(1, ceil(N / limit))` requests.
pub(crate) async fn fetch_all<T: DeserializeOwned>(
    endpoint: &Endpoint,
    path: &str,
    params: Option<&Params>,
) -> Result<ResourceResponse<Vec<T>>, ResourceError> {
    let base = params.cloned().unwrap_or_default();
    let page_size = base.page_size().max(1);
    let mut offset = base.get_offset().unwrap_or(0);
    let mut rows = Vec::new();

    loop {
        let page_params = base.clone().limit(page_size).offset(offset);
        let page: ResourceResponse<List<T>> = endpoint
            .request(path)
            .params(Some(&page_params))
            .get()
            .await?;
        let (list, response): (List<T>, HttpResponse) = page.into_parts();

        let received = list.rows.len();
        let total = list.meta.size;
        tracing::debug!(path, offset, rows = received, total, "Fetched list page");

        rows.extend(list.rows);
        offset = offset.saturating_add(u32::try_from(received).unwrap_or(u32::MAX));

        let short_page = received < page_size as usize;
        let reached_total = total.map_or(false, |total| u64::from(offset) >= total);
        if short_page || reached_total {
            return Ok(ResourceResponse::new(rows, response));
        }
    }
}
