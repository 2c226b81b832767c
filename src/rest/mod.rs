//! REST resource layer for the MoySklad JSON API.
//!
//! This module sits on top of [`RestClient`](crate::clients::RestClient) and
//! provides:
//!
//! - **[`Params`]**: query directives (filter, order, paging, expand, report options)
//! - **[`RequestBuilder`]**: one request, one HTTP call, typed decoding
//! - **[`ResourceResponse<T>`]**: a Deref-based wrapper keeping the raw response
//! - **[`EntityService<E>`]**: the generic service every entity is served by
//! - **[`capabilities`]**: one trait per operation family
//! - **[`AsyncTask<T>`]**: server-side jobs (`check`, `result`, `cancel`)
//! - **[`ResourceError`]**: semantic errors of the layer
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::rest::capabilities::{Delete, GetList};
//! use moysklad::rest::Params;
//!
//! let orders = moysklad.customer_order();
//!
//! // One page
//! let page = orders.get_list(Some(&Params::new().limit(10))).await?;
//! println!("{} of {}", page.rows.len(), page.total());
//!
//! // Every page, 1000 rows per request
//! let all = orders.get_list_all(None).await?;
//!
//! // Delete answers true on 204; 404 is an error
//! let deleted = *orders.delete(all[0].id.unwrap()).await?;
//! ```

mod async_task;
mod endpoint;
mod errors;
mod params;
mod path;
mod request;
mod response;
mod service;

pub mod capabilities;
pub mod resources;

pub use async_task::{AsyncService, AsyncTask};
pub use endpoint::Endpoint;
pub use errors::ResourceError;
pub use params::{
    Direction, FilterOperator, GroupBy, Interval, Params, StockMode, StockType, MAX_LIMIT,
    MAX_LIMIT_WITH_EXPAND,
};
pub use path::ResourcePath;
pub use request::{RequestBuilder, HEADER_GET_CONTENT};
pub use response::ResourceResponse;
pub use service::{Entity, EntityService};
