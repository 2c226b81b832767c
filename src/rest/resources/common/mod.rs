//! Wire types shared by every MoySklad entity.
//!
//! # Overview
//!
//! - [`Meta`] / [`HasMeta`]: the self-describing reference on every object
//! - [`Nullable`]: three-state fields (unset, null, value)
//! - [`List`] / [`MetaArray`]: collection envelopes
//! - [`Timestamp`]: MoySklad date-time format
//! - Attachments: [`Attribute`], [`File`], [`Image`], [`State`], [`Publication`],
//!   [`TrackingCode`], [`AgentAccount`], [`Note`]
//! - Job and bulk results: [`AsyncStatus`], [`DeleteManyResult`]

mod account;
mod async_status;
mod attribute;
mod audit;
mod delete_many;
mod list;
mod media;
mod meta;
mod metadata;
mod note;
mod nullable;
mod publication;
mod references;
mod state;
mod timestamp;
mod tracking_code;

pub(crate) use meta::impl_has_meta;

pub use account::AgentAccount;
pub use async_status::{AsyncState, AsyncStatus};
pub use attribute::{Attribute, AttributeType};
pub use audit::{AuditEvent, NamedFilter};
pub use delete_many::DeleteManyResult;
pub use list::{Context, List, MetaArray};
pub use media::{File, Image};
pub use meta::{HasMeta, Meta, MetaName, MetaType, MetaWrapper};
pub use metadata::EntityMetadata;
pub use note::Note;
pub use nullable::Nullable;
pub use publication::{
    CustomTemplate, EmbeddedTemplate, ExportRequest, ExportTemplate, PrintFile, Publication,
};
pub use references::{Currency, Employee, Group, Organization, Rate, SalesChannel, Store};
pub use state::{State, StateType};
pub use timestamp::Timestamp;
pub use tracking_code::{TrackingCode, TrackingCodeType};
