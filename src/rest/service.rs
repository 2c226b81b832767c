//! Generic entity service.
//!
//! Every MoySklad entity is served by the same [`EntityService<E>`]. The
//! entity type describes itself through [`Entity`] (name, URI, meta type),
//! and the service gains operations by implementing the capability traits
//! from [`crate::rest::capabilities`] that the remote resource supports.
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::rest::capabilities::{Create, GetList};
//! use moysklad::rest::resources::Uom;
//!
//! let uoms = moysklad.uom();
//! let list = uoms.get_list(None).await?;
//!
//! let mut uom = Uom::default();
//! uom.set_name("box").set_code("box-1");
//! let created = uoms.create(&uom, None).await?;
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::clients::RestClient;
use crate::rest::capabilities::HasEndpoint;
use crate::rest::resources::common::{HasMeta, MetaType};
use crate::rest::Endpoint;

/// Descriptor of a remote entity type.
pub trait Entity: HasMeta + Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Endpoint URI, such as `entity/uom`.
    const PATH: &'static str;

    /// Meta type tag.
    const META_TYPE: MetaType;

    /// Server-assigned id, once known.
    fn id(&self) -> Option<Uuid>;

    /// Caller-assigned synchronization id, for entities that have one.
    fn sync_id(&self) -> Option<Uuid> {
        None
    }
}

/// Implements [`Entity`] and [`HasMeta`] for an entity struct.
///
/// The struct needs `meta: Option<Meta>` and `id: Option<Uuid>` fields, plus
/// `sync_id: Option<Uuid>` when declared with `sync_id`.
macro_rules! impl_entity {
    ($ty:ty, $name:literal, $path:literal, $meta_type:ident) => {
        $crate::rest::resources::common::impl_has_meta!($ty);

        impl $crate::rest::Entity for $ty {
            const NAME: &'static str = $name;
            const PATH: &'static str = $path;
            const META_TYPE: $crate::rest::resources::common::MetaType =
                $crate::rest::resources::common::MetaType::$meta_type;

            fn id(&self) -> Option<::uuid::Uuid> {
                self.id
            }
        }
    };
    ($ty:ty, $name:literal, $path:literal, $meta_type:ident, sync_id) => {
        $crate::rest::resources::common::impl_has_meta!($ty);

        impl $crate::rest::Entity for $ty {
            const NAME: &'static str = $name;
            const PATH: &'static str = $path;
            const META_TYPE: $crate::rest::resources::common::MetaType =
                $crate::rest::resources::common::MetaType::$meta_type;

            fn id(&self) -> Option<::uuid::Uuid> {
                self.id
            }

            fn sync_id(&self) -> Option<::uuid::Uuid> {
                self.sync_id
            }
        }
    };
}

pub(crate) use impl_entity;

/// Implements capability traits for `EntityService<E>`.
///
/// ```rust,ignore
/// impl_capabilities!(Uom: GetList, GetById, Create, Update, Delete);
/// ```
macro_rules! impl_capabilities {
    ($entity:ty: $($capability:ident),+ $(,)?) => {
        $(
            impl $crate::rest::capabilities::$capability
                for $crate::rest::EntityService<$entity> {}
        )+
    };
}

pub(crate) use impl_capabilities;

/// Service for one entity type.
///
/// Operations come from the capability traits implemented for the
/// concrete `EntityService<E>`.
pub struct EntityService<E> {
    endpoint: Endpoint,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityService<E> {
    /// Creates the service at the entity's endpoint.
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self::with_uri(client, E::PATH)
    }

    /// Creates the service at a custom URI.
    #[must_use]
    pub fn with_uri(client: RestClient, uri: impl Into<String>) -> Self {
        Self {
            endpoint: Endpoint::new(client, uri),
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> fmt::Debug for EntityService<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityService")
            .field("uri", &self.endpoint.uri())
            .finish()
    }
}

impl<E> HasEndpoint for EntityService<E> {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl<E: Entity> crate::rest::capabilities::EntityEndpoint for EntityService<E> {
    type Entity = E;
}

// Verify EntityService is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EntityService<serde_json::Value>>();
};
