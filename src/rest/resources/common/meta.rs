//! Entity metadata: the self-describing reference attached to every object.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type tag carried in `meta.type`.
///
/// Only types this crate models are listed. Anything else decodes to
/// [`MetaType::Unknown`] holding the original tag, which is written back
/// unchanged.
///
/// # Example
///
/// ```rust
/// use moysklad::rest::resources::common::MetaType;
///
/// let json = serde_json::to_string(&MetaType::CustomerOrder).unwrap();
/// assert_eq!(json, "\"customerorder\"");
///
/// let unknown: MetaType = serde_json::from_str("\"paymentin\"").unwrap();
/// assert_eq!(unknown, MetaType::Unknown("paymentin".to_string()));
/// assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"paymentin\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaType {
    // Documents
    CustomerOrder,
    CustomerOrderPosition,
    InvoiceOut,
    #[serde(rename = "invoiceposition")]
    InvoicePosition,
    PaymentOut,
    CashOut,
    FactureOut,
    InternalOrder,
    InternalOrderPosition,
    Enter,
    EnterPosition,
    RetailSalesReturn,
    RetailSalesReturnPosition,
    CounterpartyAdjustment,
    ProductionStageCompletion,
    ProductionStageCompletionMaterial,
    ProductionStageCompletionResult,

    // Dictionaries
    Contract,
    Counterparty,
    ContactPerson,
    Product,
    Variant,
    Service,
    Bundle,
    Consignment,
    ProductFolder,
    Project,
    Uom,
    Thing,
    CustomEntity,
    Task,
    TaskNote,
    Note,
    Discount,
    AccumulationDiscount,
    PersonalDiscount,
    SpecialPriceDiscount,
    BonusProgram,
    Webhook,

    // Company structure
    Organization,
    Employee,
    Group,
    Store,
    Currency,
    SalesChannel,
    Country,
    Region,
    Account,

    // Metadata and attachments
    State,
    AttributeMetadata,
    Files,
    Image,
    #[serde(rename = "operationpublication")]
    Publication,
    EmbeddedTemplate,
    CustomTemplate,
    NamedFilter,
    TrackingCode,
    AuditEvent,
    Async,

    // Reports
    Dashboard,
    StockAll,
    StockByStore,
    SalesPlotSeries,
    OrdersPlotSeries,
    #[serde(rename = "salesbyproduct")]
    ProfitByProduct,
    #[serde(rename = "salesbyvariant")]
    ProfitByVariant,
    #[serde(rename = "salesbyemployee")]
    ProfitByEmployee,
    #[serde(rename = "salesbycounterparty")]
    ProfitByCounterparty,
    #[serde(rename = "salesbysaleschannel")]
    ProfitBySalesChannel,

    /// A type this crate does not model, with its wire tag.
    #[serde(untagged)]
    Unknown(String),
}

/// Self-describing reference to an object.
///
/// The same struct describes single objects (`href`, `type`) and collections
/// (`size`, `limit`, `offset`, `nextHref`). Every field is optional on the
/// wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Canonical API URL of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// URL of the object type's metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_href: Option<String>,

    /// Object type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub meta_type: Option<MetaType>,

    /// Media type of the referenced document, usually `application/json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Web UI URL of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid_href: Option<String>,

    /// Download URL for files and images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_href: Option<String>,

    /// Total number of rows in a collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Page size used for a collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Offset of the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// URL of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_href: Option<String>,

    /// URL of the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_href: Option<String>,
}

impl Meta {
    /// Creates a reference meta for an object.
    #[must_use]
    pub fn new(href: impl Into<String>, meta_type: MetaType) -> Self {
        Self {
            href: Some(href.into()),
            meta_type: Some(meta_type),
            media_type: Some("application/json".to_string()),
            ..Default::default()
        }
    }

    /// Returns the object id parsed from the last segment of `href`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use moysklad::rest::resources::common::{Meta, MetaType};
    ///
    /// let meta = Meta::new(
    ///     "https://api.moysklad.ru/api/remap/1.2/entity/uom/19f1edc0-fc42-4001-94cb-c9ec9c62ec10?expand=group",
    ///     MetaType::Uom,
    /// );
    /// assert_eq!(
    ///     meta.id().unwrap().to_string(),
    ///     "19f1edc0-fc42-4001-94cb-c9ec9c62ec10"
    /// );
    /// ```
    #[must_use]
    pub fn id(&self) -> Option<Uuid> {
        let href = self.href.as_deref()?;
        let path = href.split(['?', '#']).next()?;
        let last = path.trim_end_matches('/').rsplit('/').next()?;
        Uuid::parse_str(last).ok()
    }

    /// Wraps the meta for places where the API expects `{"meta": {...}}`.
    #[must_use]
    pub fn wrap(self) -> MetaWrapper {
        MetaWrapper { meta: self }
    }
}

/// An object that carries a [`Meta`].
///
/// `clean()` returns a copy holding only the meta. Setters that take another
/// object store its clean copy, so request bodies reference related objects
/// instead of re-sending them in full.
pub trait HasMeta {
    /// Returns the object's meta, if known.
    fn meta(&self) -> Option<&Meta>;

    /// Returns a copy reduced to its meta.
    #[must_use]
    fn clean(&self) -> Self
    where
        Self: Sized;
}

/// Implements [`HasMeta`] for structs with a `meta: Option<Meta>` field and
/// a `Default` impl.
macro_rules! impl_has_meta {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::rest::resources::common::HasMeta for $ty {
                fn meta(&self) -> Option<&$crate::rest::resources::common::Meta> {
                    self.meta.as_ref()
                }

                fn clean(&self) -> Self {
                    Self {
                        meta: self.meta.clone(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

pub(crate) use impl_has_meta;

/// A bare `{"meta": {...}}` object.
///
/// Used for references the crate does not model in full and as the element
/// type of bulk delete requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaWrapper {
    /// The wrapped meta.
    #[serde(default)]
    pub meta: Meta,
}

impl From<Meta> for MetaWrapper {
    fn from(meta: Meta) -> Self {
        meta.wrap()
    }
}

impl HasMeta for MetaWrapper {
    fn meta(&self) -> Option<&Meta> {
        Some(&self.meta)
    }

    fn clean(&self) -> Self {
        self.clone()
    }
}

/// A reference with the object's display name, as returned by reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaName {
    /// Object meta.
    #[serde(default)]
    pub meta: Meta,

    /// Object name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meta_serializes_camel_case_and_skips_unset() {
        let meta = Meta::new(
            "https://api.moysklad.ru/api/remap/1.2/entity/product/7944ef04-f831-11e5-7a69-971500188b19",
            MetaType::Product,
        );

        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["type"], "product");
        assert_eq!(value["mediaType"], "application/json");
        assert!(value.get("size").is_none());
        assert!(value.get("uuidHref").is_none());
    }

    #[test]
    fn test_meta_deserializes_collection_meta() {
        let meta: Meta = serde_json::from_value(json!({
            "href": "https://api.moysklad.ru/api/remap/1.2/entity/uom",
            "type": "uom",
            "mediaType": "application/json",
            "size": 2150,
            "limit": 1000,
            "offset": 0,
            "nextHref": "https://api.moysklad.ru/api/remap/1.2/entity/uom?offset=1000"
        }))
        .unwrap();

        assert_eq!(meta.meta_type, Some(MetaType::Uom));
        assert_eq!(meta.size, Some(2150));
        assert!(meta.next_href.is_some());
    }

    #[test]
    fn test_meta_type_renames() {
        assert_eq!(
            serde_json::to_value(MetaType::Publication).unwrap(),
            "operationpublication"
        );
        assert_eq!(
            serde_json::to_value(MetaType::InvoicePosition).unwrap(),
            "invoiceposition"
        );
        assert_eq!(
            serde_json::to_value(MetaType::ProfitByProduct).unwrap(),
            "salesbyproduct"
        );
        assert_eq!(
            serde_json::to_value(MetaType::RetailSalesReturn).unwrap(),
            "retailsalesreturn"
        );
    }

    #[test]
    fn test_meta_id_missing_or_invalid() {
        assert!(Meta::default().id().is_none());
        let meta = Meta::new("https://api.moysklad.ru/api/remap/1.2/entity/uom/metadata", MetaType::Uom);
        assert!(meta.id().is_none());
    }

    #[test]
    fn test_unlisted_meta_type_is_written_back_unchanged() {
        let source = json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/paymentin/4b3a8c5e-5c2b-11ee-0a80-08b300087a61",
                "type": "paymentin",
                "mediaType": "application/json"
            }
        });

        let wrapper: MetaWrapper = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(
            wrapper.meta.meta_type,
            Some(MetaType::Unknown("paymentin".to_string()))
        );
        assert_eq!(serde_json::to_value(&wrapper).unwrap(), source);
    }

    #[test]
    fn test_listed_meta_type_is_not_unknown() {
        let meta_type: MetaType = serde_json::from_str("\"customerorder\"").unwrap();
        assert_eq!(meta_type, MetaType::CustomerOrder);
    }

    #[test]
    fn test_meta_wrapper_shape() {
        let wrapper = Meta::new("https://example/entity/uom/1", MetaType::Uom).wrap();
        let value = serde_json::to_value(&wrapper).unwrap();
        assert_eq!(value["meta"]["type"], "uom");
    }
}
