//! Entity type metadata (`{entity}/metadata`).

use serde::{Deserialize, Serialize};

use super::attribute::Attribute;
use super::list::MetaArray;
use super::meta::Meta;
use super::state::State;

/// Metadata of an entity type: additional fields, states and sharing.
///
/// Entities without states or attributes return the subset they support.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    /// Object meta.
    #[serde(default)]
    pub meta: Meta,

    /// Additional field definitions.
    #[serde(default)]
    pub attributes: MetaArray<Attribute>,

    /// Workflow statuses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<State>,

    /// Whether new objects are shared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_shared: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_with_collapsed_attributes() {
        let metadata: EntityMetadata = serde_json::from_value(json!({
            "meta": {"href": "https://example/entity/customerorder/metadata", "mediaType": "application/json"},
            "attributes": {"meta": {"href": "https://example/entity/customerorder/metadata/attributes", "size": 4}},
            "states": [{"name": "New", "color": 15_106_183, "stateType": "Regular"}],
            "createShared": false
        }))
        .unwrap();

        assert_eq!(metadata.attributes.size(), 4);
        assert!(metadata.attributes.is_empty());
        assert_eq!(metadata.states[0].name.as_deref(), Some("New"));
        assert_eq!(metadata.create_shared, Some(false));
    }
}
