//! Additional fields (`attributes`) attached to entities.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::meta::{impl_has_meta, Meta};

/// Value type of an additional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Long,
    Time,
    File,
    Double,
    Boolean,
    Text,
    Link,
    CustomEntity,
    Counterparty,
    Employee,
    Contract,
    Project,
    Organization,
    Store,
    Product,
    #[serde(other)]
    Unknown,
}

/// An additional field definition, or its value on an entity.
///
/// Definitions live under `{entity}/metadata/attributes`. On entities the
/// same object carries a `value` whose JSON shape depends on the type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// Field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Value type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<AttributeType>,

    /// Field value; a scalar, or `{"meta": ...}` for reference types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Whether a value is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Whether the field is shown in the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,

    /// Field description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Dictionary meta for `customentity` fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_entity_meta: Option<Meta>,
}

impl_has_meta!(Attribute);

impl Attribute {
    /// Creates a field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            name: Some(name.into()),
            attribute_type: Some(attribute_type),
            ..Default::default()
        }
    }

    /// Sets the field name.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the field value.
    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    /// Marks the field as required.
    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.required = Some(required);
        self
    }

    /// Sets the field description.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attribute_definition_serializes_type() {
        let mut attribute = Attribute::new("Color", AttributeType::String);
        attribute.set_required(true);

        let value = serde_json::to_value(&attribute).unwrap();
        assert_eq!(value, json!({"name": "Color", "type": "string", "required": true}));
    }

    #[test]
    fn test_attribute_value_keeps_reference_shape() {
        let attribute: Attribute = serde_json::from_value(json!({
            "id": "0a5bfd63-b9f9-11ee-0a80-0ff10009fa34",
            "name": "Manager",
            "type": "employee",
            "value": {"meta": {"href": "https://example/entity/employee/1", "type": "employee"}}
        }))
        .unwrap();

        assert_eq!(attribute.attribute_type, Some(AttributeType::Employee));
        assert_eq!(attribute.value.unwrap()["meta"]["type"], "employee");
    }
}
