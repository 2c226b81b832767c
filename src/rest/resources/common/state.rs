//! Document workflow states (`metadata/states`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::meta::{impl_has_meta, Meta};

/// Kind of a workflow state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateType {
    #[default]
    Regular,
    Successful,
    Unsuccessful,
    #[serde(other)]
    Unknown,
}

/// A workflow state of a document type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// Account the object belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,

    /// Status name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Color as a packed RGB integer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,

    /// Status kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_type: Option<StateType>,

    /// Entity type the status belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

impl_has_meta!(State);

impl State {
    /// Creates a regular state with a name and color.
    #[must_use]
    pub fn new(name: impl Into<String>, color: u32) -> Self {
        Self {
            name: Some(name.into()),
            color: Some(color),
            ..Default::default()
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_color(&mut self, color: u32) -> &mut Self {
        self.color = Some(color);
        self
    }

    pub fn set_state_type(&mut self, state_type: StateType) -> &mut Self {
        self.state_type = Some(state_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_type_wire_names() {
        let mut state = State::new("Shipped", 0x00ff_0000);
        state.set_state_type(StateType::Successful);

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["stateType"], "Successful");
        assert_eq!(value["color"], 16_711_680);
    }
}
