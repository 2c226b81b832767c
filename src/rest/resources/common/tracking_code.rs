//! Marking codes attached to document positions.

use serde::{Deserialize, Serialize};

/// Level of a marking code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingCodeType {
    TrackingCode,
    ConsumerPack,
    TransportPack,
    #[serde(other)]
    Unknown,
}

/// A marking code, possibly grouping nested codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingCode {
    /// Code value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cis: Option<String>,

    /// Code kind.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub code_type: Option<TrackingCodeType>,

    /// Codes packed inside this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracking_codes: Vec<TrackingCode>,
}

impl TrackingCode {
    /// Creates a code of the given level.
    #[must_use]
    pub fn new(cis: impl Into<String>, code_type: TrackingCodeType) -> Self {
        Self {
            cis: Some(cis.into()),
            code_type: Some(code_type),
            tracking_codes: Vec::new(),
        }
    }

    /// Nests a code inside this one.
    pub fn push(&mut self, code: Self) -> &mut Self {
        self.tracking_codes.push(code);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_codes() {
        let mut pack = TrackingCode::new("pack-1", TrackingCodeType::ConsumerPack);
        pack.push(TrackingCode::new("item-1", TrackingCodeType::TrackingCode));

        let value = serde_json::to_value(&pack).unwrap();
        assert_eq!(
            value,
            json!({
                "cis": "pack-1",
                "type": "consumerpack",
                "trackingCodes": [{"cis": "item-1", "type": "trackingcode"}]
            })
        );
    }
}
