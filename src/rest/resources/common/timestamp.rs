//! MoySklad timestamps.
//!
//! The API uses local Moscow time without an offset, formatted as
//! `2006-01-02 15:04:05.000`.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const PARSE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// A timestamp in MoySklad wire format.
///
/// # Example
///
/// ```rust
/// use moysklad::rest::resources::common::Timestamp;
///
/// let ts: Timestamp = "2024-03-01 12:30:00".parse().unwrap();
/// assert_eq!(ts.to_string(), "2024-03-01 12:30:00.000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub NaiveDateTime);

impl Timestamp {
    /// Returns the inner date-time.
    #[must_use]
    pub const fn into_inner(self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}

impl std::str::FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let [with_fraction, without_fraction] = PARSE_FORMATS;
        NaiveDateTime::parse_from_str(s, with_fraction)
            .or_else(|_| NaiveDateTime::parse_from_str(s, without_fraction))
            .map(Self)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Timestamp {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_milli_opt(12, 30, 15, 250)
            .unwrap()
            .into()
    }

    #[test]
    fn test_serializes_with_milliseconds() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, "\"2024-03-01 12:30:15.250\"");
    }

    #[test]
    fn test_deserializes_with_and_without_milliseconds() {
        let with: Timestamp = serde_json::from_str("\"2024-03-01 12:30:15.250\"").unwrap();
        assert_eq!(with, sample());

        let without: Timestamp = serde_json::from_str("\"2024-03-01 12:30:15\"").unwrap();
        assert_eq!(without.to_string(), "2024-03-01 12:30:15.000");
    }

    #[test]
    fn test_rejects_iso_format() {
        assert!(serde_json::from_str::<Timestamp>("\"2024-03-01T12:30:15Z\"").is_err());
    }
}
