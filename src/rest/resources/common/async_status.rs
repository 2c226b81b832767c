//! Status of a server-side asynchronous job (`async/{id}`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::meta::{impl_has_meta, Meta};
use super::timestamp::Timestamp;
use crate::clients::ApiError;

/// Lifecycle state of an asynchronous job.
///
/// Only [`AsyncState::Done`] is terminal success. Unknown values decode to
/// [`AsyncState::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AsyncState {
    Pending,
    Processing,
    Done,
    Error,
    Cancel,
    ApiError,
    #[serde(other)]
    Unknown,
}

/// Status document of an asynchronous job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncStatus {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// Account the object belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,

    /// Job state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AsyncState>,

    /// Request that started the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,

    /// Where the result can be fetched once the job is done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,

    /// When the result will be removed from the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_date: Option<Timestamp>,

    /// Errors of a failed job.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
}

impl_has_meta!(AsyncStatus);

impl AsyncStatus {
    /// Returns `true` if the job finished successfully.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == Some(AsyncState::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_states() {
        let status: AsyncStatus = serde_json::from_value(json!({
            "id": "8e2e1b9c-0a1f-11ef-0a80-0cd4000f8c6e",
            "state": "PROCESSING",
            "request": "https://api.moysklad.ru/api/remap/1.2/report/stock/all?async=true"
        }))
        .unwrap();
        assert_eq!(status.state, Some(AsyncState::Processing));
        assert!(!status.is_done());

        let done: AsyncStatus = serde_json::from_value(json!({"state": "DONE"})).unwrap();
        assert!(done.is_done());

        let api_error: AsyncStatus =
            serde_json::from_value(json!({"state": "API_ERROR"})).unwrap();
        assert_eq!(api_error.state, Some(AsyncState::ApiError));

        let odd: AsyncStatus = serde_json::from_value(json!({"state": "QUEUED"})).unwrap();
        assert_eq!(odd.state, Some(AsyncState::Unknown));
    }
}
