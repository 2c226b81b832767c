//! Server-side asynchronous jobs.
//!
//! Reports and some bulk operations can run as jobs. Starting one answers
//! `202 Accepted` with two headers:
//!
//! - `Location`: the job status URL
//! - `Content-Location`: the result URL
//!
//! [`AsyncTask<T>`] wraps both. The crate never polls on its own: call
//! [`AsyncTask::check`] at your own cadence and wrap the loop in a timeout of
//! your choice.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! let task = moysklad.report_stock().get_all_async(None).await?.into_inner();
//!
//! let report = tokio::time::timeout(Duration::from_secs(60), async {
//!     while !*task.check().await? {
//!         tokio::time::sleep(Duration::from_secs(2)).await;
//!     }
//!     task.result().await
//! })
//! .await??;
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

use crate::clients::{HttpResponse, RestClient};
use crate::rest::resources::common::{AsyncStatus, List};
use crate::rest::{Params, RequestBuilder, ResourceError, ResourceResponse, ResourcePath};

/// A running server-side job whose result decodes into `T`.
///
/// `AsyncTask` is `Send + Sync` for every `T`; `check()` takes `&self` and
/// records completion in an atomic flag.
pub struct AsyncTask<T> {
    client: RestClient,
    status_url: Url,
    result_url: Url,
    done: AtomicBool,
    _result: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for AsyncTask<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncTask")
            .field("status_url", &self.status_url.as_str())
            .field("result_url", &self.result_url.as_str())
            .field("done", &self.done.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}

impl<T> AsyncTask<T> {
    /// Creates a task from known job URLs.
    #[must_use]
    pub const fn new(client: RestClient, status_url: Url, result_url: Url) -> Self {
        Self {
            client,
            status_url,
            result_url,
            done: AtomicBool::new(false),
            _result: PhantomData,
        }
    }

    /// Creates a task from the headers of a `202 Accepted` answer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingHeader`] if `Location` or
    /// `Content-Location` is absent or not a URL.
    pub fn from_response(client: RestClient, response: &HttpResponse) -> Result<Self, ResourceError> {
        let status_url = parse_header(&client, response.location(), "Location")?;
        let result_url = parse_header(&client, response.content_location(), "Content-Location")?;
        Ok(Self::new(client, status_url, result_url))
    }

    /// Returns the job status URL.
    #[must_use]
    pub const fn status_url(&self) -> &Url {
        &self.status_url
    }

    /// Returns the job result URL.
    #[must_use]
    pub const fn result_url(&self) -> &Url {
        &self.result_url
    }

    /// Returns `true` once a `check()` has observed the job done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Fetches the job status.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn status(&self) -> Result<ResourceResponse<AsyncStatus>, ResourceError> {
        let status: ResourceResponse<AsyncStatus> =
            RequestBuilder::new(&self.client, self.status_url.as_str())
                .get()
                .await?;

        if status.is_done() {
            self.done.store(true, Ordering::Release);
        }
        Ok(status)
    }

    /// Checks whether the job is done.
    ///
    /// Yields `true` iff the job state is `DONE`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn check(&self) -> Result<ResourceResponse<bool>, ResourceError> {
        let status = self.status().await?;
        Ok(status.map(|s| s.is_done()))
    }

    /// Requests cancellation of the job.
    ///
    /// Yields `true` when the server answers 204.
    ///
    /// # Errors
    ///
    /// Cancelling a finished job is answered with an API error, which is
    /// returned as [`ResourceError`].
    pub async fn cancel(&self) -> Result<ResourceResponse<bool>, ResourceError> {
        let mut url = self.status_url.clone();
        url.path_segments_mut()
            .map_err(|()| ResourceError::MissingHeader { header: "Location" })?
            .pop_if_empty()
            .push("cancel");

        RequestBuilder::new(&self.client, url.as_str())
            .post_expecting(204)
            .await
    }
}

impl<T: DeserializeOwned> AsyncTask<T> {
    /// Fetches the job result.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::AsyncNotReady`] unless a previous
    /// [`check`](Self::check) returned `true`, plus transport, API and decode
    /// errors.
    pub async fn result(&self) -> Result<ResourceResponse<T>, ResourceError> {
        if !self.is_done() {
            return Err(ResourceError::AsyncNotReady {
                status_url: self.status_url.to_string(),
            });
        }

        RequestBuilder::new(&self.client, self.result_url.as_str())
            .get()
            .await
    }
}

fn parse_header(
    client: &RestClient,
    value: Option<&str>,
    header: &'static str,
) -> Result<Url, ResourceError> {
    let value = value.ok_or(ResourceError::MissingHeader { header })?;

    Url::parse(value)
        .or_else(|_| client.http_client().base_url().join(value.trim_start_matches('/')))
        .map_err(|e| {
            tracing::warn!(header, value, error = %e, "Cannot parse async task URL");
            ResourceError::MissingHeader { header }
        })
}

// Verify AsyncTask is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AsyncTask<serde_json::Value>>();
};

/// Lists and inspects asynchronous jobs of the account (`async`).
#[derive(Debug, Clone)]
pub struct AsyncService {
    client: RestClient,
}

impl AsyncService {
    const URI: &'static str = "async";

    /// Creates the service.
    #[must_use]
    pub const fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Lists job statuses.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_statuses(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<AsyncStatus>>, ResourceError> {
        RequestBuilder::new(&self.client, Self::URI)
            .params(params)
            .get()
            .await
    }

    /// Fetches one job status.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_status_by_id(
        &self,
        id: Uuid,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<AsyncStatus>, ResourceError> {
        let path = ResourcePath::new(Self::URI).id(id);
        RequestBuilder::new(&self.client, path)
            .params(params)
            .get()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, Credentials, MoySkladConfig};
    use std::collections::HashMap;

    fn client() -> RestClient {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("token").unwrap())
            .base_url(BaseUrl::new("https://api.moysklad.ru/api/remap/1.2/").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config)
    }

    fn accepted(headers: &[(&str, &str)]) -> HttpResponse {
        let headers: HashMap<String, Vec<String>> = headers
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect();
        HttpResponse::new(202, headers, serde_json::json!({}))
    }

    #[test]
    fn test_from_response_reads_both_urls() {
        let response = accepted(&[
            ("location", "https://api.moysklad.ru/api/remap/1.2/async/7f8e"),
            ("content-location", "https://api.moysklad.ru/api/remap/1.2/async/7f8e/result"),
        ]);

        let task: AsyncTask<serde_json::Value> =
            AsyncTask::from_response(client(), &response).unwrap();
        assert_eq!(task.status_url().path(), "/api/remap/1.2/async/7f8e");
        assert_eq!(task.result_url().path(), "/api/remap/1.2/async/7f8e/result");
        assert!(!task.is_done());
    }

    #[test]
    fn test_relative_urls_join_base() {
        let response = accepted(&[
            ("location", "async/1"),
            ("content-location", "/async/1/result"),
        ]);

        let task: AsyncTask<serde_json::Value> =
            AsyncTask::from_response(client(), &response).unwrap();
        assert_eq!(
            task.result_url().as_str(),
            "https://api.moysklad.ru/api/remap/1.2/async/1/result"
        );
    }

    #[test]
    fn test_missing_headers_fail() {
        let only_location = accepted(&[("location", "https://api.moysklad.ru/api/remap/1.2/async/1")]);
        let error = AsyncTask::<serde_json::Value>::from_response(client(), &only_location).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::MissingHeader { header: "Content-Location" }
        ));

        let none = accepted(&[]);
        let error = AsyncTask::<serde_json::Value>::from_response(client(), &none).unwrap_err();
        assert!(matches!(error, ResourceError::MissingHeader { header: "Location" }));
    }

    #[tokio::test]
    async fn test_result_before_check_is_not_ready() {
        let task: AsyncTask<serde_json::Value> = AsyncTask::new(
            client(),
            Url::parse("https://api.moysklad.ru/api/remap/1.2/async/1").unwrap(),
            Url::parse("https://api.moysklad.ru/api/remap/1.2/async/1/result").unwrap(),
        );

        let error = task.result().await.unwrap_err();
        assert!(matches!(error, ResourceError::AsyncNotReady { .. }));
    }
}
