//! One-shot request builder.
//!
//! [`RequestBuilder`] turns a path, optional [`Params`] and an optional body
//! into exactly one HTTP call and decodes the JSON answer. It never retries.
//! Every capability trait in [`crate::rest::capabilities`] is a thin layer
//! over it.
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::rest::{Params, RequestBuilder};
//! use moysklad::rest::resources::common::List;
//!
//! let params = Params::new().limit(10);
//! let uoms: List<serde_json::Value> = RequestBuilder::new(&client, "entity/uom")
//!     .params(Some(&params))
//!     .get()
//!     .await?
//!     .into_inner();
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpMethod, HttpResponse, Query, RestClient};
use crate::rest::resources::common::PrintFile;
use crate::rest::{AsyncTask, Params, ResourceError, ResourceResponse};

/// Header asking MoySklad to return file content instead of a redirect.
pub const HEADER_GET_CONTENT: &str = "X-Lognex-Get-Content";

/// Builds and sends a single request.
#[derive(Debug)]
pub struct RequestBuilder<'a> {
    client: &'a RestClient,
    path: String,
    query: Query,
    headers: HashMap<String, String>,
}

impl<'a> RequestBuilder<'a> {
    /// Starts a request to a path relative to the base URL, or to an
    /// absolute URL on the same host.
    #[must_use]
    pub fn new(client: &'a RestClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            query: Vec::new(),
            headers: HashMap::new(),
        }
    }

    /// Adds query directives.
    #[must_use]
    pub fn params(mut self, params: Option<&Params>) -> Self {
        if let Some(params) = params {
            self.query.extend(params.to_query());
        }
        self
    }

    /// Adds a raw query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a request header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Requests file content instead of JSON.
    #[must_use]
    pub fn content_mode(self) -> Self {
        self.header(HEADER_GET_CONTENT, "true")
    }

    /// Returns the request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Sends the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and API errors.
    pub async fn send(
        self,
        method: HttpMethod,
        body: Option<Value>,
    ) -> Result<HttpResponse, ResourceError> {
        let query = (!self.query.is_empty()).then_some(self.query);
        let headers = (!self.headers.is_empty()).then_some(self.headers);

        let response = self
            .client
            .make_request(method, &self.path, body, query, headers)
            .await?;

        Ok(response)
    }

    async fn send_decoded<T: DeserializeOwned>(
        self,
        method: HttpMethod,
        body: Option<Value>,
    ) -> Result<ResourceResponse<T>, ResourceError> {
        let path = self.path.clone();
        let response = self.send(method, body).await?;
        ResourceResponse::from_http_response(response, &path)
    }

    /// Sends a GET request and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and API errors, or
    /// [`ResourceError::Decode`] if the body does not match `T`.
    pub async fn get<T: DeserializeOwned>(self) -> Result<ResourceResponse<T>, ResourceError> {
        self.send_decoded(HttpMethod::Get, None).await
    }

    /// Sends a POST request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Encode`] if the body cannot be serialized,
    /// plus the errors of [`get`](Self::get).
    pub async fn post<B, T>(self, body: &B) -> Result<ResourceResponse<T>, ResourceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.send_decoded(HttpMethod::Post, Some(body)).await
    }

    /// Sends a PUT request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// Same as [`post`](Self::post).
    pub async fn put<B, T>(self, body: &B) -> Result<ResourceResponse<T>, ResourceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.send_decoded(HttpMethod::Put, Some(body)).await
    }

    /// Sends a POST request without a body and decodes the response.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn post_empty<T: DeserializeOwned>(
        self,
    ) -> Result<ResourceResponse<T>, ResourceError> {
        self.send_decoded(HttpMethod::Post, None).await
    }

    /// Sends a PUT request without a body and decodes the response.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn put_empty<T: DeserializeOwned>(self) -> Result<ResourceResponse<T>, ResourceError> {
        self.send_decoded(HttpMethod::Put, None).await
    }

    /// Sends a DELETE request.
    ///
    /// Yields `true` when the server answers 204 No Content.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer, including 404, is an error.
    pub async fn delete(self) -> Result<ResourceResponse<bool>, ResourceError> {
        let response = self.send(HttpMethod::Delete, None).await?;
        Ok(ResourceResponse::new(response.code == 204, response))
    }

    /// Sends a POST request without a body and reports whether the answer
    /// had the expected status.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer is an error.
    pub async fn post_expecting(
        self,
        status: u16,
    ) -> Result<ResourceResponse<bool>, ResourceError> {
        let response = self.send(HttpMethod::Post, None).await?;
        Ok(ResourceResponse::new(response.code == status, response))
    }

    /// Downloads file content with a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and API errors.
    pub async fn get_content(self) -> Result<ResourceResponse<PrintFile>, ResourceError> {
        let response = self.content_mode().send(HttpMethod::Get, None).await?;
        Ok(print_file(response))
    }

    /// Renders and downloads a file with a POST request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Encode`] if the body cannot be serialized,
    /// or [`ResourceError::Rest`] for transport and API errors.
    pub async fn post_content<B: Serialize + ?Sized>(
        self,
        body: &B,
    ) -> Result<ResourceResponse<PrintFile>, ResourceError> {
        let body = encode(body)?;
        let response = self.content_mode().send(HttpMethod::Post, Some(body)).await?;
        Ok(print_file(response))
    }

    /// Starts the GET request as an asynchronous job.
    ///
    /// Adds `async=true` and wraps the `Location` and `Content-Location`
    /// headers of the answer into an [`AsyncTask`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingHeader`] if the server did not
    /// answer with both job URLs, plus the errors of [`get`](Self::get).
    pub async fn get_async<T: DeserializeOwned>(
        self,
    ) -> Result<ResourceResponse<AsyncTask<T>>, ResourceError> {
        let client = self.client.clone();
        let response = self
            .query_param("async", "true")
            .send(HttpMethod::Get, None)
            .await?;

        let task = AsyncTask::from_response(client, &response)?;
        Ok(ResourceResponse::new(task, response))
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ResourceError> {
    serde_json::to_value(body).map_err(|e| ResourceError::Encode {
        message: e.to_string(),
    })
}

fn print_file(response: HttpResponse) -> ResourceResponse<PrintFile> {
    let file = PrintFile {
        file_name: response.file_name(),
        content_type: response.content_type().map(ToString::to_string),
        content: response.raw.clone(),
    };
    ResourceResponse::new(file, response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Credentials, MoySkladConfig};

    fn client() -> RestClient {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("token").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config)
    }

    #[test]
    fn test_builder_collects_params_and_headers() {
        let client = client();
        let params = Params::new().limit(10).expand("agent");
        let builder = RequestBuilder::new(&client, "entity/customerorder")
            .params(Some(&params))
            .params(None)
            .query_param("async", "true")
            .content_mode();

        assert_eq!(builder.path(), "entity/customerorder");
        assert_eq!(
            builder.query,
            vec![
                ("limit".to_string(), "10".to_string()),
                ("expand".to_string(), "agent".to_string()),
                ("async".to_string(), "true".to_string()),
            ]
        );
        assert_eq!(builder.headers.get(HEADER_GET_CONTENT).map(String::as_str), Some("true"));
    }

    #[test]
    fn test_encode_rejects_non_string_keys() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(vec![1u8], 1);
        assert!(matches!(encode(&map), Err(ResourceError::Encode { .. })));
    }
}
