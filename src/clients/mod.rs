//! HTTP client types for MoySklad API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the MoySklad JSON API. It handles request/response
//! processing and MoySklad-specific header parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::{Credentials, MoySkladConfig};
//! use moysklad::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = MoySkladConfig::builder()
//!     .credentials(Credentials::token("token")?)
//!     .build()?;
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "entity/uom")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Every request is sent exactly once and any non-2xx status,
//! `429` included, comes back as [`HttpError::Response`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{ApiError, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};

// Re-export REST client types at the clients module level
pub use rest::{Query, RestClient, RestError};
