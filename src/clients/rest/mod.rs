//! REST API client for the MoySklad JSON API.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `put()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::clients::RestClient;
//! use moysklad::{Credentials, MoySkladConfig};
//!
//! let config = MoySkladConfig::builder()
//!     .credentials(Credentials::token("token")?)
//!     .build()?;
//!
//! let client = RestClient::new(&config);
//! let response = client.get("entity/uom", None).await?;
//! println!("Units: {}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! - Leading and trailing slashes are stripped: `/entity/uom/` -> `entity/uom`
//! - Absolute URLs (async task headers) are passed through and checked
//!   against the configured origin by [`HttpClient`](crate::clients::HttpClient)

mod client;
mod errors;

pub use client::{Query, RestClient};
pub use errors::RestError;
