//! # MoySklad API Rust SDK
//!
//! A Rust SDK for the MoySklad JSON API 1.2, providing type-safe
//! configuration, typed entities and an async HTTP client with rate limit
//! handling.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MoySkladConfig`] and [`MoySkladConfigBuilder`]
//! - Bearer token and HTTP Basic credentials via [`Credentials`]
//! - Query directives (filters, ordering, paging, expand) via [`rest::Params`]
//! - One generic service per entity with capabilities as traits
//! - Server-side asynchronous jobs via [`rest::AsyncTask`]
//! - Reports: dashboard, stock, sales and orders plot series, profit
//!
//! ## Quick Start
//!
//! ```rust
//! use moysklad::{Credentials, MoySklad, MoySkladConfig};
//!
//! let config = MoySkladConfig::builder()
//!     .credentials(Credentials::token("your-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let moysklad = MoySklad::new(&config);
//! ```
//!
//! ## Working with Entities
//!
//! Every operation comes from a capability trait that has to be in scope.
//!
//! ```rust,ignore
//! use moysklad::rest::capabilities::{Create, GetList, Update};
//! use moysklad::rest::resources::Counterparty;
//! use moysklad::rest::Params;
//!
//! let counterparties = moysklad.counterparty();
//!
//! let mut counterparty = Counterparty::default();
//! counterparty.set_name("ООО Ромашка");
//! let created = counterparties.create(&counterparty, None).await?;
//!
//! let params = Params::new().search("Ромашка").limit(10);
//! let page = counterparties.get_list(Some(&params)).await?;
//! ```
//!
//! ## Reports and Asynchronous Jobs
//!
//! ```rust,ignore
//! let task = moysklad.report_stock().get_all_async(None).await?;
//! while !*task.check().await? {
//!     tokio::time::sleep(std::time::Duration::from_secs(5)).await;
//! }
//! let stock = task.result().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

mod moysklad;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, BaseUrl, Credentials, MoySkladConfig, MoySkladConfigBuilder};
pub use error::ConfigError;
pub use moysklad::MoySklad;

// Re-export HTTP client types
pub use clients::{
    ApiError, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, RateLimit,
};
