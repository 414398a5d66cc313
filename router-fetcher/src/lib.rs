//! `router-fetcher` is a small client library for services that discover each
//! other through a router service. Given a logical `(service, namespace,
//! method)` triple, the router resolves the physical HTTP endpoint and verb to
//! call; it also serves each service's API schema document.
//!
//! The crate is a thin wrapper around one HTTP GET per operation, plus lazy
//! resolution of the router connection settings and a fixed error taxonomy.
//! There is no retry logic, no response caching, and no session state: every
//! call is an independent request-response round trip.
//!
//! ## Example
//! ```no_run
//! use router_fetcher::{RouterFetcher, StaticSettings};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), router_fetcher::RouterError> {
//! let settings: StaticSettings = [(
//!     "routerConfig".to_string(),
//!     json!({
//!         "endpoint": "http://router.internal/api/endpoint",
//!         "schema": "http://router.internal/api/services/{serviceName}/schema",
//!     }),
//! )]
//! .into_iter()
//! .collect();
//!
//! let fetcher = RouterFetcher::builder().with_settings(settings).build()?;
//!
//! // Where does `catalog.product.list` live, and how do I call it?
//! let descriptor = fetcher
//!     .resolve_endpoint("catalog", "product", "list", None)
//!     .await?;
//! println!("call {:?} {:?}", descriptor.http_method, descriptor.endpoint);
//!
//! // What does the catalog service's API look like?
//! let schema = fetcher.fetch_schema("catalog").await?;
//! println!("{schema:#}");
//! # Ok(())
//! # }
//! ```
//!
//! The settings source is a seam: anything implementing [`Settings`] can back
//! a [`RouterFetcher`]. [`StaticSettings`] serves in-memory values and
//! [`JsonFileSettings`] reads a JSON object from disk once at construction.

#![warn(
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links
)]

pub mod client;
pub mod settings;

#[doc(inline)]
pub use client::{
    EndpointDescriptor, RouterConfig, RouterError, RouterFetcher, RouterFetcherBuilder,
    SchemaDocument,
};
#[doc(inline)]
pub use settings::{JsonFileSettings, Settings, StaticSettings};
