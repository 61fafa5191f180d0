//! Synchronous client for the movie catalog service.
//!
//! # Overview
//! Wraps the catalog's fixed set of HTTP operations (list all, lookup by id,
//! name, or year, add, update, delete) behind typed methods that block until
//! the exchange completes and return either the decoded entity or a
//! normalized [`CatalogError`].
//!
//! # Design
//! - `CatalogClient` is stateless — it holds only `base_url` and a transport,
//!   and carries no session state between calls.
//! - Each operation is split into `build_*` (produces the request) and
//!   `parse_*` (consumes the response), so request construction and response
//!   translation stay deterministic and testable without a network.
//! - The [`Transport`] trait executes a built request; [`UreqTransport`] is
//!   the default blocking implementation. Non-2xx responses come back as
//!   data, never as transport errors — status interpretation belongs to the
//!   `parse_*` layer.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::Movie;
