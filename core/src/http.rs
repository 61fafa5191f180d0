//! HTTP exchange described as plain data.
//!
//! # Design
//! `build_*` methods produce `HttpRequest` values and `parse_*` methods
//! consume `HttpResponse` values; only the [`Transport`](crate::Transport)
//! in between touches the network. Keeping both sides as plain data makes
//! request construction and response translation testable without a server.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! across threads without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `CatalogClient::build_*` methods; `url` is fully qualified,
/// including the base endpoint and any query string.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A completed HTTP response described as plain data.
///
/// Produced by a [`Transport`](crate::Transport), then handed to
/// `CatalogClient::parse_*` methods for status interpretation and decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
