//! Blocking HTTP execution behind a trait seam.
//!
//! # Design
//! A [`Transport`] executes one built request and returns the completed
//! exchange as data. Implementations surface only transport-level failures
//! (connection refused, timeout, unreadable body) — a non-2xx status is a
//! valid response, and interpreting it belongs to the client's `parse_*`
//! layer, not here. Implementations must be safe for concurrent use; the
//! client shares no mutable state between in-flight calls.

use crate::error::CatalogError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes a single blocking HTTP exchange.
pub trait Transport {
    /// Send `request` and block until the exchange completes.
    ///
    /// Errors are always the `Transport` variant; status interpretation is
    /// left to the caller.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, CatalogError>;
}

/// Default blocking transport backed by a shared [`ureq::Agent`].
///
/// The agent is configured with status-as-error disabled so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the client
/// handle status interpretation. Timeout policy is whatever the agent's
/// configuration says; this layer adds none of its own.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Wrap a preconfigured agent (custom timeouts, proxies, pooling).
    ///
    /// The agent must have `http_status_as_error` disabled, otherwise non-2xx
    /// responses surface as transport failures instead of upstream errors.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, CatalogError> {
        let result = match (&request.method, &request.body) {
            (HttpMethod::Get, _) => self.agent.get(&request.url).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&request.url).call(),
            (HttpMethod::Post, Some(body)) => {
                let mut builder = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.send(body.as_bytes())
            }
            (HttpMethod::Post, None) => self.agent.post(&request.url).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                let mut builder = self.agent.put(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.send(body.as_bytes())
            }
            (HttpMethod::Put, None) => self.agent.put(&request.url).send_empty(),
        };

        let mut response = result.map_err(|e| CatalogError::Transport {
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| CatalogError::Transport {
                message: format!("failed to read response body: {e}"),
            })?;

        Ok(HttpResponse { status, body })
    }
}
