//! Error type for the movie catalog client.
//!
//! # Design
//! Every failure path normalizes to exactly one of two kinds. `Upstream`
//! carries the non-2xx status code and raw body text verbatim so callers can
//! branch on status (retry and backoff policy is theirs, not ours).
//! `Transport` covers everything below the HTTP layer — connection refused,
//! timeout, an undecodable response body — where no status exists.

use std::fmt;

/// Normalized failure returned by every `CatalogClient` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The server answered with a non-2xx status. Status and body are kept
    /// verbatim, no reinterpretation.
    Upstream { status: u16, body: String },

    /// The exchange never produced a usable HTTP response: connection
    /// failure, timeout, or a body that could not be decoded.
    Transport { message: String },
}

impl CatalogError {
    /// Upstream status code, if this failure came from an HTTP response.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Upstream { status, .. } => Some(*status),
            CatalogError::Transport { .. } => None,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Upstream { status, body } => {
                write!(f, "upstream returned HTTP {status}: {body}")
            }
            CatalogError::Transport { message } => {
                write!(f, "transport failure: {message}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_exposes_status() {
        let err = CatalogError::Upstream {
            status: 404,
            body: "No Movie Available with the given Movie Id - 100".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[test]
    fn transport_has_no_status() {
        let err = CatalogError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }
}
