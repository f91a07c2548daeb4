//! Typed error enum for the client crate.

use thiserror::Error;

/// Errors from upstream API operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code} from {url}")]
    HttpStatus { code: u16, url: String },
    #[error("JSON decode error in {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ClientError {
    /// Whether the failure came from talking to the upstream (transport,
    /// non-success status or an undecodable body).
    #[must_use]
    pub fn is_network(&self) -> bool {
        !matches!(self, Self::ClientInit(_))
    }

    /// HTTP status code, when the upstream answered with a non-success one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { code, .. } => Some(*code),
            Self::HttpRequest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
