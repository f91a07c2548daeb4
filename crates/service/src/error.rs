//! Typed error enum for the service layer.
//!
//! Maps client, storage and input-rule failures onto the three outcomes a
//! front end distinguishes: network failure, rejected input, missing record.

use pokedex_client::ClientError;
use pokedex_core::CoreError;
use pokedex_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Upstream call failed (transport, status or body).
    #[error("network: {0}")]
    Network(#[from] ClientError),

    /// Caller input failed sanitization or shape checks; nothing was sent.
    #[error("rejected input: {0}")]
    ValidationRejected(String),

    /// A by-name lookup found no usable record.
    #[error("not found: {0}")]
    NotFound(String),

    /// Local persistence failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_network())
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        Self::ValidationRejected(err.to_string())
    }
}
