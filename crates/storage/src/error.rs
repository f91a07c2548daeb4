//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Stored data could not be encoded or decoded.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// No location for the store could be determined.
    #[error("no data directory available")]
    NoDataDir,
}

impl StorageError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io { path: path.display().to_string(), source }
    }
}
