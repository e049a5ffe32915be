//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while building the post index
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("source directory does not exist: {}", .0.display())]
    SourceDirMissing(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to serialize index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write index {}: {source}", path.display())]
    WriteIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors returned by a [`Fetcher`](crate::client::Fetcher)
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("request for {path} failed with status {status}")]
    Status { path: String, status: u16 },

    #[error("failed to fetch {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid response for {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Whether this error means the resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FetchError::NotFound(_) | FetchError::Status { status: 404, .. }
        )
    }
}
