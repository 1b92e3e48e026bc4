// Sat Oct 17 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Document not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported operation '{operation}' requested for class {class}")]
    UnsupportedOperation { operation: String, class: String },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ResolverResult<T> = Result<T, ResolverError>;

impl ResolverError {
    /// Maps a failed open/read into `NotFound` when the file is missing, `Io` otherwise.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ResolverError::NotFound { path }
        } else {
            ResolverError::Io { path, source }
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ResolverError::Parse { path: path.into(), source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolverError::NotFound { .. })
    }
}
