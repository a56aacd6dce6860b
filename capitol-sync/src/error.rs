//! Error types for capitol-sync.

use std::path::PathBuf;

use thiserror::Error;

use capitol_core::ValidationError;
use capitol_discover::DiscoverError;

/// All errors that can arise from reconciliation and batch driving.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A path that must exist (source artifact, metadata sidecar) did not.
    #[error("not found: {path}")]
    NotFound { path: PathBuf },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A mask pattern failed to compile.
    #[error("mask pattern error: {0}")]
    Mask(#[from] regex::Error),

    /// A metadata sidecar failed to parse.
    #[error("failed to parse metadata at {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An archived photo already occupies the backup slot; nothing was moved.
    #[error("archived photo already exists: {path}")]
    ArchiveExists { path: PathBuf },

    /// An error from artifact discovery or the path grammar.
    #[error("discovery error: {0}")]
    Discover(#[from] DiscoverError),

    /// A type-code or congress-number validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
