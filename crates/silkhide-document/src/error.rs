//! Error types for board document operations.

use std::io;
use std::path::PathBuf;

use silkhide_core::PlacementId;
use thiserror::Error;

/// Primary error type for board document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Two footprints share the same identity.
    #[error("duplicate footprint identity")]
    DuplicateFootprint {
        /// Identity used more than once.
        id: PlacementId,
    },
    /// File extension did not map to a known format.
    #[error("unsupported board document format")]
    UnsupportedFormat {
        /// Path whose extension was not recognised.
        path: PathBuf,
    },
    /// YAML encoding or decoding failed.
    #[error("yaml board document operation failed")]
    Yaml {
        /// Operation identifier.
        operation: &'static str,
        /// Document path.
        path: PathBuf,
        /// Underlying serde error.
        source: serde_yaml::Error,
    },
    /// JSON encoding or decoding failed.
    #[error("json board document operation failed")]
    Json {
        /// Operation identifier.
        operation: &'static str,
        /// Document path.
        path: PathBuf,
        /// Underlying serde error.
        source: serde_json::Error,
    },
    /// File system operation failed.
    #[error("filesystem operation failed")]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
}

/// Convenience alias for document results.
pub type DocumentResult<T> = Result<T, DocumentError>;
