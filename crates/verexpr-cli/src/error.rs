//! Error types for configuration and catalog loading.

use std::path::PathBuf;

use thiserror::Error;
use verexpr::CatalogError;

/// Failures the CLI reports before any expression is resolved.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Neither `--catalog` nor `VEREXPR_CATALOG` named a catalog file.
    #[error("no version catalog given; pass --catalog or set VEREXPR_CATALOG")]
    MissingCatalog,

    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    ReadCatalog {
        /// Catalog file path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The catalog file looked like JSON but did not parse as a string array.
    #[error("catalog {path} is not a JSON array of strings: {source}")]
    CatalogJson {
        /// Catalog file path.
        path: PathBuf,
        /// Underlying parse failure.
        source: serde_json::Error,
    },

    /// The catalog contents were rejected.
    #[error("catalog {path} is invalid: {source}")]
    InvalidCatalog {
        /// Catalog file path.
        path: PathBuf,
        /// Validation failure.
        source: CatalogError,
    },
}
