//! Catalog-specific error types
//!
//! Errors raised while reading or validating a version catalog document.
//! The browsing core never produces these; they belong to the loader.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document could not be read from disk
    #[error("Failed to read catalog {path}: {source}")]
    ReadError {
        /// Path of the document
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid JSON for the expected shape
    #[error("Malformed catalog document: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A version record maps to no converted versions
    #[error("Package '{package}' maps version '{original}' to no converted versions")]
    EmptyConversion {
        /// Package that owns the record
        package: String,
        /// Original version of the offending record
        original: String,
    },

    /// The background loader stopped before delivering a catalog
    #[error("Catalog loader exited without a result")]
    LoaderDisconnected,
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
