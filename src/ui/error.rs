//! UI error types

use crate::catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing or event polling failed
    #[error("Terminal error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog failed to load while the browser was running
    #[error("Catalog unavailable: {0}")]
    CatalogError(#[from] CatalogError),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
