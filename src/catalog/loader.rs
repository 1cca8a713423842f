//! Catalog document loading
//!
//! Reads an already-shaped catalog document from disk. The terminal front end
//! uses [`load_in_background`] so the first frame can be drawn before the
//! catalog is available.

use super::error::{CatalogError, Result};
use super::types::VersionCatalog;
use crossbeam_channel::Receiver;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

/// Read and validate a catalog document
///
/// # Errors
///
/// Returns `CatalogError::ReadError` if the file cannot be read, or any
/// parse/validation error from [`VersionCatalog::from_json_str`].
pub fn load_catalog(path: &Path) -> Result<VersionCatalog> {
    let started = Instant::now();
    let json = fs::read_to_string(path).map_err(|source| CatalogError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = VersionCatalog::from_json_str(&json)?;

    tracing::info!(
        path = %path.display(),
        packages = catalog.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Load a catalog on a worker thread
///
/// The returned channel yields exactly one result. If the worker dies before
/// sending, receivers observe a disconnect.
#[must_use]
pub fn load_in_background(path: PathBuf) -> Receiver<Result<VersionCatalog>> {
    let (tx, rx) = crossbeam_channel::bounded(1);
    thread::spawn(move || {
        let result = load_catalog(&path);
        if let Err(e) = &result {
            tracing::warn!(path = %path.display(), error = %e, "catalog load failed");
        }
        // Receiver may already be gone if the UI quit while loading
        let _ = tx.send(result);
    });
    rx
}
