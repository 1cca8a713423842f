//! vermap - browse a catalog of package version mappings
//!
//! A catalog maps package names to version records, each pairing an original
//! version with the converted versions it corresponds to. This library
//! filters the catalog by package name, renders each package as a card with
//! its first two records, and discloses the full list for one package on
//! demand.
//!
//! # Example
//!
//! ```
//! use vermap::browse::{CatalogList, CatalogListener};
//! use vermap::catalog::VersionCatalog;
//! use vermap::search::MatchPolicy;
//!
//! let catalog = VersionCatalog::from_json_str(r#"{
//!     "left-pad": {"versions": [{"original": "1.3.0", "converted": ["v0.1.0"]}]},
//!     "react":    {"versions": [{"original": "18.2.0", "converted": ["v1.0.0"]}]}
//! }"#).unwrap();
//!
//! let mut list = CatalogList::new(MatchPolicy::Insensitive);
//! list.on_query_changed("RE");
//!
//! let view = list.view(Some(&catalog));
//! let ready = view.ready().unwrap();
//! assert_eq!(ready.search.visible_names, vec!["react"]);
//! assert_eq!(ready.search.status_text(), "1 results found from 2 packages.");
//! ```

use thiserror::Error;

pub mod browse;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod search;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum VermapError {
    /// Catalog document could not be read or is invalid
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Terminal UI failure
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
    /// Requested package is not a catalog key
    #[error("Package '{0}' not found in catalog")]
    PackageNotFound(String),
    /// Neither `--catalog` nor `catalog_path` names a catalog document
    #[error("No catalog given. Pass --catalog FILE or set catalog_path in the config file")]
    NoCatalog,
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
