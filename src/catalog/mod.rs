//! Version catalog data model and loading
//!
//! The catalog maps each package name to the ordered list of its version
//! records. It is produced by an external collaborator as a JSON document:
//!
//! ```json
//! {
//!   "zlib": {
//!     "versions": [
//!       { "original": "1.3.1", "converted": ["v1.0.0", "v1.0.1"] }
//!     ]
//!   }
//! }
//! ```
//!
//! Key order in the document is kept and becomes the order of the package
//! grid.

mod error;
mod loader;
mod types;

pub use error::{CatalogError, Result};
pub use loader::{load_catalog, load_in_background};
pub use types::{CONVERTED_SEPARATOR, PackageEntry, VersionCatalog, VersionRecord};
