//! Data model for the version catalog
//!
//! These are plain data structures. The catalog is created once by the loader
//! and treated as an immutable snapshot afterwards; nothing in the browsing
//! layer mutates it.
//!
//! # Types
//!
//! - **`VersionRecord`**: one original version mapped to its converted versions
//! - **`PackageEntry`**: the ordered version records of one package
//! - **`VersionCatalog`**: package name to entry, in document order

use super::error::{CatalogError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Separator used when a record's converted versions are shown on one line
pub const CONVERTED_SEPARATOR: &str = " / ";

/// One original version identifier mapped to its converted equivalents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Version as published upstream
    pub original: String,
    /// Converted versions, in display order
    pub converted: Vec<String>,
}

impl VersionRecord {
    /// Create a new record
    #[must_use]
    pub fn new(original: impl Into<String>, converted: Vec<String>) -> Self {
        Self {
            original: original.into(),
            converted,
        }
    }

    /// Converted versions joined for single-line display
    #[must_use]
    pub fn converted_display(&self) -> String {
        self.converted.join(CONVERTED_SEPARATOR)
    }
}

/// All version records for one package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    /// Records in display order
    #[serde(default)]
    pub versions: Vec<VersionRecord>,
}

impl PackageEntry {
    /// Create an entry from records
    #[must_use]
    pub const fn new(versions: Vec<VersionRecord>) -> Self {
        Self { versions }
    }

    /// Number of version records
    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether the package has no version records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Highest converted version across all records
    ///
    /// Versions are compared as semantic versions; a leading `v` is accepted
    /// and anything that does not parse is skipped. Returns the version as it
    /// appears in the catalog.
    #[must_use]
    pub fn latest_converted(&self) -> Option<&str> {
        self.versions
            .iter()
            .flat_map(|record| record.converted.iter())
            .filter_map(|raw| parse_semver(raw).map(|parsed| (parsed, raw.as_str())))
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, raw)| raw)
    }
}

fn parse_semver(raw: &str) -> Option<semver::Version> {
    let trimmed = raw.strip_prefix('v').unwrap_or(raw);
    semver::Version::parse(trimmed).ok()
}

/// Mapping from package name to its version records
///
/// Key order is the order of the source document and defines the order of
/// the full name list used by search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionCatalog {
    packages: IndexMap<String, PackageEntry>,
}

impl VersionCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog document and validate it
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` for malformed JSON and
    /// `CatalogError::EmptyConversion` when a record has no converted versions.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that every record maps to at least one converted version
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyConversion` for the first offending record.
    pub fn validate(&self) -> Result<()> {
        for (name, entry) in &self.packages {
            if let Some(record) = entry.versions.iter().find(|r| r.converted.is_empty()) {
                return Err(CatalogError::EmptyConversion {
                    package: name.clone(),
                    original: record.original.clone(),
                });
            }
        }
        Ok(())
    }

    /// Look up a package entry
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PackageEntry> {
        self.packages.get(name)
    }

    /// Look up a package entry along with the catalog's copy of its name
    #[must_use]
    pub fn get_key_value(&self, name: &str) -> Option<(&str, &PackageEntry)> {
        self.packages
            .get_key_value(name)
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// Whether the catalog holds the named package
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Package names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    /// Number of packages
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the catalog has no packages
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, PackageEntry)> for VersionCatalog {
    fn from_iter<T: IntoIterator<Item = (N, PackageEntry)>>(iter: T) -> Self {
        Self {
            packages: iter
                .into_iter()
                .map(|(name, entry)| (name.into(), entry))
                .collect(),
        }
    }
}
