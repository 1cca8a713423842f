//! Command implementations
//!
//! Each command is a module with an `execute` function that takes the parsed
//! arguments and reports through an [`OutputWriter`](crate::ui::OutputWriter).

use crate::{
    VermapError,
    catalog::{VersionCatalog, load_catalog},
    config::VermapConfig,
};

pub mod browse;
pub mod config;
pub mod list;
pub mod show;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use config::execute as config;
pub use list::execute as list;
pub use show::execute as show;

/// Load the catalog named by the effective configuration
///
/// Progress is logged rather than printed so command output stays clean.
///
/// # Errors
///
/// Returns `VermapError::NoCatalog` when no catalog path is configured, or
/// the loader's error.
pub fn open_catalog(config: &VermapConfig) -> Result<VersionCatalog, VermapError> {
    let path = config.catalog_path.as_deref().ok_or(VermapError::NoCatalog)?;
    tracing::info!(path = %path.display(), "reading catalog");
    Ok(load_catalog(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_catalog_without_path() {
        let config = VermapConfig::default();
        assert!(matches!(open_catalog(&config), Err(VermapError::NoCatalog)));
    }

    #[test]
    fn test_open_catalog_then_list_prints_only_results() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("versions.json");
        fs::write(
            &path,
            r#"{"react": {"versions": [{"original": "18.2.0", "converted": ["v1.0.0"]}]}}"#,
        )
        .unwrap();
        let config = VermapConfig {
            catalog_path: Some(path),
            ..VermapConfig::default()
        };

        let output = crate::ui::BufferWriter::new();
        let catalog = open_catalog(&config).unwrap();
        list(&catalog, Some("re"), config.match_policy, &output, false).unwrap();

        let messages = output.messages();
        assert!(messages.iter().all(|(level, _)| *level == crate::ui::MessageLevel::Normal));
        assert_eq!(messages[0].1, "1 results found from 1 packages.");
        assert_eq!(messages.len(), 4);
    }
}
