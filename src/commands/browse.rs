//! Browse command - interactive package browser

use crate::{
    VermapError,
    catalog::load_in_background,
    search::MatchPolicy,
    ui::{AppState, CatalogBrowser},
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, VermapError>;

/// Execute the browse command
///
/// The catalog is read on a worker thread while the first frames are drawn.
///
/// # Errors
///
/// Returns `VermapError::Ui` if the terminal fails or the catalog cannot be
/// loaded.
pub fn execute(catalog_path: PathBuf, query: Option<&str>, policy: MatchPolicy) -> Result<()> {
    tracing::debug!(path = %catalog_path.display(), ?policy, "starting browser");
    let catalog = load_in_background(catalog_path);

    let mut state = AppState::new(policy);
    if let Some(query) = query {
        state = state.with_query(query);
    }

    CatalogBrowser::new().run(state, &catalog)?;
    Ok(())
}
