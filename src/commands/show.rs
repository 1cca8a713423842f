//! Show command - print every version record of one package

use crate::{
    VermapError,
    browse::{CatalogList, CatalogListener},
    catalog::VersionCatalog,
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, VermapError>;

/// Execute the show command
///
/// # Errors
///
/// Returns `VermapError::PackageNotFound` if `name` is not a catalog key.
/// Names are matched exactly.
pub fn execute(
    catalog: &VersionCatalog,
    name: &str,
    output: &dyn OutputWriter,
    color: bool,
) -> Result<()> {
    if !catalog.contains(name) {
        return Err(VermapError::PackageNotFound(name.to_string()));
    }

    let mut list = CatalogList::default();
    list.on_detail_requested(name);

    let view = list.view(Some(catalog));
    let Some(ready) = view.ready() else {
        return Ok(());
    };

    for line in crate::output::format_detail(&ready.detail, color) {
        output.write(&line);
    }
    if ready.detail.records().is_empty() {
        output.info("No version records");
    }
    Ok(())
}
