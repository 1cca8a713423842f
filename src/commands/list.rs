//! List command - print the status line and a card per matching package

use crate::{
    VermapError,
    browse::{CatalogList, CatalogListener},
    catalog::VersionCatalog,
    search::MatchPolicy,
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, VermapError>;

/// Execute the list command
///
/// Cards are separated by a blank line and appear in catalog order.
///
/// # Errors
///
/// Currently infallible; the signature matches the other commands.
pub fn execute(
    catalog: &VersionCatalog,
    query: Option<&str>,
    policy: MatchPolicy,
    output: &dyn OutputWriter,
    color: bool,
) -> Result<()> {
    let mut list = CatalogList::new(policy);
    if let Some(query) = query {
        list.on_query_changed(query);
    }

    let view = list.view(Some(catalog));
    let Some(ready) = view.ready() else {
        return Ok(());
    };

    output.write(&crate::output::format_status(&ready.search, color));
    for preview in &ready.previews {
        output.write("");
        for line in crate::output::format_preview(preview, color) {
            output.write(&line);
        }
    }
    Ok(())
}
