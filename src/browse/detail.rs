//! Full version list of the selected package
//!
//! The detail surface does not own its open state. It is bound to the
//! current [`SelectionState`] and hides itself when closed or when the
//! selected name is not in the catalog.

use super::listener::CatalogListener;
use super::state::SelectionState;
use crate::catalog::{PackageEntry, VersionCatalog, VersionRecord};

/// Detail surface bound to a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailView<'a> {
    open: bool,
    package: Option<(&'a str, &'a PackageEntry)>,
}

impl<'a> DetailView<'a> {
    /// Bind the detail surface to `selection` over `catalog`
    #[must_use]
    pub fn bind(selection: &SelectionState, catalog: &'a VersionCatalog) -> Self {
        let package = selection
            .selected_name
            .as_deref()
            .and_then(|name| catalog.get_key_value(name));

        if selection.detail_open && package.is_none() {
            tracing::debug!(
                selected = ?selection.selected_name,
                "selected package not in catalog, detail hidden"
            );
        }

        Self {
            open: selection.detail_open,
            package,
        }
    }

    /// Whether the surface is shown
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.open && self.package.is_some()
    }

    /// Name of the shown package
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.visible_package().map(|(name, _)| name)
    }

    /// Every version record of the shown package, in order
    ///
    /// Empty while hidden.
    #[must_use]
    pub fn records(&self) -> &'a [VersionRecord] {
        self.visible_package()
            .map(|(_, entry)| entry.versions.as_slice())
            .unwrap_or_default()
    }

    /// Highest converted version of the shown package
    #[must_use]
    pub fn latest_converted(&self) -> Option<&'a str> {
        self.visible_package()
            .and_then(|(_, entry)| entry.latest_converted())
    }

    /// Dismiss the surface
    ///
    /// Only notifies `listener`; the owner flips the open flag.
    pub fn close<L: CatalogListener + ?Sized>(&self, listener: &mut L) {
        listener.on_detail_closed();
    }

    fn visible_package(&self) -> Option<(&'a str, &'a PackageEntry)> {
        if self.open { self.package } else { None }
    }
}
