//! Ratatui widgets for the catalog browser

mod details_modal;
mod help_bar;
mod help_overlay;
mod package_list;
mod search_bar;
mod status_bar;

pub use details_modal::DetailsModal;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use package_list::{CARD_HEIGHT, PackageList};
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
