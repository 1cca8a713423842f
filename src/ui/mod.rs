//! User interface layer
//!
//! Plain commands report through the [`OutputWriter`] trait so they can
//! print to a terminal or be captured in tests. The interactive browser lives
//! in [`ratatui_adapter`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Browse core                        │
//! │   (CatalogList, previews, detail)       │
//! └────────────────┬────────────────────────┘
//!                  │ Rendered by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Text output   │  │ TUI               │
//! │ - list/show   │  │ - CatalogBrowser  │
//! │ - Stdout      │  │   (ratatui)       │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use vermap::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new(false);
//! output.success("Configuration written");
//! output.error("Package 'zlib' not found");
//! output.warning("Catalog has no packages");
//! output.info("Reading catalog.json");
//! ```

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::{AppState, CatalogBrowser};
