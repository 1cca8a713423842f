//! Ratatui-based catalog browser
//!
//! Terminal front end over [`CatalogList`](crate::browse::CatalogList),
//! using ratatui for widgets and crossterm for terminal control and events.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   Result<VersionCatalog>   ┌──────────────────┐
//! │  loader thread   │ ─────────────────────────▶ │  CatalogBrowser  │
//! └──────────────────┘    (crossbeam channel)     └────────┬─────────┘
//!                                                          │
//!                                    ┌─────────────────────┼──────────────┐
//!                                    ▼                     ▼              ▼
//!                              ┌───────────┐        ┌───────────┐  ┌───────────┐
//!                              │ AppState  │        │  Ratatui  │  │ Crossterm │
//!                              │ (browse)  │        │ (widgets) │  │  (events) │
//!                              └───────────┘        └───────────┘  └───────────┘
//! ```
//!
//! # Features
//!
//! - **Loading placeholder** until the catalog arrives
//! - **Live filtering** on every keystroke
//! - **Package cards** with the first two records and an "And N more..." affordance
//! - **Detail overlay** with every record of the selected package
//! - **Status bar** for messages and **help overlay** (F1)

mod browser;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use browser::{CatalogBrowser, CatalogReceiver, draw, receive_catalog};
pub use events::{EventResult, handle_key};
pub use state::{AppState, Mode, StatusMessage};
pub use theme::Theme;
