//! Ratatui-based catalog browser
//!
//! Owns the terminal for the session. The catalog arrives on a channel from
//! the loader thread; until it does the content area shows a loading
//! placeholder while the query can already be typed.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{
    CARD_HEIGHT, DetailsModal, HelpBar, HelpOverlay, PackageList, SearchBar, StatusBar,
};
use crate::browse::CatalogView;
use crate::catalog::{self, CatalogError, VersionCatalog};
use crate::search::status_parts;
use crate::ui::error::Result;
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Channel the loader thread delivers the catalog on
pub type CatalogReceiver = Receiver<catalog::Result<VersionCatalog>>;

/// Interactive catalog browser
pub struct CatalogBrowser {
    theme: Theme,
    tick: Duration,
}

impl CatalogBrowser {
    /// Create a browser with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            tick: Duration::from_millis(50),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    /// Run the browser until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError::IoError` on terminal failures and
    /// `UiError::CatalogError` if the catalog could not be loaded.
    pub fn run(&self, mut state: AppState, catalog: &CatalogReceiver) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        tracing::info!("browser started");

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, &mut state, catalog);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!(error = %e, "terminal cleanup failed");
        }
        tracing::info!(ok = result.is_ok(), "browser stopped");

        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut AppState,
        catalog: &CatalogReceiver,
    ) -> Result<()> {
        loop {
            receive_catalog(state, catalog)?;
            state.cleanup_messages();

            terminal.draw(|frame| draw(frame, state, &self.theme))?;

            if poll_and_handle(state, self.tick)? == EventResult::QueryChanged {
                state.publish_query();
            }

            if state.should_exit {
                return Ok(());
            }
        }
    }
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new()
    }
}

/// Take the catalog off the channel once it is ready
///
/// Does nothing after the catalog has been installed.
///
/// # Errors
///
/// Returns the loader's error, or `CatalogError::LoaderDisconnected` if the
/// loader went away without sending.
pub fn receive_catalog(state: &mut AppState, catalog: &CatalogReceiver) -> Result<()> {
    if !state.is_loading() {
        return Ok(());
    }

    match catalog.try_recv() {
        Ok(result) => {
            state.set_catalog(result?);
            Ok(())
        }
        Err(TryRecvError::Empty) => Ok(()),
        Err(TryRecvError::Disconnected) => Err(CatalogError::LoaderDisconnected.into()),
    }
}

/// Render one frame
pub fn draw(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();
    let [search_area, content_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(CARD_HEIGHT + 2),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    state.set_visible_height(PackageList::cards_that_fit(content_area));

    let state = &*state;
    let view = state.view();
    let detail_open = state.is_detail_open();
    let policy = state.list.policy().as_str();

    let status = view.ready().map(|ready| {
        status_parts(
            &ready.search.query,
            ready.search.result_count,
            ready.search.total_count,
        )
    });
    let mut search_bar =
        SearchBar::new(&state.query, state.query_cursor, theme).focused(!detail_open);
    if let Some(parts) = status.as_deref() {
        search_bar = search_bar.with_status(parts);
    }
    frame.render_widget(search_bar, search_area);

    match &view {
        CatalogView::Loading => render_loading(frame, theme, content_area),
        CatalogView::Ready(ready) => frame.render_widget(
            PackageList::new(&ready.previews, theme).position(state.cursor, state.scroll_offset),
            content_area,
        ),
    }

    let messages = state.active_messages();
    frame.render_widget(StatusBar::new(&messages, theme, policy), status_area);

    let hints = if detail_open {
        HelpBar::detail_hints()
    } else {
        HelpBar::grid_hints()
    };
    frame.render_widget(HelpBar::new(&hints, theme), help_area);

    // Overlays
    if let Some(ready) = view.ready() {
        frame.render_widget(
            DetailsModal::new(&ready.detail, theme).scroll(state.detail_scroll),
            area,
        );
    }
    if state.mode == Mode::Help {
        frame.render_widget(HelpOverlay::new(theme, policy), area);
    }
}

fn render_loading(frame: &mut Frame, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Packages ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [middle] = Layout::vertical([Constraint::Length(1)])
        .flex(ratatui::layout::Flex::Center)
        .areas(inner);
    frame.render_widget(
        Paragraph::new("Loading...")
            .style(theme.dimmed_style())
            .alignment(Alignment::Center),
        middle,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PackageEntry, VersionRecord};
    use crate::search::MatchPolicy;
    use ratatui::backend::TestBackend;
    use std::sync::{Arc, Mutex};

    fn entry(count: usize) -> PackageEntry {
        PackageEntry::new(
            (0..count)
                .map(|i| VersionRecord::new(format!("1.{i}.0"), vec![format!("v0.{i}.0")]))
                .collect(),
        )
    }

    fn catalog() -> VersionCatalog {
        vec![
            ("left-pad", entry(3)),
            ("react", entry(1)),
            ("redux", entry(2)),
        ]
        .into_iter()
        .collect()
    }

    fn render(state: &mut AppState) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, state, &theme)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_loading_view_has_no_cards() {
        let mut state = AppState::new(MatchPolicy::default());
        let screen = render(&mut state);
        assert!(screen.contains("Loading..."));
        assert!(!screen.contains("packages found"));
    }

    #[test]
    fn test_ready_view_shows_status_and_cards() {
        let mut state = AppState::new(MatchPolicy::default());
        state.set_catalog(catalog());
        let screen = render(&mut state);

        assert!(screen.contains("3 packages found."));
        assert!(screen.contains("> left-pad"));
        assert!(screen.contains("And 1 more..."));
        assert!(!screen.contains("1.2.0"));
        assert!(!screen.contains("Loading..."));
    }

    #[test]
    fn test_filtered_view() {
        let mut state = AppState::new(MatchPolicy::default()).with_query("re");
        state.set_catalog(catalog());
        let screen = render(&mut state);

        assert!(screen.contains("2 results found from 3 packages."));
        assert!(!screen.contains("left-pad"));
    }

    #[test]
    fn test_detail_overlay_lists_all_records() {
        let mut state = AppState::new(MatchPolicy::default());
        state.set_catalog(catalog());
        state.activate_more();
        let screen = render(&mut state);

        assert!(screen.contains("1.2.0"));
        assert!(screen.contains("ESC:close"));
    }

    #[test]
    fn test_render_sets_visible_height() {
        let mut state = AppState::new(MatchPolicy::default());
        render(&mut state);
        // 30 rows minus search, status and help leave 23 rows, 21 inside the border
        assert_eq!(state.visible_height, 5);
    }

    /// Log sink shared between a test and its subscriber
    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogCapture {
        fn count(&self, needle: &str) -> usize {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .matches(needle)
                .count()
        }
    }

    #[test]
    fn test_idle_frames_reuse_filter_result() {
        let mut state = AppState::new(MatchPolicy::Fuzzy).with_query("re");
        state.set_catalog(catalog());

        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            for _ in 0..20 {
                render(&mut state);
            }
            assert_eq!(capture.count("filtered package names"), 0);

            state.query.push('d');
            state.publish_query();
            render(&mut state);
            render(&mut state);
        });

        assert_eq!(capture.count("filtered package names"), 1);
        assert_eq!(state.current_name(), Some("redux"));
    }

    #[test]
    fn test_receive_catalog() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let mut state = AppState::new(MatchPolicy::default());

        receive_catalog(&mut state, &rx).unwrap();
        assert!(state.is_loading());

        tx.send(Ok(catalog())).unwrap();
        receive_catalog(&mut state, &rx).unwrap();
        assert_eq!(state.visible_count(), 3);

        // Channel is not consulted again once loaded
        drop(tx);
        receive_catalog(&mut state, &rx).unwrap();
    }

    #[test]
    fn test_receive_catalog_error() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let mut state = AppState::new(MatchPolicy::default());
        tx.send(Err(CatalogError::LoaderDisconnected)).unwrap();
        assert!(receive_catalog(&mut state, &rx).is_err());
    }

    #[test]
    fn test_receive_catalog_disconnected() {
        let (tx, rx) = crossbeam_channel::bounded::<catalog::Result<VersionCatalog>>(1);
        drop(tx);
        let mut state = AppState::new(MatchPolicy::default());
        assert!(receive_catalog(&mut state, &rx).is_err());
    }
}
