//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to state changes. Keys are routed by what
//! is on screen: the help overlay swallows everything, the detail surface
//! takes scroll and close keys, and otherwise keys go to the grid and the
//! query editor.

use super::state::{AppState, Mode};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Exit the browser
    Quit,
    /// Query text changed and must be published
    QueryChanged,
    /// No action taken
    Ignored,
}

/// Route a key event to the handler for the current surface
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.quit();
        return EventResult::Quit;
    }

    if state.mode == Mode::Help {
        return handle_help_mode(state);
    }
    if state.is_detail_open() {
        return handle_detail_mode(state, key);
    }
    handle_normal_mode(state, key)
}

/// Handle events while browsing the grid
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            state.quit();
            EventResult::Quit
        }

        // Disclosure
        (KeyCode::Enter, _) => {
            state.activate_more();
            EventResult::Continue
        }
        (KeyCode::Right, _) if state.query_cursor >= state.query.len() => {
            state.activate_more();
            EventResult::Continue
        }

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Help overlay; `?` only until the query has text
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        (KeyCode::Char('?'), _) if state.query.is_empty() => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => {
            if state.query_cursor == 0 {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Delete, _) => {
            if state.query_cursor >= state.query.len() {
                EventResult::Ignored
            } else {
                state.query_delete();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            if state.query.is_empty() {
                EventResult::Ignored
            } else {
                state.query_clear();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            if state.query_cursor == 0 {
                EventResult::Ignored
            } else {
                state.query_delete_word();
                EventResult::QueryChanged
            }
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while the detail surface is open
fn handle_detail_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Left | KeyCode::Char('q') => {
            state.close_detail();
            EventResult::Continue
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.detail_scroll_up();
            EventResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.detail_scroll_down();
            EventResult::Continue
        }
        KeyCode::F(1) | KeyCode::Char('?') => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
const fn handle_help_mode(state: &mut AppState) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match (mouse.kind, state.is_detail_open()) {
        (MouseEventKind::ScrollUp, false) => {
            state.cursor_up();
            EventResult::Continue
        }
        (MouseEventKind::ScrollDown, false) => {
            state.cursor_down();
            EventResult::Continue
        }
        (MouseEventKind::ScrollUp, true) => {
            state.detail_scroll_up();
            EventResult::Continue
        }
        (MouseEventKind::ScrollDown, true) => {
            state.detail_scroll_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
