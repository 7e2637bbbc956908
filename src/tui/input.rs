//! Input handling and keybindings.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::content::TabGroupKind;

use super::state::{AppState, InputMode};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Export the course to a text file.
    Export,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> KeyAction {
    // Any keypress clears a stale status line.
    state.status_message = None;

    if state.show_quit_confirm {
        return handle_quit_confirm(state, key);
    }
    if state.show_help {
        return handle_help(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Search => handle_search_mode(state, key, now),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('y') => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.show_quit_confirm = false;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.show_help = false;
            state.help_scroll = 0;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.help_scroll += 1;
        }
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.show_quit_confirm = true;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Section navigation. The arrow keys are consumed here; they never
        // fall through to viewport scrolling.
        KeyCode::Right | KeyCode::Down => {
            state.view.next_section();
            KeyAction::None
        }
        KeyCode::Left | KeyCode::Up => {
            state.view.prev_section();
            KeyAction::None
        }

        // Direct section jump.
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some(id) = state.view.section_id(index).map(str::to_string) {
                state.view.select_section(&id);
            }
            KeyAction::None
        }

        // Tab group cycling.
        KeyCode::Char('f') | KeyCode::Char('F') => {
            if !state.view.cycle_tab(TabGroupKind::Feature) {
                state.status_message = Some("No feature tabs in this section".to_string());
            }
            KeyAction::None
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            if !state.view.cycle_tab(TabGroupKind::Example) {
                state.status_message = Some("No example tabs in this section".to_string());
            }
            KeyAction::None
        }

        // Item cursor over layers, checklists, code blocks.
        KeyCode::Tab => {
            state.view.cursor_next();
            KeyAction::None
        }
        KeyCode::BackTab => {
            state.view.cursor_prev();
            KeyAction::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.view.activate_cursor();
            KeyAction::None
        }

        // Viewport scrolling (smooth; the target eases in on ticks).
        KeyCode::PageDown => {
            state.view.scroll_by(state.page_size());
            KeyAction::None
        }
        KeyCode::PageUp => {
            state.view.scroll_by(-state.page_size());
            KeyAction::None
        }
        KeyCode::Home => {
            state.view.scroll_to(0);
            KeyAction::None
        }
        KeyCode::End => {
            state.view.scroll_to(state.content_height);
            KeyAction::None
        }

        // Search (attached shortly after startup).
        KeyCode::Char('/') => {
            if state.search_enabled {
                state.input_mode = InputMode::Search;
            } else {
                state.status_message = Some("Search is not ready yet".to_string());
            }
            KeyAction::None
        }

        KeyCode::Char('p') => KeyAction::Export,

        KeyCode::Char('?') => {
            state.show_help = true;
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

fn handle_search_mode(state: &mut AppState, key: KeyEvent, now: Instant) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            // Cancel: clear the term and show everything again.
            state.input_mode = InputMode::Normal;
            state.search_input.clear();
            state.debouncer.cancel();
            state.view.apply_filter("");
        }
        KeyCode::Enter => {
            // Confirm: apply immediately instead of waiting out the window.
            state.input_mode = InputMode::Normal;
            state.debouncer.cancel();
            let term = state.search_input.clone();
            state.view.apply_filter(&term);
        }
        KeyCode::Backspace => {
            state.search_input.pop();
            let term = state.search_input.clone();
            state.debouncer.input(&term, now);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.search_input.push(c);
            let term = state.search_input.clone();
            state.debouncer.input(&term, now);
        }
        _ => {}
    }
    KeyAction::None
}
