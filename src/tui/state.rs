//! TUI application state.
//!
//! Wraps the pure [`ViewState`] with terminal-only concerns: input mode,
//! the search line, popups, and render-derived measurements.

use std::time::{Duration, Instant};

use crate::content::Course;
use crate::view::{Debouncer, ViewState};

/// Delay before the search binding becomes available after startup.
pub const SEARCH_ATTACH_DELAY: Duration = Duration::from_secs(1);

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Full TUI state.
pub struct AppState {
    pub view: ViewState,
    pub input_mode: InputMode,

    /// Current contents of the search line.
    pub search_input: String,
    /// Debounced filter execution.
    pub debouncer: Debouncer,
    /// When the `/` binding becomes live (deferred attach).
    pub search_ready_at: Instant,
    pub search_enabled: bool,

    /// One-line status shown in the footer until the next key.
    pub status_message: Option<String>,

    pub show_help: bool,
    pub help_scroll: usize,
    pub show_quit_confirm: bool,

    /// Content panel height from the last render, for paging.
    pub viewport_height: u16,
    /// Rendered content line count from the last render, for clamping.
    pub content_height: u16,
}

impl AppState {
    pub fn new(course: &Course, now: Instant) -> Self {
        Self {
            view: ViewState::new(course),
            input_mode: InputMode::Normal,
            search_input: String::new(),
            debouncer: Debouncer::new(),
            search_ready_at: now + SEARCH_ATTACH_DELAY,
            search_enabled: false,
            status_message: None,
            show_help: false,
            help_scroll: 0,
            show_quit_confirm: false,
            viewport_height: 0,
            content_height: 0,
        }
    }

    /// Page size for PageUp/PageDown, based on the last rendered viewport.
    pub fn page_size(&self) -> i32 {
        (self.viewport_height.max(4) as i32) - 2
    }
}
