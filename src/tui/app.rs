//! Main TUI application.

use std::io;
use std::time::{Duration, Instant};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::warn;

use crate::content::Course;
use crate::export;
use crate::persist::ProgressStore;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    course: Course,
    state: AppState,
    store: ProgressStore,
    /// Section id last written to the store, to save only on change.
    last_saved: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new App over the given course and progress store.
    pub fn new(course: Course, store: ProgressStore) -> Self {
        let state = AppState::new(&course, Instant::now());
        Self {
            course,
            state,
            store,
            last_saved: None,
            should_quit: false,
        }
    }

    /// Restores the persisted section if it still exists in the course;
    /// otherwise the authored first section stays active.
    pub fn restore_progress(&mut self) {
        if let Some(id) = self.store.load_section()
            && self.state.view.select_section(&id)
        {
            self.last_saved = Some(id);
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &mut self.state, &self.course))?;

            match events.next() {
                Ok(Event::Tick) => self.tick(),
                Ok(Event::Key(key)) => {
                    match handle_key(&mut self.state, key, Instant::now()) {
                        KeyAction::Quit => self.should_quit = true,
                        KeyAction::Export => self.export(),
                        KeyAction::None => {}
                    }
                    self.persist_if_changed();
                }
                Ok(Event::Resize(..)) => {
                    // Widths are derived from the frame on every draw.
                }
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Timer tick: debounce polling and animations.
    fn tick(&mut self) {
        let now = Instant::now();

        // Deferred search attach.
        if !self.state.search_enabled && now >= self.state.search_ready_at {
            self.state.search_enabled = true;
        }

        // Trailing debounce: the filter runs here, not on the keystroke.
        if let Some(term) = self.state.debouncer.poll(now) {
            self.state.view.apply_filter(&term);
        }

        self.state.view.tick_scroll();
        self.state.view.tick_reveals();
    }

    /// Writes the active section to the store when it changed.
    fn persist_if_changed(&mut self) {
        let current = self.state.view.active_section_id();
        if self.last_saved.as_deref() != Some(current) {
            self.store.save_section(current);
            self.last_saved = Some(current.to_string());
        }
    }

    fn export(&mut self) {
        match export::export(&self.course) {
            Ok(path) => {
                self.state.status_message = Some(format!("Course written to {}", path));
            }
            Err(e) => {
                warn!("course export failed: {}", e);
                self.state.status_message = Some(format!("Export failed: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_persist_on_section_change_and_restore() {
        let dir = tempdir().unwrap();

        {
            let store = ProgressStore::new(dir.path());
            let mut app = App::new(Course::sample(), store);
            app.state.view.select_section("features");
            app.persist_if_changed();
        }

        // A fresh app over the same store resumes at the saved section.
        let store = ProgressStore::new(dir.path());
        let mut app = App::new(Course::sample(), store);
        assert_eq!(app.state.view.active_section_id(), "introduction");
        app.restore_progress();
        assert_eq!(app.state.view.active_section_id(), "features");
    }

    #[test]
    fn test_restore_ignores_unknown_section() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());
        store.save_section("section-from-another-course");

        let mut app = App::new(Course::sample(), ProgressStore::new(dir.path()));
        app.restore_progress();
        // Authored default stays active.
        assert_eq!(app.state.view.active_section_id(), "introduction");
    }

    #[test]
    fn test_persist_skips_unchanged_section() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());
        let mut app = App::new(Course::sample(), store);

        // Nothing selected yet: first call records the default section.
        app.persist_if_changed();
        assert_eq!(app.last_saved.as_deref(), Some("introduction"));
        app.persist_if_changed();
        assert_eq!(app.last_saved.as_deref(), Some("introduction"));
    }
}
