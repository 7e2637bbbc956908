//! Main rendering logic for the TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::content::Course;

use super::state::{AppState, InputMode};
use super::style::Styles;
use super::widgets::{render_header, render_help, render_nav, render_quit_confirm, render_section};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState, course: &Course) {
    let area = frame.area();

    // Main layout: header, body, footer.
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(5),    // Nav + content
        Constraint::Length(1), // Footer / search line
    ])
    .split(area);

    render_header(frame, chunks[0], state, &course.title);

    // Body: navigation sidebar + active section.
    let body = Layout::horizontal([
        Constraint::Length(26), // Sidebar
        Constraint::Min(20),    // Content
    ])
    .split(chunks[1]);

    render_nav(frame, body[0], state, course);

    let active = state.view.active_section();
    if let Some(section) = course.sections.get(active) {
        render_section(frame, body[1], state, section, active);
    }

    render_footer(frame, chunks[2], state);

    // Popups overlay everything.
    if state.show_help {
        render_help(frame, area, &mut state.help_scroll);
    }
    if state.show_quit_confirm {
        render_quit_confirm(frame, area);
    }
}

/// Renders the footer: search line in search mode, otherwise a status
/// message or the key hints.
fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = if state.input_mode == InputMode::Search {
        Line::from(vec![
            Span::styled(" /", Styles::help_key()),
            Span::styled(state.search_input.clone(), Styles::search_input()),
            Span::styled("█", Styles::dim()),
        ])
    } else if let Some(message) = &state.status_message {
        Line::from(Span::styled(format!(" {}", message), Styles::default()))
    } else {
        Line::from(vec![
            Span::styled(" ←/→", Styles::help_key()),
            Span::styled(" sections  ", Styles::help()),
            Span::styled("Tab", Styles::help_key()),
            Span::styled(" items  ", Styles::help()),
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" toggle  ", Styles::help()),
            Span::styled("f/x", Styles::help_key()),
            Span::styled(" tabs  ", Styles::help()),
            Span::styled("/", Styles::help_key()),
            Span::styled(" search  ", Styles::help()),
            Span::styled("p", Styles::help_key()),
            Span::styled(" print  ", Styles::help()),
            Span::styled("?", Styles::help_key()),
            Span::styled(" help  ", Styles::help()),
            Span::styled("q", Styles::help_key()),
            Span::styled(" quit", Styles::help()),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}
