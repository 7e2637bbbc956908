//! Navigation sidebar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::content::Course;
use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the section list. Sections filtered out by search are omitted,
/// the terminal analogue of `display: none`.
pub fn render_nav(frame: &mut Frame, area: Rect, state: &AppState, course: &Course) {
    let title = match state.view.filter() {
        Some(term) => format!(" Sections (filter: {}) ", term),
        None => " Sections ".to_string(),
    };

    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (index, section) in course.sections.iter().enumerate() {
        if !state.view.is_visible(index) {
            continue;
        }
        let active = index == state.view.active_section();
        let marker = if active { "▶ " } else { "  " };
        let style = if active {
            Styles::nav_active()
        } else {
            Styles::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{}{} {}", marker, index + 1, section.title),
            style,
        )));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled("  no matches", Styles::dim())));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
