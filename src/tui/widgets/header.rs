//! Header bar: course title and progress.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the one-line header with the course title on the left and the
/// reading progress on the right.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState, title: &str) {
    let progress = format!(
        " {}/{} · {}% ",
        state.view.active_section() + 1,
        state.view.section_count(),
        state.view.progress_percent()
    );

    let title_text = format!(" {}", title);
    let pad = (area.width as usize)
        .saturating_sub(title_text.chars().count() + progress.chars().count());

    let line = Line::from(vec![
        Span::styled(title_text, Styles::header()),
        Span::styled(" ".repeat(pad), Styles::header()),
        Span::styled(progress, Styles::progress()),
    ]);

    frame.render_widget(Paragraph::new(line).style(Styles::header()), area);
}
