//! Help and quit-confirmation popups.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

use super::popup_area;

const BINDINGS: &[(&str, &str)] = &[
    ("→ ↓", "next section (wraps)"),
    ("← ↑", "previous section (wraps)"),
    ("1-9", "jump to section"),
    ("Tab / Shift-Tab", "move between layers, checklist items, code"),
    ("Enter / Space", "expand layer, toggle item, select code"),
    ("f", "cycle feature tabs"),
    ("x", "cycle example tabs"),
    ("PgUp / PgDn", "scroll content"),
    ("Home / End", "top / bottom of section"),
    ("/", "search the course (min. 2 characters)"),
    ("p", "export course to text file"),
    ("?", "this help"),
    ("q", "quit"),
];

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup = popup_area(area, 60, 70);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Bindings
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let mut content: Vec<Line> = Vec::new();
    for (key, what) in BINDINGS {
        content.push(Line::from(vec![
            Span::styled(format!("{:<16}", key), Styles::help_key()),
            Span::styled(*what, Styles::default()),
        ]));
    }
    content.push(Line::default());
    content.push(Line::from(Span::styled(
        "Progress is saved automatically; reopening the course resumes \
         where you left off.",
        Styles::help(),
    )));

    let max_scroll = content.len().saturating_sub(chunks[0].height as usize);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, chunks[0]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " ↑/↓ scroll · Esc close",
            Styles::help(),
        ))),
        chunks[1],
    );
}

/// Renders the quit confirmation dialog.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let width = 34.min(area.width);
    let height = 5.min(area.height);
    let popup = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Quit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled("Leave the course?", Styles::default())),
        Line::from(vec![
            Span::styled("y", Styles::help_key()),
            Span::styled("/Enter quit · ", Styles::help()),
            Span::styled("n", Styles::help_key()),
            Span::styled("/Esc stay", Styles::help()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
