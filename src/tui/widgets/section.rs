//! Active-section content panel.
//!
//! Builds a styled line list from the section's blocks, applies the item
//! cursor and reveal/selection highlights, and renders it behind the
//! eased scroll offset. Cards entering the viewport for the first time are
//! marked revealed here, since only the renderer knows what is on screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::content::{Block as ContentBlock, Section};
use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::util::wrap_text;
use crate::view::{Item, REVEAL_FRAMES};

/// Rows above the viewport bottom a card must clear before it counts as
/// "scrolled into view" (the reveal margin).
const REVEAL_MARGIN: u16 = 2;

/// Renders the active section.
pub fn render_section(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    section: &Section,
    section_idx: usize,
) {
    let block = Block::default()
        .title(format!(" {} ", section.title))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.max(4) as usize - 2;
    let cursor = state.view.cursor_item();

    let mut lines: Vec<Line> = Vec::new();
    // First rendered line of each card, for reveal detection.
    let mut card_lines: Vec<(usize, usize)> = Vec::new();

    for (block_idx, content) in section.blocks.iter().enumerate() {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        match content {
            ContentBlock::Text { body } => {
                for text_line in wrap_text(body, width) {
                    lines.push(Line::from(Span::styled(text_line, Styles::default())));
                }
            }

            ContentBlock::Code { lang, source } => {
                let selected = state.view.is_code_selected(section_idx, block_idx);
                let on_cursor = cursor == Some(Item::Code { block: block_idx });
                let header = if lang.is_empty() {
                    "── code ──".to_string()
                } else {
                    format!("── code ({}) ──", lang)
                };
                lines.push(Line::from(Span::styled(
                    header,
                    if on_cursor { Styles::cursor() } else { Styles::dim() },
                )));
                let body_style = if selected {
                    Styles::code_selected()
                } else {
                    Styles::code()
                };
                for code_line in source.split('\n') {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", code_line),
                        body_style,
                    )));
                }
            }

            ContentBlock::Card { title, body } => {
                card_lines.push((block_idx, lines.len()));
                let revealed = state
                    .view
                    .card_reveal(section_idx, block_idx)
                    .is_some_and(|p| p >= REVEAL_FRAMES);
                let (title_style, body_style) = if revealed {
                    (Styles::card_title(), Styles::default())
                } else {
                    (Styles::dim(), Styles::dim())
                };
                lines.push(Line::from(Span::styled(format!("▌ {}", title), title_style)));
                for text_line in wrap_text(body, width.saturating_sub(2).max(1)) {
                    lines.push(Line::from(Span::styled(
                        format!("▌ {}", text_line),
                        body_style,
                    )));
                }
            }

            ContentBlock::Tabs { group, tabs } => {
                let active = state.view.active_tab(section_idx, block_idx).unwrap_or(0);
                let mut spans = vec![Span::styled(
                    format!("{}: ", group.name()),
                    Styles::dim(),
                )];
                for (tab_idx, tab) in tabs.iter().enumerate() {
                    if tab_idx > 0 {
                        spans.push(Span::styled(" │ ", Styles::dim()));
                    }
                    let style = if tab_idx == active {
                        Styles::tab_active()
                    } else {
                        Styles::tab_inactive()
                    };
                    spans.push(Span::styled(tab.label.clone(), style));
                }
                lines.push(Line::from(spans));
                if let Some(panel) = tabs.get(active) {
                    for text_line in wrap_text(&panel.body, width.saturating_sub(2).max(1)) {
                        lines.push(Line::from(Span::styled(
                            format!("  {}", text_line),
                            Styles::default(),
                        )));
                    }
                }
            }

            ContentBlock::Layer { title, detail } => {
                let expanded = state.view.is_layer_expanded(section_idx, block_idx);
                let on_cursor = cursor == Some(Item::Layer { block: block_idx });
                let arrow = if expanded { "▾" } else { "▸" };
                let style = if on_cursor {
                    Styles::cursor()
                } else {
                    Styles::default()
                };
                lines.push(Line::from(Span::styled(
                    format!("{} {}", arrow, title),
                    style,
                )));
                if expanded {
                    for text_line in wrap_text(detail, width.saturating_sub(2).max(1)) {
                        lines.push(Line::from(Span::styled(
                            format!("  {}", text_line),
                            Styles::default(),
                        )));
                    }
                }
            }

            ContentBlock::Checklist { items } => {
                for (item_idx, label) in items.iter().enumerate() {
                    let checked = state.view.is_checked(section_idx, block_idx, item_idx);
                    let on_cursor = cursor
                        == Some(Item::Check {
                            block: block_idx,
                            item: item_idx,
                        });
                    let mark = if checked { "[x]" } else { "[ ]" };
                    let style = if on_cursor {
                        Styles::cursor()
                    } else if checked {
                        Styles::checked()
                    } else {
                        Styles::default()
                    };
                    lines.push(Line::from(Span::styled(
                        format!("{} {}", mark, label),
                        style,
                    )));
                }
            }
        }
    }

    // Measurements for paging and scroll clamping.
    let total = lines.len() as u16;
    state.content_height = total;
    state.viewport_height = inner.height;
    state
        .view
        .clamp_scroll(total.saturating_sub(inner.height));

    // One-shot reveal: a card whose first line has entered the viewport
    // (less the bottom margin) starts fading in.
    let scroll = state.view.scroll();
    let visible_bottom = scroll + inner.height.saturating_sub(REVEAL_MARGIN);
    for (block_idx, first_line) in card_lines {
        let line = first_line as u16;
        if line >= scroll && line < visible_bottom {
            state.view.reveal_card(section_idx, block_idx);
        }
    }

    let paragraph = Paragraph::new(lines).scroll((state.view.scroll(), 0));
    frame.render_widget(paragraph, inner);
}
