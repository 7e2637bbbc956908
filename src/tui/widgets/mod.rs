//! Rendering widgets for the course viewer.

mod header;
mod help;
mod nav;
mod section;

pub use header::render_header;
pub use help::{render_help, render_quit_confirm};
pub use nav::render_nav;
pub use section::render_section;

use ratatui::layout::Rect;

/// Centers a popup of the given percentage size within `area`, clamped to
/// sane character bounds.
pub fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (area.width * percent_x / 100).clamp(30, 70).min(area.width);
    let height = (area.height * percent_y / 100).clamp(8, 24).min(area.height);
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(area.x + x, area.y + y, width, height)
}
