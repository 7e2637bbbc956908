//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    pub const NAV_ACTIVE: Color = Color::Cyan;
    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::DarkGray;

    pub const CODE: Color = Color::Green;
    pub const CARD_TITLE: Color = Color::Yellow;
    pub const PROGRESS: Color = Color::Cyan;
    pub const CHECKED: Color = Color::Green;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Item-cursor highlight (the interactive-element affordance).
    pub fn cursor() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active nav entry.
    pub fn nav_active() -> Style {
        Style::default()
            .fg(Theme::NAV_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab label.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab label.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    /// Dimmed text style. Also the pre-reveal state of cards.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Code listing text.
    pub fn code() -> Style {
        Style::default().fg(Theme::CODE)
    }

    /// Code listing selected for copying.
    pub fn code_selected() -> Style {
        Style::default()
            .fg(Theme::CODE)
            .add_modifier(Modifier::REVERSED)
    }

    /// Card title style.
    pub fn card_title() -> Style {
        Style::default()
            .fg(Theme::CARD_TITLE)
            .add_modifier(Modifier::BOLD)
    }

    /// Checked checklist entry.
    pub fn checked() -> Style {
        Style::default().fg(Theme::CHECKED)
    }

    /// Progress figure in the header.
    pub fn progress() -> Style {
        Style::default()
            .fg(Theme::PROGRESS)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Search input line.
    pub fn search_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Help/footer text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Highlighted keys in the footer hint line.
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }
}
