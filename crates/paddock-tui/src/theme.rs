//! Dusk-pasture palette and semantic styling for the console.

use ratatui::style::{Color, Modifier, Style};

// ── Core palette ──────────────────────────────────────────────────────

pub const MEADOW_GREEN: Color = Color::Rgb(135, 217, 108); // #87d96c
pub const WHEAT_GOLD: Color = Color::Rgb(232, 212, 77); // #e8d44d
pub const SKY_BLUE: Color = Color::Rgb(110, 198, 255); // #6ec6ff
pub const CLAY_ORANGE: Color = Color::Rgb(255, 158, 100); // #ff9e64
pub const SUCCESS_GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99); // #ff6363

// ── Extended palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(200, 204, 212); // #c8ccd4
pub const BORDER_GRAY: Color = Color::Rgb(92, 99, 112); // #5c6370
pub const BG_HIGHLIGHT: Color = Color::Rgb(44, 49, 58); // #2c313a
pub const BG_DARK: Color = Color::Rgb(33, 37, 43); // #21252b

// ── Semantic styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(SKY_BLUE).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(MEADOW_GREEN)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(SKY_BLUE)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Selected / highlighted table row.
pub fn table_selected() -> Style {
    Style::default()
        .fg(MEADOW_GREEN)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default()
        .fg(MEADOW_GREEN)
        .add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(SKY_BLUE).add_modifier(Modifier::BOLD)
}

/// Toast styling per alert kind.
pub fn alert_success() -> Style {
    Style::default().fg(SUCCESS_GREEN).bg(BG_DARK)
}

pub fn alert_error() -> Style {
    Style::default().fg(ERROR_RED).bg(BG_DARK)
}

pub fn alert_warning() -> Style {
    Style::default().fg(CLAY_ORANGE).bg(BG_DARK)
}
