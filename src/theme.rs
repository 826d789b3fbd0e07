//! Kanagawa Dragon theme.
//!
//! Low-contrast, warm, dark palette. Status colors: green for completed,
//! amber for in progress, gray for planned.

#![allow(dead_code)]

use ratatui::style::Color;

pub mod colors {
    use super::Color;

    /// Dragon Black - primary background
    pub const BG_DARK: Color = Color::Rgb(0x18, 0x16, 0x16);
    /// Card background
    pub const BG_MEDIUM: Color = Color::Rgb(0x1D, 0x1C, 0x19);
    /// Background for highlighted areas
    pub const BG_HIGHLIGHT: Color = Color::Rgb(0x28, 0x27, 0x27);

    /// Old White - primary text
    pub const FG_PRIMARY: Color = Color::Rgb(0xC5, 0xC9, 0xC5);
    /// Secondary text
    pub const FG_DIM: Color = Color::Rgb(0x72, 0x71, 0x69);
    /// Hints and placeholders
    pub const FG_HINT: Color = Color::Rgb(0x54, 0x54, 0x54);

    /// Dragon Green
    pub const GREEN: Color = Color::Rgb(0x8A, 0x9A, 0x7B);
    /// Carp Yellow
    pub const YELLOW: Color = Color::Rgb(0xC4, 0xB2, 0x8A);
    /// Dragon Blue
    pub const BLUE: Color = Color::Rgb(0x8B, 0xA4, 0xB0);
    /// Light Blue
    pub const BLUE_LIGHT: Color = Color::Rgb(0x7F, 0xB4, 0xCA);
    /// Purple
    pub const PURPLE: Color = Color::Rgb(0x95, 0x7F, 0xB8);

    /// Dim border
    pub const BORDER_DIM: Color = Color::Rgb(0x3A, 0x3A, 0x3A);
    /// Border for the selected card
    pub const BORDER_ACCENT: Color = Color::Rgb(0x8B, 0xA4, 0xB0);

    /// Completed phase badge
    pub const STATUS_COMPLETED: Color = GREEN;
    /// In-progress phase badge
    pub const STATUS_IN_PROGRESS: Color = YELLOW;
    /// Planned phase badge
    pub const STATUS_PLANNED: Color = FG_DIM;
}

/// Semantic styling helpers
pub mod styles {
    use super::colors;
    use ratatui::style::{Color, Modifier, Style};

    /// Primary text
    pub fn text() -> Style {
        Style::default().fg(colors::FG_PRIMARY)
    }

    /// Dimmed/secondary text
    pub fn text_dim() -> Style {
        Style::default().fg(colors::FG_DIM)
    }

    /// Hint text (key bindings, footer)
    pub fn text_hint() -> Style {
        Style::default().fg(colors::FG_HINT)
    }

    /// Page title
    pub fn title() -> Style {
        Style::default()
            .fg(colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent titles (section headers, block titles)
    pub fn title_accent() -> Style {
        Style::default()
            .fg(colors::BLUE)
            .add_modifier(Modifier::BOLD)
    }

    /// Unfocused card border
    pub fn border() -> Style {
        Style::default().fg(colors::BORDER_DIM)
    }

    /// Border of the card under the cursor
    pub fn border_focused() -> Style {
        Style::default().fg(colors::BORDER_ACCENT)
    }

    /// Status badge pill: dark text on the status color
    pub fn badge(color: Color) -> Style {
        Style::default()
            .fg(colors::BG_DARK)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    }
}
