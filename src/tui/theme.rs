//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions, including the bar colors for
//! each position marker. Provides both ratatui styles (for the TUI) and ANSI
//! escape codes (for CLI output).

use ratatui::style::{Color, Modifier, Style};

use crate::sequence::Marker;

/// Theme configuration.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and key hints
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Bars without any marker
    pub bar: Color,
    /// Bars being swapped
    pub bar_comparing: Color,
    /// Bars being compared or inside the active merge span
    pub bar_current: Color,
    /// Pivot / candidate minimum
    pub bar_pivot: Color,
    /// Bars in their final position
    pub bar_sorted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Default theme using standard ANSI colors.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
            bar: Color::Blue,
            bar_comparing: Color::Red,
            bar_current: Color::Yellow,
            bar_pivot: Color::Magenta,
            bar_sorted: Color::Green,
        }
    }

    /// Bar color for the marker that wins on a position.
    pub fn marker_color(&self, marker: Option<Marker>) -> Color {
        match marker {
            None => self.bar,
            Some(Marker::Comparing) => self.bar_comparing,
            Some(Marker::Current) => self.bar_current,
            Some(Marker::Pivot) => self.bar_pivot,
            Some(Marker::Sorted) => self.bar_sorted,
        }
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, titles).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    // ANSI color helpers for CLI output

    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

const ANSI_RESET: &str = "\x1b[0m";

/// Whether CLI output should carry ANSI colors.
///
/// Disabled by `NO_COLOR` and when stdout is not a terminal.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint(color: Color, text: &str) -> String {
    if colors_enabled() {
        wrap_ansi(color, text)
    } else {
        text.to_string()
    }
}

fn wrap_ansi(color: Color, text: &str) -> String {
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// Convert a ratatui Color to an ANSI foreground escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::White => "\x1b[97m",
        Color::Reset => ANSI_RESET,
        _ => "",
    }
}

/// Global theme instance.
pub fn current_theme() -> Theme {
    Theme::default()
}
