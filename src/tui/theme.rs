// Theme system for the TUI
//
// A small set of built-in color themes, switched at runtime with 't'.
// Each theme defines colors for every UI element the browser draws.

use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::HighContrast]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name (also the config file value)
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::HighContrast => "High Contrast",
        }
    }

    /// Look up a theme by config name, ignoring case, spaces and dashes
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().replace(' ', "").to_lowercase() == wanted)
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::HighContrast => Theme::high_contrast(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    // Title and status
    pub title: Color,
    pub status_bar: Color,
    pub highlight: Color,

    // Tree
    pub selection: Color,
    pub selection_fg: Color,
    pub cursor: Color,
    pub expander: Color,

    // Preview
    pub heading: Color,
    pub code: Color,
    pub error: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: "Dark",
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Cyan,
            border_type: BorderType::Rounded,
            title: Color::Cyan,
            status_bar: Color::Green,
            highlight: Color::Yellow,
            selection: Color::Rgb(0x2c, 0x4a, 0x6e),
            selection_fg: Color::White,
            cursor: Color::Rgb(0x3a, 0x3a, 0x3a),
            expander: Color::Cyan,
            heading: Color::LightBlue,
            code: Color::Yellow,
            error: Color::Red,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::LightBlue,
            log_debug: Color::Gray,
        }
    }

    /// Light theme for bright terminals
    pub fn light() -> Self {
        Self {
            name: "Light",
            background: Color::Rgb(0xfa, 0xfa, 0xfa),
            foreground: Color::Rgb(0x24, 0x29, 0x2e),
            muted: Color::Rgb(0x8a, 0x8a, 0x8a),
            border: Color::Rgb(0xb0, 0xb0, 0xb0),
            border_focused: Color::Rgb(0x03, 0x66, 0xd6),
            border_type: BorderType::Rounded,
            title: Color::Rgb(0x03, 0x66, 0xd6),
            status_bar: Color::Rgb(0x22, 0x86, 0x3a),
            highlight: Color::Rgb(0xb0, 0x88, 0x00),
            selection: Color::Rgb(0xc8, 0xe1, 0xff),
            selection_fg: Color::Rgb(0x24, 0x29, 0x2e),
            cursor: Color::Rgb(0xe8, 0xe8, 0xe8),
            expander: Color::Rgb(0x03, 0x66, 0xd6),
            heading: Color::Rgb(0x6f, 0x42, 0xc1),
            code: Color::Rgb(0xb3, 0x5c, 0x00),
            error: Color::Rgb(0xcb, 0x24, 0x31),
            log_error: Color::Rgb(0xcb, 0x24, 0x31),
            log_warn: Color::Rgb(0xb0, 0x88, 0x00),
            log_info: Color::Rgb(0x03, 0x66, 0xd6),
            log_debug: Color::Rgb(0x8a, 0x8a, 0x8a),
        }
    }

    /// High contrast theme: pure ANSI colors, thick borders
    pub fn high_contrast() -> Self {
        Self {
            name: "High Contrast",
            background: Color::Black,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            border_type: BorderType::Thick,
            title: Color::White,
            status_bar: Color::White,
            highlight: Color::Yellow,
            selection: Color::Yellow,
            selection_fg: Color::Black,
            cursor: Color::Blue,
            expander: Color::Yellow,
            heading: Color::White,
            code: Color::LightCyan,
            error: Color::LightRed,
            log_error: Color::LightRed,
            log_warn: Color::Yellow,
            log_info: Color::White,
            log_debug: Color::Gray,
        }
    }

    // Helper methods for creating styles

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn log_style(&self, level: &LogLevel) -> Style {
        match level {
            LogLevel::Error => Style::default()
                .fg(self.log_error)
                .add_modifier(Modifier::BOLD),
            LogLevel::Warn => Style::default().fg(self.log_warn),
            LogLevel::Info => Style::default().fg(self.log_info),
            LogLevel::Debug | LogLevel::Trace => Style::default().fg(self.log_debug),
        }
    }
}
